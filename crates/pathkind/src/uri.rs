//! Absolute (and occasionally relative) URIs. A URI's root is `scheme://authority` for
//! a hierarchical scheme or `scheme:` for an opaque one; scheme and, for a hierarchical
//! root, the host portion of the authority are case-folded to lowercase, while userinfo
//! and every path component keep their original case. Path components are
//! percent-normalized the same way a dirent is case-normalized: canonicalization is
//! still total, never rejecting, per [`crate::classify::uri_root_len`].
//!
//! [`get_dirent_from_file_url`] and [`get_file_url_from_dirent`] bridge this kind to
//! [`crate::dirent`]; the platform selection is the same compile-time switch the dirent
//! module uses, with both flavors exposed under `_posix`/`_dos` suffixes for
//! host-independent testing.

use alloc::format;
use alloc::string::{String, ToString};

use crate::error::{PathError, Result};
use crate::{ancestry, canonical, classify, dirent, util};

/// Splits a URI root into its normalized form and whether it is hierarchical
/// (`scheme://...`, even with an empty authority) as opposed to opaque (`scheme:`).
fn normalize_root(root: &str) -> (String, bool) {
    if let Some(idx) = root.find("://") {
        let scheme = &root[..idx];
        let authority = &root[idx + 3..];
        let mut out = String::with_capacity(root.len());
        out.extend(scheme.bytes().map(|b| b.to_ascii_lowercase() as char));
        out.push_str("://");
        if !authority.is_empty() {
            // The authority never contains `/` (root-length scanning stops there), so
            // the path-safe byte table doubles as the authority-safe one here.
            match authority.rfind('@') {
                Some(at) => {
                    out.push_str(&util::normalize_percent_encoding(&authority[..=at]));
                    let host = authority[at + 1..].to_ascii_lowercase();
                    out.push_str(&util::normalize_percent_encoding(&host));
                }
                None => {
                    let host = authority.to_ascii_lowercase();
                    out.push_str(&util::normalize_percent_encoding(&host));
                }
            }
        }
        (out, true)
    } else {
        let scheme = &root[..root.len() - 1];
        let mut out: String = scheme.bytes().map(|b| b.to_ascii_lowercase() as char).collect();
        out.push(':');
        (out, false)
    }
}

fn is_drive_component(c: &str) -> bool {
    let bytes = c.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Joins a normalized root and its path components, matching URI syntax: a hierarchical
/// root never itself ends in a path separator, so one is inserted before every
/// component; an opaque root's remainder is whatever followed the scheme, with no
/// separator implied.
fn join_uri_root(hierarchical: bool, root: &str, components: &[&str], uppercase_drive: bool) -> String {
    let mut out = String::from(root);
    for (i, c) in components.iter().enumerate() {
        if hierarchical {
            out.push('/');
        } else if i > 0 {
            out.push('/');
        }
        if hierarchical && i == 0 && uppercase_drive && is_drive_component(c) {
            out.extend(c.bytes().map(|b| b.to_ascii_uppercase() as char));
        } else {
            out.push_str(c);
        }
    }
    out
}

/// The unique canonical form of `s` as a URI. A `file://` URI has its first path
/// component uppercased when it looks like a DOS drive letter (`C:`), matching how a
/// DOS dirent round-trips through [`get_dirent_from_file_url`].
pub fn canonicalize(s: &str) -> String {
    let root_len = classify::uri_root_len(s);
    let raw_root = &s[..root_len];
    let (root, hierarchical) = normalize_root(raw_root);
    let is_file = hierarchical && raw_root.len() >= 5 && raw_root[..4].eq_ignore_ascii_case("file");
    let remainder = util::normalize_percent_encoding(&s[root_len..]);
    let components = canonical::split_components(&remainder);
    join_uri_root(hierarchical, &root, &components, is_file)
}

/// Whether `s` is exactly its own root (a bare `scheme://authority` or `scheme:`).
pub fn is_root(s: &str) -> bool {
    let root_len = classify::uri_root_len(s);
    root_len > 0 && root_len == s.len()
}

/// Whether `s` has a scheme at all. Unlike a dirent, a URI has no drive-relative
/// exception: any scheme makes it absolute.
pub fn is_absolute(s: &str) -> bool {
    classify::uri_root_len(s) > 0
}

/// Whether `s` is already in canonical form.
pub fn is_canonical(s: &str) -> bool {
    canonicalize(s) == s
}

/// Joins `base` and `comp`. A `comp` that itself names a scheme discards `base` and
/// becomes the whole result, exactly like an absolute dirent.
pub fn join(base: &str, comp: &str) -> String {
    if classify::uri_root_len(comp) > 0 {
        canonicalize(comp)
    } else {
        canonicalize(&format!("{base}/{comp}"))
    }
}

/// Left-folds [`join`] over `parts`.
pub fn join_many(parts: &[&str]) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut acc = canonicalize(first);
    for part in iter {
        acc = join(&acc, part);
    }
    acc
}

fn root_len_of_canonical(p: &str) -> usize {
    classify::uri_root_len(p)
}

/// The last path component of canonical `p`; empty when `p` is exactly its root.
pub fn basename(p: &str) -> String {
    debug_assert!(is_canonical(p), "basename requires a canonical input");
    let root_len = root_len_of_canonical(p);
    if root_len == p.len() {
        return String::new();
    }
    match p[root_len..].rfind('/') {
        Some(idx) => p[root_len + idx + 1..].to_string(),
        None => p[root_len..].to_string(),
    }
}

/// The parent of canonical `p`; its bare root when `p` has a single path component.
pub fn dirname(p: &str) -> String {
    debug_assert!(is_canonical(p), "dirname requires a canonical input");
    let root_len = root_len_of_canonical(p);
    if root_len == p.len() {
        return p.to_string();
    }
    match p[root_len..].rfind('/') {
        Some(idx) => p[..root_len + idx].to_string(),
        None => p[..root_len].to_string(),
    }
}

/// `(dirname(p), basename(p))` computed together.
pub fn split(p: &str) -> (String, String) {
    (dirname(p), basename(p))
}

/// Whether canonical `a` is an ancestor of (or equal to) canonical `b`.
pub fn is_ancestor(a: &str, b: &str) -> bool {
    debug_assert!(is_canonical(a) && is_canonical(b));
    ancestry::is_ancestor(a, b, is_root(b))
}

/// The suffix of `b` past `a`, or `b` unchanged if `a` is not an ancestor.
pub fn skip_ancestor(a: &str, b: &str) -> String {
    debug_assert!(is_canonical(a) && is_canonical(b));
    ancestry::skip_ancestor(a, b, is_root(b))
}

/// Like [`skip_ancestor`] but `None` when `b == a`.
pub fn is_child(a: &str, b: &str) -> Option<String> {
    debug_assert!(is_canonical(a) && is_canonical(b));
    ancestry::is_child(a, b, is_root(b))
}

/// The longest common ancestor of canonical `a` and `b`. A mismatched scheme or
/// authority yields `""`, even if both strings happen to share a textual prefix.
pub fn get_longest_ancestor(a: &str, b: &str) -> String {
    debug_assert!(is_canonical(a) && is_canonical(b));
    ancestry::longest_common_ancestor(a, root_len_of_canonical(a), b, root_len_of_canonical(b))
}

fn fix_drive_prefix(p: &str) -> String {
    let bytes = p.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && matches!(bytes[2], b':' | b'|') {
        let rest = p[3..].trim_start_matches('/');
        return format!("{}:/{rest}", (bytes[1] as char).to_ascii_uppercase());
    }
    p.to_string()
}

fn parse_file_url(url: &str) -> Result<(&str, String)> {
    if classify::uri_root_len(url) == 0 {
        return Err(PathError::MalformedInput("not an absolute URI".to_string()));
    }
    let colon = url
        .find(':')
        .ok_or_else(|| PathError::MalformedInput("missing scheme".to_string()))?;
    let scheme = &url[..colon];
    if !scheme.eq_ignore_ascii_case("file") {
        return Err(PathError::MalformedInput(format!("unsupported scheme {scheme:?}")));
    }
    let rest = url[colon + 1..]
        .strip_prefix("//")
        .ok_or_else(|| PathError::MalformedInput("file URL must use the // form".to_string()))?;
    let (host, path_with_slash) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    let decoded = util::percent_decode_strict(path_with_slash)
        .ok_or_else(|| PathError::MalformedInput("malformed percent-escape".to_string()))?;
    Ok((host, decoded))
}

/// Converts a `file:` URL to a POSIX dirent. The host must be empty or `localhost`.
pub fn dirent_from_file_url_posix(url: &str) -> Result<String> {
    let (host, decoded) = parse_file_url(url)?;
    if !(host.is_empty() || host.eq_ignore_ascii_case("localhost")) {
        return Err(PathError::MalformedInput(format!("unsupported file URL host {host:?}")));
    }
    Ok(dirent::posix::canonicalize(&decoded))
}

/// Converts a `file:` URL to a DOS dirent. A nonempty host becomes a UNC share; `/A:`
/// or `/A|` in the path position becomes the drive-absolute root `A:/`.
pub fn dirent_from_file_url_dos(url: &str) -> Result<String> {
    let (host, decoded) = parse_file_url(url)?;
    if host.is_empty() {
        Ok(dirent::dos::canonicalize(&fix_drive_prefix(&decoded)))
    } else {
        Ok(dirent::dos::canonicalize(&format!("//{host}{decoded}")))
    }
}

/// [`dirent_from_file_url_dos`] on Windows, [`dirent_from_file_url_posix`] elsewhere.
#[cfg(windows)]
pub fn get_dirent_from_file_url(url: &str) -> Result<String> {
    dirent_from_file_url_dos(url)
}

/// [`dirent_from_file_url_dos`] on Windows, [`dirent_from_file_url_posix`] elsewhere.
#[cfg(not(windows))]
pub fn get_dirent_from_file_url(url: &str) -> Result<String> {
    dirent_from_file_url_posix(url)
}

/// Converts a canonical POSIX dirent to a `file://` URL.
pub fn file_url_from_dirent_posix(d: &str) -> String {
    let canon = dirent::posix::canonicalize(d);
    format!("file://{}", util::normalize_percent_encoding(&canon))
}

/// Converts a canonical DOS dirent to a `file://` URL. A UNC dirent's host becomes the
/// URL's authority; a drive-absolute dirent is rendered with an empty authority.
pub fn file_url_from_dirent_dos(d: &str) -> String {
    let canon = dirent::dos::canonicalize(d);
    match canon.strip_prefix("//") {
        Some(rest) => format!("file://{}", util::normalize_percent_encoding(rest)),
        None => format!("file:///{}", util::normalize_percent_encoding(&canon)),
    }
}

/// [`file_url_from_dirent_dos`] on Windows, [`file_url_from_dirent_posix`] elsewhere.
#[cfg(windows)]
pub fn get_file_url_from_dirent(d: &str) -> String {
    file_url_from_dirent_dos(d)
}

/// [`file_url_from_dirent_dos`] on Windows, [`file_url_from_dirent_posix`] elsewhere.
#[cfg(not(windows))]
pub fn get_file_url_from_dirent(d: &str) -> String {
    file_url_from_dirent_posix(d)
}
