//! DOS dirent semantics: drive letters, UNC shares, and backslash-as-separator. Pure
//! and host-independent except for [`get_absolute`], which needs the real Win32 API
//! and is only compiled on Windows; the rest of this module is exercised by unit
//! tests on every host regardless of target platform.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::engine::Engine;
use crate::classify;

fn normalize_root(root: &str) -> String {
    let bytes = root.as_bytes();
    if root.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let mut out = String::with_capacity(root.len());
        out.push(bytes[0].to_ascii_uppercase() as char);
        out.push(':');
        if root.len() > 2 {
            out.push('/');
        }
        return out;
    }
    if let Some(rest) = root.strip_prefix("//") {
        return match rest.find('/') {
            Some(idx) => {
                let (host, share) = (&rest[..idx], &rest[idx + 1..]);
                let mut out = String::with_capacity(root.len());
                out.push_str("//");
                out.extend(host.bytes().map(|b| b.to_ascii_lowercase() as char));
                out.push('/');
                out.push_str(share);
                out
            }
            // `//host` with no share: a historical quirk in the source this is
            // ported from collapses it to a single-slash `/host` dirent.
            None => {
                let mut out = String::with_capacity(1 + rest.len());
                out.push('/');
                out.extend(rest.bytes().map(|b| b.to_ascii_lowercase() as char));
                out
            }
        };
    }
    root.to_string()
}

const ENGINE: Engine = Engine {
    dos: true,
    root_len: classify::dos_dirent_root_len,
    normalize_root,
};

/// The unique canonical form of `s` under DOS dirent rules.
pub fn canonicalize(s: &str) -> String {
    ENGINE.canonicalize(s)
}

/// Whether `s` is exactly its own root segment.
pub fn is_root(s: &str) -> bool {
    ENGINE.is_root(s)
}

/// Whether `s` names an absolute location (drive-relative `X:` does not count).
pub fn is_absolute(s: &str) -> bool {
    ENGINE.is_absolute(s)
}

/// Whether `s` is already in canonical form.
pub fn is_canonical(s: &str) -> bool {
    ENGINE.is_canonical(s)
}

/// Joins `base` and `comp`. A rooted `comp` (drive-absolute, drive-relative, or
/// UNC) discards `base` entirely; a bare leading separator attaches to `base`'s
/// drive instead.
pub fn join(base: &str, comp: &str) -> String {
    ENGINE.join(base, comp)
}

/// Left-folds [`join`] over `parts`.
pub fn join_many(parts: &[&str]) -> String {
    ENGINE.join_many(parts)
}

/// The last component of canonical `p`.
pub fn basename(p: &str) -> String {
    ENGINE.basename(p).to_string()
}

/// The parent of canonical `p`.
pub fn dirname(p: &str) -> String {
    ENGINE.dirname(p)
}

/// `(dirname(p), basename(p))` computed together.
pub fn split(p: &str) -> (String, String) {
    let (dir, base) = ENGINE.split(p);
    (dir, base.to_string())
}

/// Whether canonical `a` is an ancestor of (or equal to) canonical `b`.
pub fn is_ancestor(a: &str, b: &str) -> bool {
    ENGINE.is_ancestor(a, b)
}

/// The suffix of `b` past `a`, or `b` unchanged if `a` is not an ancestor.
pub fn skip_ancestor(a: &str, b: &str) -> String {
    ENGINE.skip_ancestor(a, b)
}

/// Like [`skip_ancestor`] but `None` when `b == a`.
pub fn is_child(a: &str, b: &str) -> Option<String> {
    ENGINE.is_child(a, b)
}

/// The longest common ancestor of canonical `a` and `b`. Paths on different drives
/// or UNC shares have no common ancestor and yield `""`.
pub fn get_longest_ancestor(a: &str, b: &str) -> String {
    ENGINE.get_longest_ancestor(a, b)
}

/// Factors the common ancestor out of `paths`, returning it and each path's suffix.
pub fn condense_targets(paths: &[&str]) -> (String, Vec<String>) {
    ENGINE.condense_targets(paths)
}

/// Canonical form rendered with `\` separators; UNC roots render as `\\host\share`.
pub fn local_style(s: &str) -> String {
    ENGINE.local_style(s)
}

/// Canonical form in the engine's internal (`/`-separated) representation.
pub fn internal_style(s: &str) -> String {
    ENGINE.internal_style(s)
}

/// Resolves `p` against `base`, walking (but not permitting past-root) `..`
/// components. Returns `(false, None)` if `p` would escape `base`. `\` in `p` is
/// treated as a separator.
pub fn is_under_root(base: &str, p: &str) -> (bool, Option<String>) {
    ENGINE.is_under_root(base, p)
}

/// Resolves `p` to an absolute canonical dirent, consulting the global current
/// directory or, for a drive-relative `p`, that drive's own current directory.
#[cfg(all(feature = "std", windows))]
pub fn get_absolute(p: &str) -> crate::error::Result<String> {
    if is_absolute(p) {
        return Ok(canonicalize(p));
    }
    let resolved = crate::windows::sys::full_path(p)?;
    Ok(canonicalize(&resolved))
}
