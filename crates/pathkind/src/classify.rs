//! Root-segment classification: the length of the prefix of a string that names its
//! root, for each kind and platform flavor. A root length of 0 means the input is
//! relative.

use crate::util::find_separator;

/// POSIX dirent root: `/` if the string starts with a separator, else relative.
pub(crate) fn posix_dirent_root_len(s: &str) -> usize {
    if s.as_bytes().first() == Some(&b'/') {
        1
    } else {
        0
    }
}

fn is_drive_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// DOS dirent root length. Recognizes UNC (`//host/share`), drive (`X:` or `X:/`),
/// and the drive-unspecified leading-slash form.
pub(crate) fn dos_dirent_root_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'/' && bytes[1] == b'/' {
        // `//host/share`: scan past the host, then past the share.
        let host_start = 2;
        let host_end = find_separator(s, host_start, true).unwrap_or(s.len());
        if host_end >= s.len() {
            // `//host` with nothing after it: a bare host, no share.
            return s.len();
        }
        let share_start = host_end + 1;
        if share_start >= s.len() {
            return s.len();
        }
        let share_end = find_separator(s, share_start, true).unwrap_or(s.len());
        share_end
    } else if bytes.len() >= 2 && is_drive_letter(bytes[0]) && bytes[1] == b':' {
        if bytes.len() >= 3 && (bytes[2] == b'/' || bytes[2] == b'\\') {
            3
        } else {
            2
        }
    } else if bytes.first() == Some(&b'/') || bytes.first() == Some(&b'\\') {
        1
    } else {
        0
    }
}

/// Whether a DOS dirent root is the drive-relative form `X:` (no trailing separator).
pub(crate) fn dos_is_drive_relative_root(root: &str) -> bool {
    root.len() == 2 && is_drive_letter(root.as_bytes()[0]) && root.as_bytes()[1] == b':'
}

/// A relpath never has a root.
pub(crate) fn relpath_root_len(_s: &str) -> usize {
    0
}

fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Finds the end of a syntactically valid scheme (`[A-Za-z][A-Za-z0-9+.-]*`) followed
/// immediately by `:`. Returns `None` when the input has no such prefix.
fn scheme_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !is_scheme_start(bytes[0]) {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && is_scheme_char(bytes[i]) {
        i += 1;
    }
    if bytes.get(i) == Some(&b':') {
        Some(i)
    } else {
        None
    }
}

/// URI root length: `scheme://authority` for a hierarchical scheme, `scheme:` otherwise.
/// Zero when the input has no valid scheme prefix.
pub(crate) fn uri_root_len(s: &str) -> usize {
    let Some(scheme_end) = scheme_len(s) else {
        return 0;
    };
    let after_colon = scheme_end + 1;
    let bytes = s.as_bytes();
    if bytes.len() >= after_colon + 2
        && bytes[after_colon] == b'/'
        && bytes[after_colon + 1] == b'/'
    {
        let authority_start = after_colon + 2;
        let authority_end = find_separator(s, authority_start, false).unwrap_or(s.len());
        authority_end
    } else {
        after_colon
    }
}
