//! Shared component-splitting pass used by every kind's canonicalizer: split the
//! remainder past the root on `/`, drop empty and single-dot components, and carry
//! `..` components through literally. This is the never-walk-`..` canonicalization
//! policy; only [`crate::dirent::is_under_root`] actually walks `..`.

use alloc::string::String;
use alloc::vec::Vec;

/// Splits `remainder` into its non-trivial components.
pub(crate) fn split_components(remainder: &str) -> Vec<&str> {
    remainder
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect()
}

/// A drive-relative DOS root (`"X:"`, no trailing separator) takes its tail directly,
/// with no separator inserted, the same as an empty root: `"X:" + "file"` means "file
/// relative to drive X's current directory", not the drive-absolute `"X:/file"`.
fn root_wants_separator(root: &str) -> bool {
    let bytes = root.as_bytes();
    let is_drive_relative = root.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    !root.is_empty() && !root.ends_with('/') && !is_drive_relative
}

/// Joins `root` and `components` with `/` separators, appending a trailing separator
/// to `root` first only if it doesn't already end in one, isn't empty, and isn't a
/// drive-relative root.
pub(crate) fn join_root_and_components(root: &str, components: &[&str]) -> String {
    let mut out = String::with_capacity(root.len() + components.iter().map(|c| c.len() + 1).sum::<usize>());
    out.push_str(root);
    for (i, c) in components.iter().enumerate() {
        if i > 0 || root_wants_separator(root) {
            out.push('/');
        }
        out.push_str(c);
    }
    out
}
