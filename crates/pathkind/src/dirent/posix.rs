//! POSIX dirent semantics: `/`-rooted, no drive letters, no case folding. Pure and
//! host-independent: compiled and unit-tested on every platform, not just POSIX
//! ones; [`super::dos`] re-exports this module's DOS counterpart as the platform
//! default on `cfg(windows)`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::engine::Engine;
use crate::classify;

const ENGINE: Engine = Engine {
    dos: false,
    root_len: classify::posix_dirent_root_len,
    normalize_root: |root| root.to_string(),
};

/// The unique canonical form of `s` under POSIX dirent rules.
pub fn canonicalize(s: &str) -> String {
    ENGINE.canonicalize(s)
}

/// Whether `s` is exactly its own root segment.
pub fn is_root(s: &str) -> bool {
    ENGINE.is_root(s)
}

/// Whether `s` names an absolute location.
pub fn is_absolute(s: &str) -> bool {
    ENGINE.is_absolute(s)
}

/// Whether `s` is already in canonical form.
pub fn is_canonical(s: &str) -> bool {
    ENGINE.is_canonical(s)
}

/// Joins `base` and `comp`. An absolute `comp` discards `base` entirely.
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

/// The longest common ancestor of canonical `a` and `b`.
pub fn get_longest_ancestor(a: &str, b: &str) -> String {
    ENGINE.get_longest_ancestor(a, b)
}

/// Factors the common ancestor out of `paths`, returning it and each path's suffix.
pub fn condense_targets(paths: &[&str]) -> (String, Vec<String>) {
    ENGINE.condense_targets(paths)
}

/// Canonical form rendered with the platform's native separator (`/`, so a no-op
/// beyond canonicalization and the `""` → `"."` convention).
pub fn local_style(s: &str) -> String {
    ENGINE.local_style(s)
}

/// Canonical form in the engine's internal representation (identical to
/// [`canonicalize`] on POSIX, since `/` already is the internal separator).
pub fn internal_style(s: &str) -> String {
    ENGINE.internal_style(s)
}

/// Resolves `p` against `base`, walking (but not permitting past-root) `..`
/// components. Returns `(false, None)` if `p` would escape `base`.
pub fn is_under_root(base: &str, p: &str) -> (bool, Option<String>) {
    ENGINE.is_under_root(base, p)
}

/// Resolves `p` to an absolute canonical dirent using the process's current
/// working directory.
#[cfg(feature = "std")]
pub fn get_absolute(p: &str) -> crate::error::Result<String> {
    use crate::error::PathError;
    if is_absolute(p) {
        return Ok(canonicalize(p));
    }
    let cwd = std::env::current_dir().map_err(|e| PathError::SystemError(e.to_string()))?;
    let cwd = cwd
        .to_str()
        .ok_or_else(|| PathError::SystemError("current directory is not valid UTF-8".into()))?;
    Ok(canonicalize(&alloc::format!("{cwd}/{p}")))
}
