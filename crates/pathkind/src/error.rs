//! Error type surfaced by the two fallible entry points, [`crate::uri::get_dirent_from_file_url`]
//! and [`crate::dirent::get_absolute`]. Every other function in this crate is total.

use alloc::string::String;
use core::fmt;

/// Errors produced by path operations.
///
/// Canonicalization and the classification predicates never fail: malformed input is
/// repaired rather than rejected. Only a `file:` URL with the wrong scheme or host, and a
/// failure to read the process's current working directory, surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `file:` URL had a scheme other than `file`, or a non-`localhost` host on a
    /// platform where that host cannot be mapped onto a UNC share.
    MalformedInput(String),
    /// The process's current working directory (or, on DOS, a drive's current
    /// directory) could not be read.
    SystemError(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            Self::SystemError(msg) => write!(f, "system error: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// Result alias for the fallible operations in this crate.
pub type Result<T> = core::result::Result<T, PathError>;
