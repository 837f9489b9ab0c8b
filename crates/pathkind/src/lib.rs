//! Path-name algebra for the three name shapes a version-control working copy deals
//! with: local filesystem dirents ([`dirent`]), repository-relative paths
//! ([`relpath`]), and absolute URIs ([`uri`]). Every kind shares the same canonical-form
//! contract: canonicalization is total and idempotent, every other operation requires
//! (and in debug builds asserts) canonical input, and [`dirent`] additionally picks a
//! POSIX or DOS flavor at compile time.
//!
//! The crate body is `#![no_std]` plus `alloc`; the `std` feature, enabled by default,
//! additionally unlocks [`dirent::posix::get_absolute`] / [`dirent::dos::get_absolute`]
//! and the Windows-only backend behind them.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ancestry;
mod canonical;
mod classify;
pub mod dirent;
pub mod error;
pub mod relpath;
pub mod uri;
mod util;
#[cfg(windows)]
mod windows;

pub use error::{PathError, Result};
