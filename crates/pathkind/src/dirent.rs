//! Local filesystem path names ("dirents"). POSIX and DOS dirents share the same
//! algebra (see [`engine`]) and differ only in root shape and case-folding rules.
//!
//! [`posix`] and [`dos`] are always compiled, so both flavors' behavior is directly
//! unit-testable from any host. The functions re-exported at this module's top level
//! pick whichever flavor matches the compilation target, per the compile-time
//! platform switch this crate's semantics are built around.

mod engine;
pub mod dos;
pub mod posix;

#[cfg(windows)]
pub use dos::*;
#[cfg(not(windows))]
pub use posix::*;
