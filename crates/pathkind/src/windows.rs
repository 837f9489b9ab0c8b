//! Windows-only OS glue. Everything here is gated on `cfg(windows)` and the `std`
//! feature; the platform-independent DOS path algebra lives in [`crate::dirent::dos`]
//! and is compiled on every host.

#[cfg(all(windows, feature = "std"))]
pub(crate) mod sys;
