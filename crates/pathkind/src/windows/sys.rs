//! [Windows only] Resolves a possibly-relative DOS dirent to an absolute one using
//! `GetFullPathNameW`, which natively understands drive-relative (`X:rest`), rooted
//! (`\rest`), and plain relative forms by consulting the process's global and
//! per-drive current directories, exactly the three cases [`super::get_absolute`]
//! needs to handle.

use alloc::format;
use alloc::string::String;
use std::vec::Vec;
use windows_sys::Win32::Storage::FileSystem::GetFullPathNameW;

use crate::error::{PathError, Result};

/// Resolves `p` to an absolute path string via the Win32 API. `p` need not exist.
pub(crate) fn full_path(p: &str) -> Result<String> {
    let mut wide: Vec<u16> = p.encode_utf16().collect();
    wide.push(0);

    let mut buffer: Vec<u16> = alloc::vec![0u16; 32768];
    // SAFETY: `wide` is a NUL-terminated UTF-16 string and `buffer` has room for
    // `buffer.len()` u16s as required by `GetFullPathNameW`.
    let len = unsafe {
        GetFullPathNameW(
            wide.as_ptr(),
            buffer.len() as u32,
            buffer.as_mut_ptr(),
            core::ptr::null_mut(),
        )
    };
    if len == 0 || (len as usize) > buffer.len() {
        return Err(PathError::SystemError(format!(
            "GetFullPathNameW failed for {p:?} (code {len})"
        )));
    }
    String::from_utf16(&buffer[..len as usize])
        .map_err(|_| PathError::SystemError(format!("GetFullPathNameW returned invalid UTF-16 for {p:?}")))
}
