use std::ffi::{CStr, CString};

use crate::error::{Error, Result};

/// Applies `tag` to every locale category and returns the name the C
/// runtime reports back.
pub fn set_locale(tag: &str) -> Result<String> {
    let requested = CString::new(tag).map_err(|_| Error::Locale {
        tag: tag.to_string(),
    })?;

    // SAFETY: `requested` is NUL-terminated and outlives the call. The
    // returned pointer is copied before any other locale call can replace it.
    let applied = unsafe { libc::setlocale(libc::LC_ALL, requested.as_ptr()) };

    if applied.is_null() {
        return Err(Error::Locale {
            tag: tag.to_string(),
        });
    }

    // SAFETY: non-null results from setlocale point at a NUL-terminated string.
    let applied = unsafe { CStr::from_ptr(applied) };

    Ok(applied.to_string_lossy().into_owned())
}
