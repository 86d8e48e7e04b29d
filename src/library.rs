//! Native client library loading.
//!
//! Resolution normally goes through the platform's `*GetProcAddress` entry
//! because core `dlsym`/`GetProcAddress` lookup only covers the oldest
//! commands on most drivers. This module opens the client library, finds its
//! own `*GetProcAddress` export and hands out a query suitable for
//! [`Backend::load`](crate::Backend::load), falling back to plain symbol
//! lookup for commands the driver exports directly.

use log::debug;
use std::ffi::CString;
use std::os::raw;
use std::{error, fmt, ptr};

#[cfg(all(unix, not(target_os = "macos")))]
const CANDIDATES: &[&str] = &["libGL.so.1", "libGL.so", "libGLESv2.so.2"];

#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &[
    "/System/Library/Frameworks/OpenGL.framework/OpenGL",
    "/System/Library/Frameworks/OpenGL.framework/Versions/A/OpenGL",
];

#[cfg(windows)]
const CANDIDATES: &[&str] = &["opengl32.dll"];

#[cfg(all(unix, not(target_os = "macos")))]
const GPA_SYMBOLS: &[&[u8]] = &[
    b"glXGetProcAddressARB\0",
    b"glXGetProcAddress\0",
    b"eglGetProcAddress\0",
];

#[cfg(target_os = "macos")]
const GPA_SYMBOLS: &[&[u8]] = &[];

#[cfg(windows)]
const GPA_SYMBOLS: &[&[u8]] = &[b"wglGetProcAddress\0"];

type GetProcAddressFn = unsafe extern "system" fn(*const raw::c_char) -> *const raw::c_void;

/// Failure to open the platform's OpenGL client library.
#[derive(Debug)]
pub struct LoadError {
    inner: Option<libloading::Error>,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to open the OpenGL client library")
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.inner.as_ref().map(|e| e as _)
    }
}

/// Handle to the opened client library.
pub struct Library {
    library: libloading::Library,
    get_proc_address: Option<GetProcAddressFn>,
}

impl Library {
    /// Opens the first client library candidate for this platform.
    pub fn open() -> Result<Self, LoadError> {
        let mut last = None;
        for name in CANDIDATES {
            match unsafe { libloading::Library::new(name) } {
                Ok(library) => {
                    debug!(target: "gl", "opened client library {}", name);
                    return Ok(Library::wrap(library));
                }
                Err(e) => last = Some(e),
            }
        }
        Err(LoadError { inner: last })
    }

    fn wrap(library: libloading::Library) -> Self {
        let mut get_proc_address = None;
        for symbol in GPA_SYMBOLS {
            if let Ok(f) = unsafe { library.get::<GetProcAddressFn>(symbol) } {
                get_proc_address = Some(*f);
                break;
            }
        }
        Library {
            library,
            get_proc_address,
        }
    }

    /// Queries the address of a named entry point, suitable for
    /// [`Backend::load`](crate::Backend::load).
    pub fn query(&self, symbol: &str) -> *const raw::c_void {
        let name = match CString::new(symbol) {
            Ok(name) => name,
            Err(_) => return ptr::null(),
        };
        if let Some(gpa) = self.get_proc_address {
            let address = unsafe { gpa(name.as_ptr()) };
            if significant(address) {
                return address;
            }
        }
        match unsafe {
            self.library
                .get::<unsafe extern "system" fn()>(name.as_bytes_with_nul())
        } {
            Ok(f) => *f as *const raw::c_void,
            Err(_) => ptr::null(),
        }
    }
}

/// Some WGL drivers return small sentinel values instead of null for
/// unsupported commands.
fn significant(address: *const raw::c_void) -> bool {
    !matches!(address as isize, -1..=3)
}
