//! Dynamic entry point dispatch for the OpenGL C API.
//!
//! The native driver exposes its commands as C entry points whose addresses
//! are only known at run time and only valid for the rendering context that
//! resolved them. This crate resolves the full command set in bulk when a
//! context is activated, stores the addresses in a per-context
//! [`DispatchTable`], and layers a typed, call-logging wrapper
//! ([`Backend`]) on top.
//!
//! Context creation and current-ness are the caller's platform glue. Given a
//! `get_proc_address` query for the current context:
//!
//! ```no_run
//! # fn get_proc_address(_: &str) -> *const std::os::raw::c_void { std::ptr::null() }
//! let gl = glcall::init(get_proc_address);
//! gl.clear_color(0.0, 0.0, 0.0, 1.0);
//! gl.clear(glcall::ffi::COLOR_BUFFER_BIT);
//! ```
//!
//! Errors follow the native deferred model: the driver records semantic
//! errors in a sticky per-context flag that [`Backend::poll_error`] reads and
//! clears. Invoking an entry point the current context did not resolve
//! panics instead of calling through null.

pub mod dispatch;
pub mod error;
pub mod ffi;
pub mod library;
pub mod param;

mod gl;

use std::os::raw;

/// Initialize the library for the rendering context that is current on this
/// thread, resolving every entry point through `query_proc_address`.
pub fn init<F>(query_proc_address: F) -> Backend
where
    F: FnMut(&str) -> *const raw::c_void,
{
    Backend::load(query_proc_address)
}

#[doc(inline)]
pub use crate::dispatch::DispatchTable;

#[doc(inline)]
pub use crate::error::Error;

#[doc(inline)]
pub use crate::gl::Backend;

#[doc(inline)]
pub use crate::library::Library;

#[doc(inline)]
pub use crate::param::BlendFactor;

#[doc(inline)]
pub use crate::param::BufferKind;

#[doc(inline)]
pub use crate::param::BufferUsage;

#[doc(inline)]
pub use crate::param::Capability;

#[doc(inline)]
pub use crate::param::DataType;

#[doc(inline)]
pub use crate::param::DepthFunction;

#[doc(inline)]
pub use crate::param::Face;

#[doc(inline)]
pub use crate::param::MagFilter;

#[doc(inline)]
pub use crate::param::MinFilter;

#[doc(inline)]
pub use crate::param::PixelFormat;

#[doc(inline)]
pub use crate::param::PolygonMode;

#[doc(inline)]
pub use crate::param::Primitive;

#[doc(inline)]
pub use crate::param::ShaderKind;

#[doc(inline)]
pub use crate::param::StringName;

#[doc(inline)]
pub use crate::param::TextureTarget;

#[doc(inline)]
pub use crate::param::Winding;

#[doc(inline)]
pub use crate::param::WrapCoord;

#[doc(inline)]
pub use crate::param::WrapMode;
