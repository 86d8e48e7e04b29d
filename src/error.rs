//! The driver's deferred error channel.
//!
//! OpenGL records semantic errors in a per-context flag that stays set until
//! queried; querying clears it, and only errors raised since the last query
//! are visible. This crate never turns the flag into an automatic result.
//! [`Backend::poll_error`](crate::Backend::poll_error) reads it on demand and
//! the optional debug check logs it after each call.

use std::error;
use std::fmt;

use crate::ffi;

/// An error code read from the driver's flag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// `GL_INVALID_ENUM`: an enumerant argument is not legal for the call.
    InvalidEnum,

    /// `GL_INVALID_VALUE`: a numeric argument is out of range.
    InvalidValue,

    /// `GL_INVALID_OPERATION`: the call is not legal in the current state.
    InvalidOperation,

    /// `GL_INVALID_FRAMEBUFFER_OPERATION`: the bound framebuffer is not
    /// complete.
    InvalidFramebufferOperation,

    /// `GL_OUT_OF_MEMORY`: the driver could not allocate; context state is
    /// undefined afterwards.
    OutOfMemory,

    /// `GL_STACK_UNDERFLOW`: a pop was attempted on an empty stack.
    StackUnderflow,

    /// `GL_STACK_OVERFLOW`: a push exceeded the stack size.
    StackOverflow,

    /// `GL_CONTEXT_LOST`: the context was lost due to a graphics reset.
    ContextLost,

    /// A code this crate does not recognize, passed through as-is.
    Unknown(ffi::GLenum),
}

impl Error {
    /// Interprets a value read from `glGetError`. `GL_NO_ERROR` maps to
    /// `None`.
    pub fn from_gl_enum(value: ffi::GLenum) -> Option<Error> {
        match value {
            ffi::NO_ERROR => None,
            ffi::INVALID_ENUM => Some(Error::InvalidEnum),
            ffi::INVALID_VALUE => Some(Error::InvalidValue),
            ffi::INVALID_OPERATION => Some(Error::InvalidOperation),
            ffi::INVALID_FRAMEBUFFER_OPERATION => Some(Error::InvalidFramebufferOperation),
            ffi::OUT_OF_MEMORY => Some(Error::OutOfMemory),
            ffi::STACK_UNDERFLOW => Some(Error::StackUnderflow),
            ffi::STACK_OVERFLOW => Some(Error::StackOverflow),
            ffi::CONTEXT_LOST => Some(Error::ContextLost),
            other => Some(Error::Unknown(other)),
        }
    }

    /// The registry value for this code.
    pub fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            Error::InvalidEnum => ffi::INVALID_ENUM,
            Error::InvalidValue => ffi::INVALID_VALUE,
            Error::InvalidOperation => ffi::INVALID_OPERATION,
            Error::InvalidFramebufferOperation => ffi::INVALID_FRAMEBUFFER_OPERATION,
            Error::OutOfMemory => ffi::OUT_OF_MEMORY,
            Error::StackUnderflow => ffi::STACK_UNDERFLOW,
            Error::StackOverflow => ffi::STACK_OVERFLOW,
            Error::ContextLost => ffi::CONTEXT_LOST,
            Error::Unknown(value) => value,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidEnum => write!(f, "invalid enum"),
            Error::InvalidValue => write!(f, "invalid value"),
            Error::InvalidOperation => write!(f, "invalid operation"),
            Error::InvalidFramebufferOperation => write!(f, "invalid framebuffer operation"),
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::StackUnderflow => write!(f, "stack underflow"),
            Error::StackOverflow => write!(f, "stack overflow"),
            Error::ContextLost => write!(f, "context lost"),
            Error::Unknown(value) => write!(f, "unknown error code 0x{:04X}", value),
        }
    }
}

impl error::Error for Error {}
