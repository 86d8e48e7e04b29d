//! Entry point resolution and dispatch.
//!
//! A [`DispatchTable`] holds one slot per native command the crate exposes.
//! The whole table is populated in bulk by [`DispatchTable::load_with`] when a
//! rendering context is activated; there is no per-call lazy resolution.
//! Addresses are not stable across contexts, so a table must be rebuilt after
//! every context switch.

use log::debug;
use std::mem;
use std::os::raw;

use crate::ffi::*;

/// A resolved (or absent) native entry point.
#[derive(Clone, Copy)]
pub struct FnSlot {
    ptr: *const raw::c_void,
}

impl FnSlot {
    fn new(ptr: *const raw::c_void) -> Self {
        FnSlot { ptr }
    }

    /// Whether the driver returned an address for this entry point.
    pub fn is_loaded(&self) -> bool {
        !self.ptr.is_null()
    }

    fn entry_point(&self) -> Option<*const raw::c_void> {
        if self.ptr.is_null() {
            None
        } else {
            Some(self.ptr)
        }
    }

    fn ptr(&self) -> *const raw::c_void {
        self.ptr
    }
}

/// Queries the canonical symbol first, then any registered fallback names
/// (older ARB/EXT spellings of the same command).
fn resolve<F>(loadfn: &mut F, symbol: &'static str, fallbacks: &[&'static str]) -> *const raw::c_void
where
    F: FnMut(&str) -> *const raw::c_void,
{
    let mut ptr = loadfn(symbol);
    if ptr.is_null() {
        for &sym in fallbacks {
            ptr = loadfn(sym);
            if !ptr.is_null() {
                break;
            }
        }
    }
    if ptr.is_null() {
        debug!(target: "gl", "{} unresolved for the current context", symbol);
    }
    ptr
}

macro_rules! commands {
    ($(
        fn $name:ident [$sym:literal $(, $fallback:literal)*] ($($arg:ident: $ty:ty),*) $(-> $ret:ty)?;
    )*) => {
        /// Per-context table of resolved native entry points.
        #[allow(non_snake_case)]
        pub struct DispatchTable {
            $( $name: FnSlot, )*
        }

        impl DispatchTable {
            /// Every canonical symbol the table resolves, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($sym),*];

            /// Walks the full command set, asking the platform for each
            /// address. Null returns are stored as absent slots rather than
            /// treated as errors; availability depends on the context's
            /// version and extension set.
            pub fn load_with<F>(mut loadfn: F) -> Self
            where
                F: FnMut(&str) -> *const raw::c_void,
            {
                let table = DispatchTable {
                    $( $name: FnSlot::new(resolve(&mut loadfn, $sym, &[$($fallback),*])), )*
                };
                debug!(
                    target: "gl",
                    "resolved {}/{} entry points",
                    table.loaded_count(),
                    Self::NAMES.len(),
                );
                table
            }

            /// Whether the named command resolved to an address.
            pub fn is_loaded(&self, symbol: &str) -> bool {
                match symbol {
                    $( $sym => self.$name.is_loaded(), )*
                    _ => false,
                }
            }

            /// The resolved address for the named command, if any. Repeated
            /// queries return the same address for the lifetime of the table.
            pub fn entry_point(&self, symbol: &str) -> Option<*const raw::c_void> {
                match symbol {
                    $( $sym => self.$name.entry_point(), )*
                    _ => None,
                }
            }

            /// Number of commands that resolved to an address.
            pub fn loaded_count(&self) -> usize {
                Self::NAMES.iter().filter(|name| self.is_loaded(name)).count()
            }

            $(
                #[allow(non_snake_case)]
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
                    assert!(
                        self.$name.is_loaded(),
                        "{} is not loaded for the current context",
                        $sym,
                    );
                    let f = mem::transmute::<
                        *const raw::c_void,
                        extern "system" fn($($ty),*) $(-> $ret)?,
                    >(self.$name.ptr());
                    f($($arg),*)
                }
            )*
        }
    };
}

commands! {
    // Error query.
    fn GetError["glGetError"]() -> GLenum;

    // Pipeline state.
    fn Enable["glEnable"](cap: GLenum);
    fn Disable["glDisable"](cap: GLenum);
    fn BlendFunc["glBlendFunc"](sfactor: GLenum, dfactor: GLenum);
    fn DepthFunc["glDepthFunc"](func: GLenum);
    fn CullFace["glCullFace"](mode: GLenum);
    fn FrontFace["glFrontFace"](mode: GLenum);
    fn PolygonMode["glPolygonMode"](face: GLenum, mode: GLenum);
    fn LineWidth["glLineWidth"](width: GLfloat);
    fn PointSize["glPointSize"](size: GLfloat);
    fn Viewport["glViewport"](x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn Scissor["glScissor"](x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn ClearColor["glClearColor"](red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf);
    fn ClearDepth["glClearDepth"](depth: GLclampd);
    fn ClearStencil["glClearStencil"](s: GLint);
    fn Clear["glClear"](mask: GLbitfield);
    fn PixelStorei["glPixelStorei"](pname: GLenum, param: GLint);
    fn Finish["glFinish"]();
    fn Flush["glFlush"]();

    // Queries.
    fn GetString["glGetString"](name: GLenum) -> *const GLubyte;
    fn GetIntegerv["glGetIntegerv"](pname: GLenum, data: *mut GLint);
    fn ReadPixels["glReadPixels"](x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut GLvoid);

    // Buffer objects.
    fn GenBuffers["glGenBuffers", "glGenBuffersARB"](n: GLsizei, buffers: *mut GLuint);
    fn DeleteBuffers["glDeleteBuffers", "glDeleteBuffersARB"](n: GLsizei, buffers: *const GLuint);
    fn BindBuffer["glBindBuffer", "glBindBufferARB"](target: GLenum, buffer: GLuint);
    fn BufferData["glBufferData", "glBufferDataARB"](target: GLenum, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
    fn BufferSubData["glBufferSubData", "glBufferSubDataARB"](target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const GLvoid);

    // Vertex arrays.
    fn GenVertexArrays["glGenVertexArrays", "glGenVertexArraysAPPLE", "glGenVertexArraysOES"](n: GLsizei, arrays: *mut GLuint);
    fn DeleteVertexArrays["glDeleteVertexArrays", "glDeleteVertexArraysAPPLE", "glDeleteVertexArraysOES"](n: GLsizei, arrays: *const GLuint);
    fn BindVertexArray["glBindVertexArray", "glBindVertexArrayAPPLE", "glBindVertexArrayOES"](array: GLuint);
    fn VertexAttribPointer["glVertexAttribPointer", "glVertexAttribPointerARB"](index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const GLvoid);
    fn EnableVertexAttribArray["glEnableVertexAttribArray", "glEnableVertexAttribArrayARB"](index: GLuint);
    fn DisableVertexAttribArray["glDisableVertexAttribArray", "glDisableVertexAttribArrayARB"](index: GLuint);

    // Textures.
    fn GenTextures["glGenTextures", "glGenTexturesEXT"](n: GLsizei, textures: *mut GLuint);
    fn DeleteTextures["glDeleteTextures", "glDeleteTexturesEXT"](n: GLsizei, textures: *const GLuint);
    fn BindTexture["glBindTexture", "glBindTextureEXT"](target: GLenum, texture: GLuint);
    fn ActiveTexture["glActiveTexture", "glActiveTextureARB"](texture: GLenum);
    fn TexParameteri["glTexParameteri"](target: GLenum, pname: GLenum, param: GLint);
    fn TexImage2D["glTexImage2D"](target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const GLvoid);
    fn GetTexImage["glGetTexImage"](target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut GLvoid);
    fn GenerateMipmap["glGenerateMipmap", "glGenerateMipmapEXT"](target: GLenum);

    // Shaders and programs.
    fn CreateShader["glCreateShader", "glCreateShaderObjectARB"](type_: GLenum) -> GLuint;
    fn DeleteShader["glDeleteShader"](shader: GLuint);
    fn ShaderSource["glShaderSource", "glShaderSourceARB"](shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
    fn CompileShader["glCompileShader", "glCompileShaderARB"](shader: GLuint);
    fn GetShaderiv["glGetShaderiv"](shader: GLuint, pname: GLenum, params: *mut GLint);
    fn GetShaderInfoLog["glGetShaderInfoLog"](shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn CreateProgram["glCreateProgram", "glCreateProgramObjectARB"]() -> GLuint;
    fn DeleteProgram["glDeleteProgram"](program: GLuint);
    fn AttachShader["glAttachShader", "glAttachObjectARB"](program: GLuint, shader: GLuint);
    fn LinkProgram["glLinkProgram", "glLinkProgramARB"](program: GLuint);
    fn GetProgramiv["glGetProgramiv"](program: GLuint, pname: GLenum, params: *mut GLint);
    fn GetProgramInfoLog["glGetProgramInfoLog"](program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn UseProgram["glUseProgram", "glUseProgramObjectARB"](program: GLuint);
    fn GetUniformLocation["glGetUniformLocation", "glGetUniformLocationARB"](program: GLuint, name: *const GLchar) -> GLint;
    fn Uniform1i["glUniform1i", "glUniform1iARB"](location: GLint, v0: GLint);

    // Draw calls.
    fn DrawArrays["glDrawArrays", "glDrawArraysEXT"](mode: GLenum, first: GLint, count: GLsizei);
    fn DrawElements["glDrawElements"](mode: GLenum, count: GLsizei, type_: GLenum, indices: *const GLvoid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn null_slot_is_absent() {
        let slot = FnSlot::new(ptr::null());
        assert!(!slot.is_loaded());
        assert_eq!(slot.entry_point(), None);
    }

    #[test]
    fn resolve_prefers_canonical_symbol() {
        let marker = 0x1000 as *const raw::c_void;
        let mut queried = Vec::new();
        let ptr = resolve(
            &mut |sym: &str| {
                queried.push(sym.to_owned());
                marker
            },
            "glActiveTexture",
            &["glActiveTextureARB"],
        );
        assert_eq!(ptr, marker);
        assert_eq!(queried, owned(&["glActiveTexture"]));
    }

    #[test]
    fn resolve_walks_fallbacks_in_order() {
        let marker = 0x2000 as *const raw::c_void;
        let mut queried = Vec::new();
        let ptr = resolve(
            &mut |sym: &str| {
                queried.push(sym.to_owned());
                if sym == "glActiveTextureARB" {
                    marker
                } else {
                    ptr::null()
                }
            },
            "glActiveTexture",
            &["glActiveTextureARB"],
        );
        assert_eq!(ptr, marker);
        assert_eq!(queried, owned(&["glActiveTexture", "glActiveTextureARB"]));
    }

    #[test]
    fn unknown_symbol_is_never_loaded() {
        let table = DispatchTable::load_with(|_| 0x3000 as *const raw::c_void);
        assert!(!table.is_loaded("glNotARealCommand"));
        assert_eq!(table.entry_point("glNotARealCommand"), None);
    }

    #[test]
    fn full_loader_populates_every_slot() {
        let table = DispatchTable::load_with(|_| 0x4000 as *const raw::c_void);
        assert_eq!(table.loaded_count(), DispatchTable::NAMES.len());
    }

    #[test]
    fn lookup_is_idempotent_within_one_activation() {
        let mut next = 0x5000usize;
        let table = DispatchTable::load_with(|_| {
            next += 0x10;
            next as *const raw::c_void
        });
        let first = table.entry_point("glEnable");
        let second = table.entry_point("glEnable");
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }
}
