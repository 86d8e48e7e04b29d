//! Typed wrapper layer over the dispatch table.

use log::{error, trace};
use std::os::raw;
use std::{ffi as std_ffi, mem, ptr, rc};

use crate::dispatch::DispatchTable;
use crate::error::Error;
use crate::ffi;
use crate::param::{
    BlendFactor, BufferKind, BufferUsage, Capability, DataType, DepthFunction, Face, MagFilter,
    MinFilter, PixelFormat, PolygonMode, Primitive, ShaderKind, StringName, TextureTarget,
    Winding, WrapCoord, WrapMode,
};

/// Context-scoped handle to the native entry points.
///
/// One `Backend` corresponds to one native rendering context. Clones share
/// the same dispatch table. The caller owns context creation and current-ness:
/// a `Backend` must only be used on the thread where its context is current,
/// and [`reload`](Backend::reload) must be called after binding a different
/// context, since addresses are not stable across contexts.
#[derive(Clone)]
pub struct Backend {
    table: rc::Rc<DispatchTable>,
    debug_check: bool,
}

impl Backend {
    /// Constructor. Resolves every entry point eagerly through the given
    /// `get_proc_address` query.
    ///
    /// The automatic post-call error poll defaults to on in debug builds.
    pub fn load<F>(func: F) -> Self
    where
        F: FnMut(&str) -> *const raw::c_void,
    {
        Backend {
            table: rc::Rc::new(DispatchTable::load_with(func)),
            debug_check: cfg!(debug_assertions),
        }
    }

    /// Re-resolves every entry point after a context switch.
    ///
    /// Clones taken before the reload keep the previous table; re-clone after
    /// activating the new context.
    pub fn reload<F>(&mut self, func: F)
    where
        F: FnMut(&str) -> *const raw::c_void,
    {
        self.table = rc::Rc::new(DispatchTable::load_with(func));
    }

    /// Toggles the post-call error poll performed by every wrapper.
    pub fn set_debug_check(&mut self, enabled: bool) {
        self.debug_check = enabled;
    }

    /// Whether the named command resolved for the current context.
    pub fn is_loaded(&self, symbol: &str) -> bool {
        self.table.is_loaded(symbol)
    }

    /// The resolved address for the named command, if any.
    pub fn entry_point(&self, symbol: &str) -> Option<*const raw::c_void> {
        self.table.entry_point(symbol)
    }

    // Error checking

    /// Reads the driver's error flag. The flag is sticky: it holds the first
    /// error raised since the last query, and reading it clears it.
    pub fn poll_error(&self) -> Option<Error> {
        Error::from_gl_enum(unsafe { self.table.GetError() })
    }

    /// Corresponds to `glGetError` plus an error log.
    pub fn check_error(&self) {
        if let Some(error) = self.poll_error() {
            error!(target: "gl", "{} (0x{:04X})", error, error.as_gl_enum());
        }
    }

    fn maybe_check(&self) {
        if self.debug_check {
            self.check_error();
        }
    }

    // Pipeline state operations

    /// Corresponds to `glEnable`.
    pub fn enable(&self, cap: Capability) {
        trace!(target: "gl", "glEnable{:?}", (cap,));
        unsafe {
            self.table.Enable(cap.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glDisable`.
    pub fn disable(&self, cap: Capability) {
        trace!(target: "gl", "glDisable{:?}", (cap,));
        unsafe {
            self.table.Disable(cap.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glBlendFunc`.
    pub fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        trace!(target: "gl", "glBlendFunc{:?}", (src, dst));
        unsafe {
            self.table.BlendFunc(src.as_gl_enum(), dst.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glDepthFunc`.
    pub fn depth_func(&self, func: DepthFunction) {
        trace!(target: "gl", "glDepthFunc{:?}", (func,));
        unsafe {
            self.table.DepthFunc(func.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glCullFace`.
    pub fn cull_face(&self, face: Face) {
        trace!(target: "gl", "glCullFace{:?}", (face,));
        unsafe {
            self.table.CullFace(face.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glFrontFace`.
    pub fn front_face(&self, winding: Winding) {
        trace!(target: "gl", "glFrontFace{:?}", (winding,));
        unsafe {
            self.table.FrontFace(winding.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glPolygonMode`.
    pub fn polygon_mode(&self, face: Face, mode: PolygonMode) {
        trace!(target: "gl", "glPolygonMode{:?}", (face, mode));
        unsafe {
            self.table.PolygonMode(face.as_gl_enum(), mode.as_gl_enum());
        }
        self.maybe_check();
    }

    /// Corresponds to `glLineWidth`.
    pub fn line_width(&self, width: f32) {
        trace!(target: "gl", "glLineWidth{:?}", (width,));
        unsafe {
            self.table.LineWidth(width);
        }
        self.maybe_check();
    }

    /// Corresponds to `glPointSize`.
    pub fn point_size(&self, size: f32) {
        trace!(target: "gl", "glPointSize{:?}", (size,));
        unsafe {
            self.table.PointSize(size);
        }
        self.maybe_check();
    }

    /// Corresponds to `glViewport`.
    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        trace!(target: "gl", "glViewport{:?}", (x, y, width, height));
        unsafe {
            self.table.Viewport(x, y, width, height);
        }
        self.maybe_check();
    }

    /// Corresponds to `glScissor`.
    pub fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        trace!(target: "gl", "glScissor{:?}", (x, y, width, height));
        unsafe {
            self.table.Scissor(x, y, width, height);
        }
        self.maybe_check();
    }

    /// Corresponds to `glClearColor`.
    pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        trace!(target: "gl", "glClearColor{:?}", (r, g, b, a));
        unsafe {
            self.table.ClearColor(r, g, b, a);
        }
        self.maybe_check();
    }

    /// Corresponds to `glClearDepth`.
    pub fn clear_depth(&self, z: f64) {
        trace!(target: "gl", "glClearDepth{:?}", (z,));
        unsafe {
            self.table.ClearDepth(z);
        }
        self.maybe_check();
    }

    /// Corresponds to `glClearStencil`.
    pub fn clear_stencil(&self, s: i32) {
        trace!(target: "gl", "glClearStencil{:?}", (s,));
        unsafe {
            self.table.ClearStencil(s);
        }
        self.maybe_check();
    }

    /// Corresponds to `glClear`. `mask` is a combination of the
    /// `*_BUFFER_BIT` constants.
    pub fn clear(&self, mask: u32) {
        trace!(target: "gl", "glClear{:?}", (mask,));
        unsafe {
            self.table.Clear(mask);
        }
        self.maybe_check();
    }

    /// Corresponds to `glPixelStorei`.
    pub fn pixel_store_i(&self, pname: ffi::GLenum, param: i32) {
        trace!(target: "gl", "glPixelStorei{:?}", (pname, param));
        unsafe {
            self.table.PixelStorei(pname, param);
        }
        self.maybe_check();
    }

    /// Corresponds to `glFinish`. Blocking is a property of the native call.
    pub fn finish(&self) {
        trace!(target: "gl", "glFinish()");
        unsafe {
            self.table.Finish();
        }
        self.maybe_check();
    }

    /// Corresponds to `glFlush`.
    pub fn flush(&self) {
        trace!(target: "gl", "glFlush()");
        unsafe {
            self.table.Flush();
        }
        self.maybe_check();
    }

    // Queries

    /// Corresponds to `glGetString`. Returns an empty string if the driver
    /// returns null.
    pub fn get_string(&self, name: StringName) -> String {
        trace!(target: "gl", "glGetString{:?}", (name,));
        let ptr = unsafe { self.table.GetString(name.as_gl_enum()) };
        self.maybe_check();
        if ptr.is_null() {
            String::new()
        } else {
            let cstr = unsafe { std_ffi::CStr::from_ptr(ptr as *const ffi::GLchar) };
            cstr.to_string_lossy().into_owned()
        }
    }

    /// Corresponds to `glGetIntegerv` with a single output value.
    pub fn get_integer(&self, pname: ffi::GLenum) -> i32 {
        let mut value: ffi::GLint = 0;
        trace!(target: "gl", "glGetIntegerv{:?} ", (pname,));
        unsafe {
            self.table.GetIntegerv(pname, &mut value as *mut _);
        }
        trace!(target: "gl", " => {}", value);
        self.maybe_check();
        value
    }

    /// Corresponds to `glReadPixels`. The driver writes into `pixels` at the
    /// caller's address; the slice is not copied.
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: DataType,
        pixels: &mut [u8],
    ) {
        trace!(target: "gl", "glReadPixels{:?}", (x, y, width, height, format, ty));
        unsafe {
            self.table.ReadPixels(
                x,
                y,
                width,
                height,
                format.as_gl_enum(),
                ty.as_gl_enum(),
                pixels.as_mut_ptr() as *mut _,
            );
        }
        self.maybe_check();
    }

    // Buffer operations

    /// Corresponds to `glGenBuffers(1)`.
    pub fn gen_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        trace!(target: "gl", "glGenBuffers(1) ");
        unsafe {
            self.table.GenBuffers(1, &mut id as *mut _);
        }
        trace!(target: "gl", " => {}", id);
        self.maybe_check();
        id
    }

    /// Corresponds to `glDeleteBuffers(1)`.
    pub fn delete_buffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteBuffers{:?}", (1, id));
        unsafe {
            self.table.DeleteBuffers(1, &id as *const _);
        }
        self.maybe_check();
    }

    /// Corresponds to `glBindBuffer`.
    pub fn bind_buffer(&self, kind: BufferKind, id: u32) {
        trace!(target: "gl", "glBindBuffer{:?}", (kind, id));
        unsafe {
            self.table.BindBuffer(kind.as_gl_enum(), id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glBufferData`. The driver reads `data` at the caller's
    /// address for the duration of the call.
    pub fn buffer_data<T>(&self, kind: BufferKind, data: &[T], usage: BufferUsage) {
        let size = mem::size_of_val(data);
        trace!(target: "gl", "glBufferData{:?}", (kind, size, usage));
        unsafe {
            self.table.BufferData(
                kind.as_gl_enum(),
                size as ffi::GLsizeiptr,
                data.as_ptr() as *const _,
                usage.as_gl_enum(),
            );
        }
        self.maybe_check();
    }

    /// Corresponds to `glBufferSubData`.
    pub fn buffer_sub_data<T>(&self, kind: BufferKind, offset: usize, data: &[T]) {
        let size = mem::size_of_val(data);
        trace!(target: "gl", "glBufferSubData{:?}", (kind, offset, size));
        unsafe {
            self.table.BufferSubData(
                kind.as_gl_enum(),
                offset as ffi::GLintptr,
                size as ffi::GLsizeiptr,
                data.as_ptr() as *const _,
            );
        }
        self.maybe_check();
    }

    // Vertex array operations

    /// Corresponds to `glGenVertexArrays(1)`.
    pub fn gen_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        trace!(target: "gl", "glGenVertexArrays(1) ");
        unsafe {
            self.table.GenVertexArrays(1, &mut id as *mut _);
        }
        trace!(target: "gl", " => {}", id);
        self.maybe_check();
        id
    }

    /// Corresponds to `glDeleteVertexArrays(1)`.
    pub fn delete_vertex_array(&self, id: u32) {
        trace!(target: "gl", "glDeleteVertexArrays{:?}", (1, id));
        unsafe {
            self.table.DeleteVertexArrays(1, &id as *const _);
        }
        self.maybe_check();
    }

    /// Corresponds to `glBindVertexArray`.
    pub fn bind_vertex_array(&self, id: u32) {
        trace!(target: "gl", "glBindVertexArray{:?}", (id,));
        unsafe {
            self.table.BindVertexArray(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glVertexAttribPointer`.
    pub fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: DataType,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        trace!(
            target: "gl",
            "glVertexAttribPointer{:?}",
            (index, size, ty, normalized, stride, offset),
        );
        unsafe {
            self.table.VertexAttribPointer(
                index,
                size,
                ty.as_gl_enum(),
                if normalized { ffi::TRUE } else { ffi::FALSE },
                stride,
                offset as *const _,
            );
        }
        self.maybe_check();
    }

    /// Corresponds to `glEnableVertexAttribArray`.
    pub fn enable_vertex_attrib_array(&self, index: u32) {
        trace!(target: "gl", "glEnableVertexAttribArray{:?}", (index,));
        unsafe {
            self.table.EnableVertexAttribArray(index);
        }
        self.maybe_check();
    }

    /// Corresponds to `glDisableVertexAttribArray`.
    pub fn disable_vertex_attrib_array(&self, index: u32) {
        trace!(target: "gl", "glDisableVertexAttribArray{:?}", (index,));
        unsafe {
            self.table.DisableVertexAttribArray(index);
        }
        self.maybe_check();
    }

    // Texture operations

    /// Corresponds to `glGenTextures(1)`.
    pub fn gen_texture(&self) -> u32 {
        let mut id: u32 = 0;
        trace!(target: "gl", "glGenTextures(1) ");
        unsafe {
            self.table.GenTextures(1, &mut id as *mut _);
        }
        trace!(target: "gl", " => {}", id);
        self.maybe_check();
        id
    }

    /// Corresponds to `glDeleteTextures(1)`.
    pub fn delete_texture(&self, id: u32) {
        trace!(target: "gl", "glDeleteTextures{:?}", (1, id));
        unsafe {
            self.table.DeleteTextures(1, &id as *const _);
        }
        self.maybe_check();
    }

    /// Corresponds to `glBindTexture`.
    pub fn bind_texture(&self, target: TextureTarget, id: u32) {
        trace!(target: "gl", "glBindTexture{:?}", (target, id));
        unsafe {
            self.table.BindTexture(target.as_gl_enum(), id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glActiveTexture(GL_TEXTURE0 + index)`. `index` is a
    /// zero-based texture unit index, bounded by the context's
    /// `GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS`.
    pub fn active_texture(&self, index: u32) {
        trace!(target: "gl", "glActiveTexture{:?}", (index,));
        unsafe {
            self.table.ActiveTexture(ffi::TEXTURE0 + index);
        }
        self.maybe_check();
    }

    /// Corresponds to `glTexParameteri`. Escape hatch for parameters without
    /// a typed wrapper.
    pub fn tex_parameter_i(&self, target: TextureTarget, pname: ffi::GLenum, value: i32) {
        trace!(target: "gl", "glTexParameteri{:?}", (target, pname, value));
        unsafe {
            self.table.TexParameteri(target.as_gl_enum(), pname, value);
        }
        self.maybe_check();
    }

    /// Corresponds to `glTexParameteri(GL_TEXTURE_MIN_FILTER)`.
    pub fn tex_min_filter(&self, target: TextureTarget, filter: MinFilter) {
        self.tex_parameter_i(target, ffi::TEXTURE_MIN_FILTER, filter.as_gl_enum() as i32);
    }

    /// Corresponds to `glTexParameteri(GL_TEXTURE_MAG_FILTER)`.
    pub fn tex_mag_filter(&self, target: TextureTarget, filter: MagFilter) {
        self.tex_parameter_i(target, ffi::TEXTURE_MAG_FILTER, filter.as_gl_enum() as i32);
    }

    /// Corresponds to `glTexParameteri(GL_TEXTURE_WRAP_S/T)`.
    pub fn tex_wrap(&self, target: TextureTarget, coord: WrapCoord, mode: WrapMode) {
        self.tex_parameter_i(target, coord.as_gl_enum(), mode.as_gl_enum() as i32);
    }

    /// Corresponds to `glTexImage2D` at mipmap level zero. `None` allocates
    /// storage without an initial upload.
    pub fn tex_image_2d(
        &self,
        target: TextureTarget,
        internal_format: ffi::GLenum,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: DataType,
        data: Option<&[u8]>,
    ) {
        trace!(
            target: "gl",
            "glTexImage2D{:?}",
            (target, 0, internal_format, width, height, 0, format, ty),
        );
        unsafe {
            self.table.TexImage2D(
                target.as_gl_enum(),
                0,
                internal_format as ffi::GLint,
                width,
                height,
                0,
                format.as_gl_enum(),
                ty.as_gl_enum(),
                data.map_or(ptr::null(), |slice| slice.as_ptr() as *const _),
            );
        }
        self.maybe_check();
    }

    /// Corresponds to `glGetTexImage` at mipmap level zero. The driver writes
    /// into `pixels` at the caller's address; the slice is not copied.
    pub fn get_tex_image(
        &self,
        target: TextureTarget,
        format: PixelFormat,
        ty: DataType,
        pixels: &mut [u8],
    ) {
        trace!(target: "gl", "glGetTexImage{:?}", (target, 0, format, ty));
        unsafe {
            self.table.GetTexImage(
                target.as_gl_enum(),
                0,
                format.as_gl_enum(),
                ty.as_gl_enum(),
                pixels.as_mut_ptr() as *mut _,
            );
        }
        self.maybe_check();
    }

    /// Corresponds to `glGenerateMipmap`.
    pub fn generate_mipmap(&self, target: TextureTarget) {
        trace!(target: "gl", "glGenerateMipmap{:?}", (target,));
        unsafe {
            self.table.GenerateMipmap(target.as_gl_enum());
        }
        self.maybe_check();
    }

    // Program operations

    /// Corresponds to `glCreateShader`.
    pub fn create_shader(&self, kind: ShaderKind) -> u32 {
        trace!(target: "gl", "glCreateShader{:?} ", (kind,));
        let id = unsafe { self.table.CreateShader(kind.as_gl_enum()) };
        trace!(target: "gl", " => {}", id);
        self.maybe_check();
        id
    }

    /// Corresponds to `glDeleteShader`.
    pub fn delete_shader(&self, id: u32) {
        trace!(target: "gl", "glDeleteShader{:?}", (id,));
        unsafe {
            self.table.DeleteShader(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glShaderSource` with a single string.
    pub fn shader_source(&self, id: u32, source: &std_ffi::CStr) {
        trace!(target: "gl", "glShaderSource{:?}", (id, source));
        let ptr = source.as_ptr();
        unsafe {
            self.table.ShaderSource(id, 1, &ptr as *const _, ptr::null());
        }
        self.maybe_check();
    }

    /// Corresponds to `glCompileShader`.
    pub fn compile_shader(&self, id: u32) {
        trace!(target: "gl", "glCompileShader{:?}", (id,));
        unsafe {
            self.table.CompileShader(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glGetShaderiv(GL_COMPILE_STATUS)`.
    pub fn compile_status(&self, id: u32) -> bool {
        let mut status: ffi::GLint = 0;
        trace!(target: "gl", "glGetShaderiv{:?} ", (id, ffi::COMPILE_STATUS));
        unsafe {
            self.table.GetShaderiv(id, ffi::COMPILE_STATUS, &mut status as *mut _);
        }
        trace!(target: "gl", " => {}", status);
        self.maybe_check();
        status != 0
    }

    /// Corresponds to `glGetShaderInfoLog`.
    pub fn shader_info_log(&self, id: u32) -> String {
        let mut len: ffi::GLint = 0;
        unsafe {
            self.table.GetShaderiv(id, ffi::INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.maybe_check();
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: ffi::GLsizei = 0;
        trace!(target: "gl", "glGetShaderInfoLog{:?}", (id, len));
        unsafe {
            self.table.GetShaderInfoLog(
                id,
                len,
                &mut written as *mut _,
                buf.as_mut_ptr() as *mut _,
            );
        }
        self.maybe_check();
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Corresponds to `glCreateProgram`.
    pub fn create_program(&self) -> u32 {
        trace!(target: "gl", "glCreateProgram() ");
        let id = unsafe { self.table.CreateProgram() };
        trace!(target: "gl", " => {}", id);
        self.maybe_check();
        id
    }

    /// Corresponds to `glDeleteProgram`.
    pub fn delete_program(&self, id: u32) {
        trace!(target: "gl", "glDeleteProgram{:?}", (id,));
        unsafe {
            self.table.DeleteProgram(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glAttachShader`.
    pub fn attach_shader(&self, program: u32, shader: u32) {
        trace!(target: "gl", "glAttachShader{:?}", (program, shader));
        unsafe {
            self.table.AttachShader(program, shader);
        }
        self.maybe_check();
    }

    /// Corresponds to `glLinkProgram`.
    pub fn link_program(&self, id: u32) {
        trace!(target: "gl", "glLinkProgram{:?}", (id,));
        unsafe {
            self.table.LinkProgram(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glGetProgramiv(GL_LINK_STATUS)`.
    pub fn link_status(&self, id: u32) -> bool {
        let mut status: ffi::GLint = 0;
        trace!(target: "gl", "glGetProgramiv{:?} ", (id, ffi::LINK_STATUS));
        unsafe {
            self.table.GetProgramiv(id, ffi::LINK_STATUS, &mut status as *mut _);
        }
        trace!(target: "gl", " => {}", status);
        self.maybe_check();
        status != 0
    }

    /// Corresponds to `glGetProgramInfoLog`.
    pub fn program_info_log(&self, id: u32) -> String {
        let mut len: ffi::GLint = 0;
        unsafe {
            self.table.GetProgramiv(id, ffi::INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.maybe_check();
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u8; len as usize];
        let mut written: ffi::GLsizei = 0;
        trace!(target: "gl", "glGetProgramInfoLog{:?}", (id, len));
        unsafe {
            self.table.GetProgramInfoLog(
                id,
                len,
                &mut written as *mut _,
                buf.as_mut_ptr() as *mut _,
            );
        }
        self.maybe_check();
        buf.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Corresponds to `glUseProgram`.
    pub fn use_program(&self, id: u32) {
        trace!(target: "gl", "glUseProgram{:?}", (id,));
        unsafe {
            self.table.UseProgram(id);
        }
        self.maybe_check();
    }

    /// Corresponds to `glGetUniformLocation`.
    pub fn get_uniform_location(&self, id: u32, name: &std_ffi::CStr) -> i32 {
        trace!(target: "gl", "glGetUniformLocation{:?} ", (id, name));
        let location = unsafe { self.table.GetUniformLocation(id, name.as_ptr()) };
        trace!(target: "gl", " => {}", location);
        self.maybe_check();
        location
    }

    /// Corresponds to `glUniform1i`.
    pub fn uniform_1i(&self, location: i32, value: i32) {
        trace!(target: "gl", "glUniform1i{:?}", (location, value));
        unsafe {
            self.table.Uniform1i(location, value);
        }
        self.maybe_check();
    }

    // Draw call operations

    /// Corresponds to `glDrawArrays`.
    pub fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        trace!(target: "gl", "glDrawArrays{:?}", (primitive, first, count));
        unsafe {
            self.table.DrawArrays(primitive.as_gl_enum(), first, count);
        }
        self.maybe_check();
    }

    /// Corresponds to `glDrawElements` with a byte offset into the bound
    /// element array buffer.
    pub fn draw_elements(&self, primitive: Primitive, count: i32, ty: DataType, offset: usize) {
        trace!(target: "gl", "glDrawElements{:?}", (primitive, count, ty, offset));
        unsafe {
            self.table.DrawElements(
                primitive.as_gl_enum(),
                count,
                ty.as_gl_enum(),
                offset as *const _,
            );
        }
        self.maybe_check();
    }
}
