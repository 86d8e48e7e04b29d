//! End-to-end tests against a fake native driver that records every call it
//! receives, including the pointer values passed at the ABI boundary.

use glcall::{
    Backend, BlendFactor, BufferKind, BufferUsage, Capability, DataType, Error, MagFilter,
    MinFilter, PixelFormat, Primitive, TextureTarget, WrapCoord, WrapMode,
};

mod fake {
    use std::cell::{Cell, RefCell};

    /// Which fake driver instance served a call. Two instances stand in for
    /// two native contexts with different entry point addresses.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Driver {
        A,
        B,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Enable(u32),
        ActiveTexture(u32),
        BlendFunc(u32, u32),
        Clear(u32),
        DrawArrays(u32, i32, i32),
        BufferData { target: u32, size: isize, data: usize, usage: u32 },
        TexParameteri(u32, u32, i32),
        GetTexImage { target: u32, format: u32, ty: u32, pixels: usize },
        ReadPixels { pixels: usize },
        GetError,
    }

    thread_local! {
        static CALLS: RefCell<Vec<(Driver, Call)>> = RefCell::new(Vec::new());
        static ERROR: Cell<u32> = Cell::new(0);
    }

    /// Drains the calls recorded on this thread, in order.
    pub fn take_calls() -> Vec<(Driver, Call)> {
        CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
    }

    /// Arms the driver's sticky error flag.
    pub fn set_error(code: u32) {
        ERROR.with(|error| error.set(code));
    }

    fn record(driver: Driver, call: Call) {
        CALLS.with(|calls| calls.borrow_mut().push((driver, call)));
    }

    fn take_error(driver: Driver) -> u32 {
        record(driver, Call::GetError);
        ERROR.with(|error| error.replace(0))
    }

    macro_rules! driver {
        ($module:ident, $tag:expr) => {
            pub mod $module {
                use std::os::raw;
                use std::ptr;

                use super::{Call, Driver};

                const TAG: Driver = $tag;

                pub extern "system" fn get_error() -> u32 {
                    super::take_error(TAG)
                }

                pub extern "system" fn enable(cap: u32) {
                    super::record(TAG, Call::Enable(cap));
                }

                pub extern "system" fn active_texture(unit: u32) {
                    super::record(TAG, Call::ActiveTexture(unit));
                }

                pub extern "system" fn blend_func(sfactor: u32, dfactor: u32) {
                    super::record(TAG, Call::BlendFunc(sfactor, dfactor));
                }

                pub extern "system" fn clear(mask: u32) {
                    super::record(TAG, Call::Clear(mask));
                }

                pub extern "system" fn draw_arrays(mode: u32, first: i32, count: i32) {
                    super::record(TAG, Call::DrawArrays(mode, first, count));
                }

                pub extern "system" fn buffer_data(
                    target: u32,
                    size: isize,
                    data: *const raw::c_void,
                    usage: u32,
                ) {
                    super::record(
                        TAG,
                        Call::BufferData {
                            target,
                            size,
                            data: data as usize,
                            usage,
                        },
                    );
                }

                pub extern "system" fn tex_parameter_i(target: u32, pname: u32, param: i32) {
                    super::record(TAG, Call::TexParameteri(target, pname, param));
                }

                pub extern "system" fn get_tex_image(
                    target: u32,
                    _level: i32,
                    format: u32,
                    ty: u32,
                    pixels: *mut raw::c_void,
                ) {
                    super::record(
                        TAG,
                        Call::GetTexImage {
                            target,
                            format,
                            ty,
                            pixels: pixels as usize,
                        },
                    );
                }

                pub extern "system" fn read_pixels(
                    _x: i32,
                    _y: i32,
                    _width: i32,
                    _height: i32,
                    _format: u32,
                    _ty: u32,
                    pixels: *mut raw::c_void,
                ) {
                    super::record(TAG, Call::ReadPixels { pixels: pixels as usize });
                }

                /// `get_proc_address` query for this driver instance.
                pub fn loader(symbol: &str) -> *const raw::c_void {
                    match symbol {
                        "glGetError" => get_error as *const raw::c_void,
                        "glEnable" => enable as *const raw::c_void,
                        "glActiveTexture" => active_texture as *const raw::c_void,
                        "glBlendFunc" => blend_func as *const raw::c_void,
                        "glClear" => clear as *const raw::c_void,
                        "glDrawArrays" => draw_arrays as *const raw::c_void,
                        "glBufferData" => buffer_data as *const raw::c_void,
                        "glTexParameteri" => tex_parameter_i as *const raw::c_void,
                        "glGetTexImage" => get_tex_image as *const raw::c_void,
                        "glReadPixels" => read_pixels as *const raw::c_void,
                        _ => ptr::null(),
                    }
                }
            }
        };
    }

    driver!(driver_a, Driver::A);
    driver!(driver_b, Driver::B);
}

use fake::{driver_a, driver_b, Call, Driver};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load_quiet<F>(loader: F) -> Backend
where
    F: FnMut(&str) -> *const std::os::raw::c_void,
{
    let mut gl = Backend::load(loader);
    gl.set_debug_check(false);
    gl
}

#[test]
fn blend_func_forwards_its_enumerants_and_nothing_else() {
    init_logging();
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    gl.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);

    assert_eq!(
        fake::take_calls(),
        vec![(Driver::A, Call::BlendFunc(0x0302, 0x0303))],
    );
}

#[test]
fn enable_converts_the_capability_enum() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    gl.enable(Capability::DepthTest);
    gl.enable(Capability::Blend);

    assert_eq!(
        fake::take_calls(),
        vec![
            (Driver::A, Call::Enable(0x0B71)),
            (Driver::A, Call::Enable(0x0BE2)),
        ],
    );
}

#[test]
fn draw_arrays_forwards_arguments_in_order() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    gl.draw_arrays(Primitive::Triangles, 3, 42);

    assert_eq!(
        fake::take_calls(),
        vec![(Driver::A, Call::DrawArrays(0x0004, 3, 42))],
    );
}

#[test]
fn input_buffer_is_passed_at_the_callers_address() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    let vertices: Vec<f32> = vec![0.0, 0.5, -0.5, -0.5, 0.5, -0.5];
    gl.buffer_data(BufferKind::Array, &vertices, BufferUsage::StaticDraw);

    assert_eq!(
        fake::take_calls(),
        vec![(
            Driver::A,
            Call::BufferData {
                target: 0x8892,
                size: (vertices.len() * 4) as isize,
                data: vertices.as_ptr() as usize,
                usage: 0x88E4,
            },
        )],
    );
}

#[test]
fn output_buffer_is_received_at_the_callers_address() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    let mut pixels = vec![0u8; 16];
    let expected = pixels.as_mut_ptr() as usize;
    gl.get_tex_image(TextureTarget::D2, PixelFormat::Rgba, DataType::U8, &mut pixels);
    gl.read_pixels(0, 0, 2, 2, PixelFormat::Rgba, DataType::U8, &mut pixels);

    assert_eq!(
        fake::take_calls(),
        vec![
            (
                Driver::A,
                Call::GetTexImage {
                    target: 0x0DE1,
                    format: 0x1908,
                    ty: 0x1401,
                    pixels: expected,
                },
            ),
            (Driver::A, Call::ReadPixels { pixels: expected }),
        ],
    );
}

#[test]
fn texture_filters_and_wraps_convert_their_enums() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    gl.tex_min_filter(TextureTarget::D2, MinFilter::LinearMipmapLinear);
    gl.tex_mag_filter(TextureTarget::D2, MagFilter::Linear);
    gl.tex_wrap(TextureTarget::D2, WrapCoord::S, WrapMode::ClampToEdge);
    gl.tex_wrap(TextureTarget::D2, WrapCoord::T, WrapMode::Repeat);

    assert_eq!(
        fake::take_calls(),
        vec![
            (Driver::A, Call::TexParameteri(0x0DE1, 0x2801, 0x2703)),
            (Driver::A, Call::TexParameteri(0x0DE1, 0x2800, 0x2601)),
            (Driver::A, Call::TexParameteri(0x0DE1, 0x2802, 0x812F)),
            (Driver::A, Call::TexParameteri(0x0DE1, 0x2803, 0x2901)),
        ],
    );
}

#[test]
fn resolution_is_idempotent_within_one_activation() {
    let gl = load_quiet(driver_a::loader);

    let first = gl.entry_point("glBlendFunc");
    let second = gl.entry_point("glBlendFunc");
    assert!(first.is_some());
    assert_eq!(first, second);
    assert!(gl.is_loaded("glBlendFunc"));
    assert!(!gl.is_loaded("glBindBuffer"));
}

#[test]
fn reload_refreshes_stale_entry_points() {
    init_logging();
    let mut gl = load_quiet(driver_a::loader);
    fake::take_calls();

    gl.enable(Capability::CullFace);
    gl.reload(driver_b::loader);
    gl.set_debug_check(false);
    gl.enable(Capability::CullFace);

    assert_eq!(
        fake::take_calls(),
        vec![
            (Driver::A, Call::Enable(0x0B44)),
            (Driver::B, Call::Enable(0x0B44)),
        ],
    );
    assert_ne!(
        driver_a::enable as *const std::os::raw::c_void,
        gl.entry_point("glEnable").unwrap(),
    );
}

#[test]
fn fallback_symbols_satisfy_the_canonical_name() {
    let gl = load_quiet(|symbol: &str| match symbol {
        "glActiveTextureARB" => driver_a::active_texture as *const std::os::raw::c_void,
        "glGetError" => driver_a::get_error as *const std::os::raw::c_void,
        _ => std::ptr::null(),
    });
    fake::take_calls();

    assert!(gl.is_loaded("glActiveTexture"));
    gl.active_texture(2);

    // GL_TEXTURE0 + 2
    assert_eq!(
        fake::take_calls(),
        vec![(Driver::A, Call::ActiveTexture(0x84C2))],
    );
}

#[test]
#[should_panic(expected = "is not loaded")]
fn invoking_an_unresolved_entry_point_fails_fast() {
    let gl = load_quiet(|_: &str| std::ptr::null());
    gl.clear(0x4000);
}

#[test]
fn driver_error_is_visible_once_then_cleared() {
    let gl = load_quiet(driver_a::loader);
    fake::take_calls();

    fake::set_error(0x0502);
    assert_eq!(gl.poll_error(), Some(Error::InvalidOperation));
    assert_eq!(gl.poll_error(), None);
}

#[test]
fn debug_check_polls_after_each_call() {
    let mut gl = load_quiet(driver_a::loader);
    gl.set_debug_check(true);
    fake::take_calls();

    fake::set_error(0x0500);
    gl.clear(0x4000);

    // The wrapper consumed the flag; nothing is left for the caller.
    assert_eq!(
        fake::take_calls(),
        vec![(Driver::A, Call::Clear(0x4000)), (Driver::A, Call::GetError)],
    );
    gl.set_debug_check(false);
    assert_eq!(gl.poll_error(), None);
}
