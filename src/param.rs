//! Strongly typed call parameters.
//!
//! Each enum maps one-to-one onto a set of native enumerants and converts
//! with `as_gl_enum`. The integer values are the driver's contract; the Rust
//! names are only for the call site.

use crate::ffi;

/// Server-side capability toggled by `glEnable`/`glDisable`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
    Blend,
    CullFace,
    DepthTest,
    Dither,
    LineSmooth,
    Multisample,
    PolygonOffsetFill,
    ScissorTest,
    StencilTest,
}

impl Capability {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            Capability::Blend => ffi::BLEND,
            Capability::CullFace => ffi::CULL_FACE,
            Capability::DepthTest => ffi::DEPTH_TEST,
            Capability::Dither => ffi::DITHER,
            Capability::LineSmooth => ffi::LINE_SMOOTH,
            Capability::Multisample => ffi::MULTISAMPLE,
            Capability::PolygonOffsetFill => ffi::POLYGON_OFFSET_FILL,
            Capability::ScissorTest => ffi::SCISSOR_TEST,
            Capability::StencilTest => ffi::STENCIL_TEST,
        }
    }
}

/// Source or destination factor for `glBlendFunc`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    DstColor,
    OneMinusDstColor,
    SrcAlphaSaturate,
    ConstantColor,
    OneMinusConstantColor,
    ConstantAlpha,
    OneMinusConstantAlpha,
}

impl BlendFactor {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            BlendFactor::Zero => ffi::ZERO,
            BlendFactor::One => ffi::ONE,
            BlendFactor::SrcColor => ffi::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => ffi::ONE_MINUS_SRC_COLOR,
            BlendFactor::SrcAlpha => ffi::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => ffi::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => ffi::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => ffi::ONE_MINUS_DST_ALPHA,
            BlendFactor::DstColor => ffi::DST_COLOR,
            BlendFactor::OneMinusDstColor => ffi::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlphaSaturate => ffi::SRC_ALPHA_SATURATE,
            BlendFactor::ConstantColor => ffi::CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => ffi::ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => ffi::CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => ffi::ONE_MINUS_CONSTANT_ALPHA,
        }
    }
}

/// Comparison used by the depth test.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DepthFunction {
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

impl DepthFunction {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            DepthFunction::Never => ffi::NEVER,
            DepthFunction::Less => ffi::LESS,
            DepthFunction::Equal => ffi::EQUAL,
            DepthFunction::LessOrEqual => ffi::LEQUAL,
            DepthFunction::Greater => ffi::GREATER,
            DepthFunction::NotEqual => ffi::NOTEQUAL,
            DepthFunction::GreaterOrEqual => ffi::GEQUAL,
            DepthFunction::Always => ffi::ALWAYS,
        }
    }
}

/// Polygon face selector.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

impl Face {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            Face::Front => ffi::FRONT,
            Face::Back => ffi::BACK,
            Face::FrontAndBack => ffi::FRONT_AND_BACK,
        }
    }
}

/// Winding order that defines a front-facing polygon.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            Winding::Clockwise => ffi::CW,
            Winding::CounterClockwise => ffi::CCW,
        }
    }
}

/// Polygon rasterization mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PolygonMode {
    Point,
    Line,
    Fill,
}

impl PolygonMode {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            PolygonMode::Point => ffi::POINT,
            PolygonMode::Line => ffi::LINE,
            PolygonMode::Fill => ffi::FILL,
        }
    }
}

/// Primitive topology for draw calls.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Primitive {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            Primitive::Points => ffi::POINTS,
            Primitive::Lines => ffi::LINES,
            Primitive::LineLoop => ffi::LINE_LOOP,
            Primitive::LineStrip => ffi::LINE_STRIP,
            Primitive::Triangles => ffi::TRIANGLES,
            Primitive::TriangleStrip => ffi::TRIANGLE_STRIP,
            Primitive::TriangleFan => ffi::TRIANGLE_FAN,
        }
    }
}

/// Buffer object binding target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferKind {
    Array,
    ElementArray,
}

impl BufferKind {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            BufferKind::Array => ffi::ARRAY_BUFFER,
            BufferKind::ElementArray => ffi::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Buffer data usage hint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BufferUsage {
    StreamDraw,
    StaticDraw,
    DynamicDraw,
}

impl BufferUsage {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            BufferUsage::StreamDraw => ffi::STREAM_DRAW,
            BufferUsage::StaticDraw => ffi::STATIC_DRAW,
            BufferUsage::DynamicDraw => ffi::DYNAMIC_DRAW,
        }
    }
}

/// Texture binding target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextureTarget {
    D2,
    CubeMap,
}

impl TextureTarget {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            TextureTarget::D2 => ffi::TEXTURE_2D,
            TextureTarget::CubeMap => ffi::TEXTURE_CUBE_MAP,
        }
    }
}

/// Minification filter for `GL_TEXTURE_MIN_FILTER`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MinFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            MinFilter::Nearest => ffi::NEAREST,
            MinFilter::Linear => ffi::LINEAR,
            MinFilter::NearestMipmapNearest => ffi::NEAREST_MIPMAP_NEAREST,
            MinFilter::LinearMipmapNearest => ffi::LINEAR_MIPMAP_NEAREST,
            MinFilter::NearestMipmapLinear => ffi::NEAREST_MIPMAP_LINEAR,
            MinFilter::LinearMipmapLinear => ffi::LINEAR_MIPMAP_LINEAR,
        }
    }
}

/// Magnification filter for `GL_TEXTURE_MAG_FILTER`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

impl MagFilter {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            MagFilter::Nearest => ffi::NEAREST,
            MagFilter::Linear => ffi::LINEAR,
        }
    }
}

/// Texture coordinate selected by a wrap parameter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WrapCoord {
    S,
    T,
}

impl WrapCoord {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            WrapCoord::S => ffi::TEXTURE_WRAP_S,
            WrapCoord::T => ffi::TEXTURE_WRAP_T,
        }
    }
}

/// Wrap behaviour for texture coordinates outside `[0, 1]`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

impl WrapMode {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            WrapMode::Repeat => ffi::REPEAT,
            WrapMode::ClampToEdge => ffi::CLAMP_TO_EDGE,
            WrapMode::MirroredRepeat => ffi::MIRRORED_REPEAT,
        }
    }
}

/// Scalar type of vertex attribute or pixel data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DataType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
}

impl DataType {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            DataType::I8 => ffi::BYTE,
            DataType::U8 => ffi::UNSIGNED_BYTE,
            DataType::I16 => ffi::SHORT,
            DataType::U16 => ffi::UNSIGNED_SHORT,
            DataType::I32 => ffi::INT,
            DataType::U32 => ffi::UNSIGNED_INT,
            DataType::F32 => ffi::FLOAT,
        }
    }
}

/// Client-side pixel transfer format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PixelFormat {
    DepthComponent,
    Red,
    Alpha,
    Rgb,
    Rgba,
    Bgr,
    Bgra,
}

impl PixelFormat {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            PixelFormat::DepthComponent => ffi::DEPTH_COMPONENT,
            PixelFormat::Red => ffi::RED,
            PixelFormat::Alpha => ffi::ALPHA,
            PixelFormat::Rgb => ffi::RGB,
            PixelFormat::Rgba => ffi::RGBA,
            PixelFormat::Bgr => ffi::BGR,
            PixelFormat::Bgra => ffi::BGRA,
        }
    }
}

/// Shader object kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            ShaderKind::Vertex => ffi::VERTEX_SHADER,
            ShaderKind::Fragment => ffi::FRAGMENT_SHADER,
        }
    }
}

/// Connection state string queried from the driver.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StringName {
    Vendor,
    Renderer,
    Version,
    Extensions,
    ShadingLanguageVersion,
}

impl StringName {
    pub(crate) fn as_gl_enum(self) -> ffi::GLenum {
        match self {
            StringName::Vendor => ffi::VENDOR,
            StringName::Renderer => ffi::RENDERER,
            StringName::Version => ffi::VERSION,
            StringName::Extensions => ffi::EXTENSIONS,
            StringName::ShadingLanguageVersion => ffi::SHADING_LANGUAGE_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Values from the Khronos registry; the native ABI depends on them.
    #[test]
    fn enumerants_match_registry_values() {
        let cases: &[(u32, u32)] = &[
            (Capability::Blend.as_gl_enum(), 0x0BE2),
            (Capability::CullFace.as_gl_enum(), 0x0B44),
            (Capability::DepthTest.as_gl_enum(), 0x0B71),
            (Capability::ScissorTest.as_gl_enum(), 0x0C11),
            (BlendFactor::Zero.as_gl_enum(), 0),
            (BlendFactor::One.as_gl_enum(), 1),
            (BlendFactor::SrcAlpha.as_gl_enum(), 0x0302),
            (BlendFactor::OneMinusSrcAlpha.as_gl_enum(), 0x0303),
            (BlendFactor::ConstantAlpha.as_gl_enum(), 0x8003),
            (DepthFunction::Less.as_gl_enum(), 0x0201),
            (DepthFunction::LessOrEqual.as_gl_enum(), 0x0203),
            (DepthFunction::Always.as_gl_enum(), 0x0207),
            (Face::Back.as_gl_enum(), 0x0405),
            (Winding::CounterClockwise.as_gl_enum(), 0x0901),
            (PolygonMode::Fill.as_gl_enum(), 0x1B02),
            (Primitive::Triangles.as_gl_enum(), 0x0004),
            (Primitive::TriangleStrip.as_gl_enum(), 0x0005),
            (BufferKind::Array.as_gl_enum(), 0x8892),
            (BufferKind::ElementArray.as_gl_enum(), 0x8893),
            (BufferUsage::StaticDraw.as_gl_enum(), 0x88E4),
            (TextureTarget::D2.as_gl_enum(), 0x0DE1),
            (MinFilter::Nearest.as_gl_enum(), 0x2600),
            (MinFilter::LinearMipmapNearest.as_gl_enum(), 0x2701),
            (MinFilter::LinearMipmapLinear.as_gl_enum(), 0x2703),
            (MagFilter::Linear.as_gl_enum(), 0x2601),
            (WrapCoord::S.as_gl_enum(), 0x2802),
            (WrapCoord::T.as_gl_enum(), 0x2803),
            (WrapMode::Repeat.as_gl_enum(), 0x2901),
            (WrapMode::ClampToEdge.as_gl_enum(), 0x812F),
            (WrapMode::MirroredRepeat.as_gl_enum(), 0x8370),
            (DataType::U8.as_gl_enum(), 0x1401),
            (DataType::F32.as_gl_enum(), 0x1406),
            (PixelFormat::Rgba.as_gl_enum(), 0x1908),
            (PixelFormat::Bgra.as_gl_enum(), 0x80E1),
            (ShaderKind::Vertex.as_gl_enum(), 0x8B31),
            (ShaderKind::Fragment.as_gl_enum(), 0x8B30),
            (StringName::Version.as_gl_enum(), 0x1F02),
        ];
        for &(actual, expected) in cases {
            assert_eq!(actual, expected, "0x{:04X} != 0x{:04X}", actual, expected);
        }
    }
}
