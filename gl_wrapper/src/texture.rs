use std::ffi::c_void;

use gl::types::GLenum;
use thiserror::Error;

pub struct Texture2D {
    id: u32,
}

impl Texture2D {
    pub fn new<T: Texel>(
        width: u32,
        height: u32,
        data: &[T],
        format: TextureFormats,
        filter: TextureFilter,
        wrap: TextureWrap,
    ) -> Result<Self, TextureError> {
        validate::<T>(width, height, data.len(), format)?;

        let mut id = 0;

        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap.gl_enum() as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap.gl_enum() as i32);
            let (min, mag) = filter.gl_enums();
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min as i32);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag as i32);
        }

        let texture = Self { id };
        texture.upload(width, height, data, format);

        Ok(texture)
    }

    pub fn update<T: Texel>(
        &self,
        width: u32,
        height: u32,
        data: &[T],
        format: TextureFormats,
    ) -> Result<(), TextureError> {
        validate::<T>(width, height, data.len(), format)?;

        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
        self.upload(width, height, data, format);

        Ok(())
    }

    fn upload<T: Texel>(&self, width: u32, height: u32, data: &[T], format: TextureFormats) {
        unsafe {
            // RGB rows are not 4-byte aligned for odd widths
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);

            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                format.internal_format() as i32,
                width as i32,
                height as i32,
                0,
                format.pixel_format(),
                T::GL_TYPE,
                data.as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }
    }

    pub fn bind(&self, unit: u8) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
            gl::BindTexture(gl::TEXTURE_2D, self.id)
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

fn validate<T: Texel>(
    width: u32,
    height: u32,
    len: usize,
    format: TextureFormats,
) -> Result<(), TextureError> {
    if T::GL_TYPE != format.component_type() {
        return Err(TextureError::FormatMismatch);
    }

    if (width as usize * height as usize * format.channels() as usize) != len {
        return Err(TextureError::InvalidSrcLength);
    }

    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("Invalid source data length")]
    InvalidSrcLength,
    #[error("Source data type does not match the texture format")]
    FormatMismatch,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for f32 {}
}

/// Component types that can be uploaded as texture data.
pub trait Texel: sealed::Sealed + Copy {
    const GL_TYPE: GLenum;
}

impl Texel for u8 {
    const GL_TYPE: GLenum = gl::UNSIGNED_BYTE;
}

impl Texel for f32 {
    const GL_TYPE: GLenum = gl::FLOAT;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFormats {
    Rgb8,
    Rgba8,
    RgbaF32,
}

impl TextureFormats {
    pub fn channels(&self) -> u8 {
        match self {
            TextureFormats::Rgb8 => 3,
            TextureFormats::Rgba8 | TextureFormats::RgbaF32 => 4,
        }
    }

    fn internal_format(&self) -> GLenum {
        match self {
            TextureFormats::Rgb8 => gl::RGB8,
            TextureFormats::Rgba8 => gl::RGBA8,
            TextureFormats::RgbaF32 => gl::RGBA32F,
        }
    }

    fn pixel_format(&self) -> GLenum {
        match self {
            TextureFormats::Rgb8 => gl::RGB,
            TextureFormats::Rgba8 | TextureFormats::RgbaF32 => gl::RGBA,
        }
    }

    fn component_type(&self) -> GLenum {
        match self {
            TextureFormats::Rgb8 | TextureFormats::Rgba8 => gl::UNSIGNED_BYTE,
            TextureFormats::RgbaF32 => gl::FLOAT,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
    /// Trilinear minification, linear magnification.
    LinearMipmap,
}

impl TextureFilter {
    fn gl_enums(&self) -> (GLenum, GLenum) {
        match self {
            TextureFilter::Nearest => (gl::NEAREST, gl::NEAREST),
            TextureFilter::Linear => (gl::LINEAR, gl::LINEAR),
            TextureFilter::LinearMipmap => (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    ClampToEdge,
}

impl TextureWrap {
    fn gl_enum(&self) -> GLenum {
        match self {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_length() {
        assert_eq!(validate::<u8>(2, 2, 12, TextureFormats::Rgb8), Ok(()));
        assert_eq!(validate::<u8>(2, 2, 16, TextureFormats::Rgba8), Ok(()));
        assert_eq!(
            validate::<u8>(2, 2, 12, TextureFormats::Rgba8),
            Err(TextureError::InvalidSrcLength)
        );
        assert_eq!(validate::<f32>(3, 1, 12, TextureFormats::RgbaF32), Ok(()));
    }

    #[test]
    fn texel_type_must_match() {
        assert_eq!(
            validate::<f32>(1, 1, 3, TextureFormats::Rgb8),
            Err(TextureError::FormatMismatch)
        );
        assert_eq!(
            validate::<u8>(1, 1, 4, TextureFormats::RgbaF32),
            Err(TextureError::FormatMismatch)
        );
    }

    #[test]
    fn mipmap_filter_only_minifies_with_mipmaps() {
        assert_eq!(
            TextureFilter::LinearMipmap.gl_enums(),
            (gl::LINEAR_MIPMAP_LINEAR, gl::LINEAR)
        );
    }
}
