use std::path::Path;

use ::image::DynamicImage;
use gl_wrapper::texture::TextureFormats;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    pub fn texture_format(&self) -> TextureFormats {
        match self {
            PixelFormat::Rgb => TextureFormats::Rgb8,
            PixelFormat::Rgba => TextureFormats::Rgba8,
        }
    }
}

/// Decoded 8-bit image, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Reads a PNG or JPEG file. The format is picked from the file contents,
    /// not the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let bytes = std::fs::read(path)?;

        Self::decode(&bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = ::image::load_from_memory(bytes)?;

        Ok(Self::from_dynamic(decoded))
    }

    /// Narrows any decoded layout to 8-bit RGB, or RGBA when there is alpha.
    fn from_dynamic(decoded: DynamicImage) -> Self {
        let (width, height) = (decoded.width(), decoded.height());

        let (format, pixels) = if decoded.color().has_alpha() {
            (PixelFormat::Rgba, decoded.into_rgba8().into_raw())
        } else {
            (PixelFormat::Rgb, decoded.into_rgb8().into_raw())
        };

        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Square checkerboard with `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32, a: [u8; 3], b: [u8; 3]) -> Self {
        let cell = (size / cells.max(1)).max(1);
        let mut pixels = Vec::with_capacity((size * size * 3) as usize);

        for y in 0..size {
            for x in 0..size {
                let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                pixels.extend_from_slice(&color);
            }
        }

        Self {
            width: size,
            height: size,
            format: PixelFormat::Rgb,
            pixels,
        }
    }

    /// Reverses row order, GL expects the first row at the bottom.
    pub fn flip_vertically(&mut self) {
        let row = self.width as usize * self.format.channels();
        if row == 0 {
            return;
        }

        let rows = self.pixels.len() / row;
        for y in 0..rows / 2 {
            let (top, bottom) = self.pixels.split_at_mut((rows - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(#[from] ::image::ImageError),
}

#[cfg(test)]
mod tests {
    use ::image::codecs::jpeg::JpegEncoder;
    use ::image::codecs::png::PngEncoder;
    use ::image::{ColorType, ImageEncoder};

    use super::*;

    fn encode_png(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(data, width, height, color)
            .unwrap();
        out
    }

    #[test]
    fn decodes_rgba() {
        let data = [255, 0, 0, 255, 0, 255, 0, 128];
        let png = encode_png(2, 1, ColorType::Rgba8, &data);

        let img = ImageData::decode(&png).unwrap();

        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.format, PixelFormat::Rgba);
        assert_eq!(img.pixels, data);
    }

    #[test]
    fn widens_grayscale() {
        let png = encode_png(2, 1, ColorType::L8, &[10, 200]);

        let img = ImageData::decode(&png).unwrap();

        assert_eq!(img.format, PixelFormat::Rgb);
        assert_eq!(img.pixels, vec![10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn decodes_jpeg() {
        let (width, height) = (16, 8);
        let data: Vec<u8> = [200_u8, 120, 40].repeat((width * height) as usize);

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, 95)
            .write_image(&data, width, height, ColorType::Rgb8)
            .unwrap();

        let img = ImageData::decode(&jpeg).unwrap();

        assert_eq!((img.width, img.height), (width, height));
        assert_eq!(img.format, PixelFormat::Rgb);
        assert_eq!(img.pixels.len(), data.len());
        // lossy, a flat colour only drifts by a few steps
        for (got, want) in img.pixels.iter().zip(&data) {
            assert!(got.abs_diff(*want) <= 8, "{got} vs {want}");
        }
    }

    #[test]
    fn jpeg_file_on_disk() {
        let path = std::env::temp_dir().join(format!("learngl-{}-crate.jpg", std::process::id()));
        let mut jpeg = Vec::new();
        JpegEncoder::new(&mut jpeg)
            .write_image(&[90; 4 * 4 * 3], 4, 4, ColorType::Rgb8)
            .unwrap();
        std::fs::write(&path, jpeg).unwrap();

        let img = ImageData::load(&path);
        std::fs::remove_file(&path).unwrap();

        let img = img.unwrap();
        assert_eq!((img.width, img.height, img.format), (4, 4, PixelFormat::Rgb));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let res = ImageData::decode(b"not an image");

        assert!(matches!(res, Err(ImageError::Decode(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let res = ImageData::load("no/such/texture.png");

        assert!(matches!(res, Err(ImageError::Io(_))));
    }

    #[test]
    fn bundled_textures_decode() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

        let container = ImageData::load(dir.join("container.png")).unwrap();
        assert_eq!(container.format, PixelFormat::Rgb);

        let face = ImageData::load(dir.join("awesomeface.png")).unwrap();
        assert_eq!(face.format, PixelFormat::Rgba);
    }

    #[test]
    fn flip_reverses_rows() {
        let mut img = ImageData {
            width: 1,
            height: 3,
            format: PixelFormat::Rgb,
            pixels: vec![1, 1, 1, 2, 2, 2, 3, 3, 3],
        };

        img.flip_vertically();

        assert_eq!(img.pixels, vec![3, 3, 3, 2, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn checkerboard_alternates() {
        let img = ImageData::checkerboard(4, 2, [0, 0, 0], [255, 255, 255]);

        assert_eq!(img.pixels.len(), 4 * 4 * 3);
        let px = |x: usize, y: usize| img.pixels[(y * 4 + x) * 3];

        assert_eq!(px(0, 0), 0);
        assert_eq!(px(1, 1), 0);
        assert_eq!(px(2, 0), 255);
        assert_eq!(px(0, 2), 255);
        assert_eq!(px(3, 3), 0);
    }
}
