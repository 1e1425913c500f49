pub mod app;
pub mod args;
pub mod camera;
pub mod config;
pub mod frame;
pub mod image;
pub mod input;
pub mod logging;
pub mod scene;
pub mod shaders;
pub mod shapes;
pub mod transform;

use std::path::Path;

use gl_wrapper::texture::{Texture2D, TextureError, TextureFilter, TextureWrap};
use log::{info, warn};

use crate::image::ImageData;

/// Loads a PNG or JPEG as a repeating, mipmapped texture. A missing or unreadable
/// file falls back to a checkerboard so the program still draws something.
pub fn load_texture<P: AsRef<Path>>(path: P, flip: bool) -> Result<Texture2D, TextureError> {
    let path = path.as_ref();

    let mut image = match ImageData::load(path) {
        Ok(image) => {
            info!("Loaded {}x{} texture {path:?}", image.width, image.height);
            image
        }
        Err(e) => {
            warn!("Failed to load texture {path:?}: {e}, using a checkerboard");
            ImageData::checkerboard(256, 8, [200, 140, 60], [90, 60, 30])
        }
    };

    if flip {
        image.flip_vertically();
    }

    Texture2D::new(
        image.width,
        image.height,
        &image.pixels,
        image.format.texture_format(),
        TextureFilter::LinearMipmap,
        TextureWrap::Repeat,
    )
}
