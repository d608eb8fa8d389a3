use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::error::{PixelifyError, PixelifyResult};

pub(crate) mod decode;

/// A decoded source raster: straight-alpha RGBA8, row-major, non-empty.
///
/// Cloning is cheap; pixel storage is shared.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Wrap an already-decoded RGBA8 buffer. Zero-sized buffers are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> PixelifyResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PixelifyError::validation(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying RGBA8 buffer.
    pub fn rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}
