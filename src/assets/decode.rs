use std::path::Path;

use crate::{
    assets::SourceImage,
    foundation::error::{PixelifyError, PixelifyResult},
};

/// Decode encoded image bytes (any format the `image` crate recognizes) to RGBA8.
pub fn decode_image(bytes: &[u8]) -> PixelifyResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PixelifyError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "decoded source image"
    );
    SourceImage::from_rgba(rgba).map_err(|e| PixelifyError::decode(e.to_string()))
}

/// Read and decode an image file from disk.
pub fn load_image(path: impl AsRef<Path>) -> PixelifyResult<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| PixelifyError::decode(format!("read image '{}': {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| match e {
        PixelifyError::Decode(msg) => {
            PixelifyError::decode(format!("image '{}': {msg}", path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
