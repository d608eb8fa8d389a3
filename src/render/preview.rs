use image::{Rgba, RgbaImage};

use crate::{
    foundation::error::{PixelifyError, PixelifyResult},
    render::sample::ColorGrid,
};

/// Largest accepted cell edge for raster previews.
pub const MAX_PREVIEW_CELL_PX: u32 = 64;

/// Paint the grid as solid `cell_px`-sized squares, row-major, matching the HTML layout.
pub fn render_preview(grid: &ColorGrid, cell_px: u32) -> PixelifyResult<RgbaImage> {
    if cell_px == 0 || cell_px > MAX_PREVIEW_CELL_PX {
        return Err(PixelifyError::validation(format!(
            "preview cell size must be in [1, {MAX_PREVIEW_CELL_PX}], got {cell_px}"
        )));
    }

    let n = grid.dimension().get();
    let side = n * cell_px;
    let mut out = RgbaImage::new(side, side);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let color = grid.colors()[((y / cell_px) * n + x / cell_px) as usize];
        *px = Rgba(color.rgba());
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
