use image::RgbaImage;

use crate::{
    encode::hex::HexColor,
    foundation::core::GridDimension,
    foundation::error::{PixelifyError, PixelifyResult},
    render::composite::Canvas,
};

/// Point-readable pixel storage.
///
/// The sampler only needs dimensions and single-pixel reads, so tests can hand it synthetic
/// buffers without going through the compositor.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// RGB of the pixel at `(x, y)`. Callers keep `x < width` and `y < height`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

impl PixelSource for Canvas {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels().dimensions()
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels().rgb_at(x, y)
    }
}

/// `N * N` colors in row-major order (`index = y * N + x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    dimension: GridDimension,
    colors: Vec<HexColor>,
}

impl ColorGrid {
    /// Build a grid, checking that exactly `N * N` colors are supplied.
    pub fn new(dimension: GridDimension, colors: Vec<HexColor>) -> PixelifyResult<Self> {
        if colors.len() != dimension.cell_count() {
            return Err(PixelifyError::validation(format!(
                "a {dimension} grid needs {} colors, got {}",
                dimension.cell_count(),
                colors.len()
            )));
        }
        Ok(Self { dimension, colors })
    }

    /// Cells per side.
    pub fn dimension(&self) -> GridDimension {
        self.dimension
    }

    /// Colors in row-major order.
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Number of cells, always `N * N`.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a valid grid has at least four cells.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the cell at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<HexColor> {
        let n = self.dimension.get();
        if x >= n || y >= n {
            return None;
        }
        self.colors.get((y * n + x) as usize).copied()
    }

    /// Hex strings (`#rrggbb`) in row-major order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(ToString::to_string).collect()
    }
}

/// Point-sample one color per cell at the cell center.
///
/// The sample point `(x + 0.5) * cell` is truncated toward zero to a pixel index. No averaging
/// happens: the result is deterministic and cheap.
pub fn sample_grid<S>(source: &S, dimension: GridDimension) -> PixelifyResult<ColorGrid>
where
    S: PixelSource + ?Sized,
{
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(PixelifyError::validation(format!(
            "cannot sample an empty {width}x{height} buffer"
        )));
    }

    let n = dimension.get();
    let cell_w = dimension.cell_size(width);
    let cell_h = dimension.cell_size(height);

    let mut colors = Vec::with_capacity(dimension.cell_count());
    for y in 0..n {
        let sy = f64::from(y) * cell_h + cell_h / 2.0;
        let py = (sy as u32).min(height - 1);
        for x in 0..n {
            let sx = f64::from(x) * cell_w + cell_w / 2.0;
            let px = (sx as u32).min(width - 1);
            colors.push(HexColor::from(source.rgb_at(px, py)));
        }
    }

    ColorGrid::new(dimension, colors)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sample.rs"]
mod tests;
