use image::{Rgba, RgbaImage, imageops};
use kurbo::{Point, Rect, Size};

use crate::{
    assets::SourceImage,
    encode::hex::HexColor,
    foundation::core::CanvasSize,
};

/// Resampling filter used when scaling the source onto the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    /// Nearest neighbour.
    Nearest,
    /// Linear (bilinear in 2D). Matches what a browser canvas uses for `drawImage`.
    #[default]
    Triangle,
    /// Cubic Catmull-Rom.
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResampleFilter> for imageops::FilterType {
    fn from(f: ResampleFilter) -> Self {
        match f {
            ResampleFilter::Nearest => Self::Nearest,
            ResampleFilter::Triangle => Self::Triangle,
            ResampleFilter::CatmullRom => Self::CatmullRom,
            ResampleFilter::Gaussian => Self::Gaussian,
            ResampleFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Compositing settings shared by every stage that touches the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeOpts {
    /// Side of the square canvas.
    pub canvas_size: CanvasSize,
    /// Opaque fill for the margin left by aspect-preserving scaling.
    pub letterbox: HexColor,
    /// Filter used to scale the source.
    pub filter: ResampleFilter,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self {
            canvas_size: CanvasSize::default(),
            letterbox: HexColor::WHITE,
            filter: ResampleFilter::default(),
        }
    }
}

/// Where a source image lands on the canvas: uniformly scaled to fit, then centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Uniform scale factor `min(canvas / width, canvas / height)`.
    pub scale: f64,
    /// Draw rectangle in canvas coordinates (real-valued).
    pub rect: Rect,
}

impl Placement {
    /// Fit a `width x height` source into a square canvas, preserving aspect ratio.
    pub fn fit(width: u32, height: u32, canvas: CanvasSize) -> Self {
        let side = canvas.as_f64();
        let (iw, ih) = (f64::from(width), f64::from(height));
        let scale = (side / iw).min(side / ih);

        let draw = Size::new(iw * scale, ih * scale);
        let origin = Point::new((side - draw.width) / 2.0, (side - draw.height) / 2.0);

        Self {
            scale,
            rect: Rect::from_origin_size(origin, draw),
        }
    }

    /// Scaled width.
    pub fn draw_width(&self) -> f64 {
        self.rect.width()
    }

    /// Scaled height.
    pub fn draw_height(&self) -> f64 {
        self.rect.height()
    }

    /// Top-left corner of the draw rectangle.
    pub fn offset(&self) -> Point {
        self.rect.origin()
    }

    /// Snap the draw rectangle to whole pixels: `(x, y, width, height)`, width/height >= 1.
    ///
    /// Each edge is rounded on its own so the snapped rectangle stays centered.
    pub fn pixel_bounds(&self, canvas: CanvasSize) -> (i64, i64, u32, u32) {
        let side = canvas.as_f64();
        let r = self.rect;
        let x0 = r.x0.round().clamp(0.0, side - 1.0);
        let y0 = r.y0.round().clamp(0.0, side - 1.0);
        let x1 = r.x1.round().clamp(x0 + 1.0, side);
        let y1 = r.y1.round().clamp(y0 + 1.0, side);
        (x0 as i64, y0 as i64, (x1 - x0) as u32, (y1 - y0) as u32)
    }
}

/// The composited square buffer the sampler reads from. Always fully opaque.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: CanvasSize,
    placement: Placement,
    pixels: RgbaImage,
}

impl Canvas {
    /// Side length.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Placement the source was drawn with.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Borrow the composited pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the canvas, returning its pixels.
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

/// Draw `image` scaled and centered onto a letterbox-filled square canvas.
///
/// The letterbox is painted first so uncovered margins are a known opaque color; the scaled
/// source is then alpha-composited over it.
#[tracing::instrument(skip(image), fields(src_w = image.width(), src_h = image.height()))]
pub fn composite(image: &SourceImage, opts: &CompositeOpts) -> Canvas {
    let side = opts.canvas_size.get();
    let mut pixels = RgbaImage::from_pixel(side, side, Rgba(opts.letterbox.rgba()));

    let placement = Placement::fit(image.width(), image.height(), opts.canvas_size);
    let (x, y, w, h) = placement.pixel_bounds(opts.canvas_size);
    tracing::debug!(scale = placement.scale, x, y, w, h, "placement");

    let scaled = imageops::resize(image.rgba(), w, h, opts.filter.into());
    imageops::overlay(&mut pixels, &scaled, x, y);

    Canvas {
        size: opts.canvas_size,
        placement,
        pixels,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
