use crate::foundation::error::{PixelifyError, PixelifyResult};

/// Smallest accepted grid dimension.
pub const MIN_GRID_DIMENSION: u32 = 2;
/// Largest accepted grid dimension.
pub const MAX_GRID_DIMENSION: u32 = 128;
/// Grid dimension used when none is configured.
pub const DEFAULT_GRID_DIMENSION: u32 = 16;

/// Side of the square compositing canvas used when none is configured.
pub const DEFAULT_CANVAS_SIZE: u32 = 100;
/// Largest accepted canvas side.
pub const MAX_CANVAS_SIZE: u32 = 4096;

/// Number of cells along each side of the output grid.
///
/// Always within `[MIN_GRID_DIMENSION, MAX_GRID_DIMENSION]`; the only way to build one is
/// through [`GridDimension::new`] (or deserialization, which goes through it).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridDimension(u32);

impl GridDimension {
    /// Create a validated grid dimension.
    pub fn new(n: u32) -> PixelifyResult<Self> {
        if !(MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).contains(&n) {
            return Err(PixelifyError::validation(format!(
                "grid dimension must be in [{MIN_GRID_DIMENSION}, {MAX_GRID_DIMENSION}], got {n}"
            )));
        }
        Ok(Self(n))
    }

    /// Raw cell count along one side.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Side of one cell in canvas pixels. Real-valued: `N` need not divide the canvas.
    pub fn cell_size(self, extent: u32) -> f64 {
        f64::from(extent) / f64::from(self.0)
    }
}

impl Default for GridDimension {
    fn default() -> Self {
        Self(DEFAULT_GRID_DIMENSION)
    }
}

impl TryFrom<u32> for GridDimension {
    type Error = PixelifyError;

    fn try_from(n: u32) -> PixelifyResult<Self> {
        Self::new(n)
    }
}

impl From<GridDimension> for u32 {
    fn from(d: GridDimension) -> Self {
        d.0
    }
}

impl std::fmt::Display for GridDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Side length of the square compositing canvas in pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct CanvasSize(u32);

impl CanvasSize {
    /// Create a validated canvas size in `[1, MAX_CANVAS_SIZE]`.
    pub fn new(side: u32) -> PixelifyResult<Self> {
        if side == 0 || side > MAX_CANVAS_SIZE {
            return Err(PixelifyError::validation(format!(
                "canvas size must be in [1, {MAX_CANVAS_SIZE}], got {side}"
            )));
        }
        Ok(Self(side))
    }

    /// Side length in pixels.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Side length as `f64`, for placement math.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self(DEFAULT_CANVAS_SIZE)
    }
}

impl TryFrom<u32> for CanvasSize {
    type Error = PixelifyError;

    fn try_from(side: u32) -> PixelifyResult<Self> {
        Self::new(side)
    }
}

impl From<CanvasSize> for u32 {
    fn from(c: CanvasSize) -> Self {
        c.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
