use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    encode::document::{DEFAULT_DOCUMENT_TITLE, DocumentFlavor, DocumentOpts},
    encode::hex::HexColor,
    foundation::core::{CanvasSize, GridDimension},
    foundation::error::{PixelifyError, PixelifyResult},
    render::composite::{CompositeOpts, ResampleFilter},
};

/// Pipeline configuration, loadable from JSON.
///
/// Every field is optional in the file; missing fields take their defaults. Unknown fields are
/// rejected so typos surface instead of being ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PixelifyConfig {
    /// Cells per side (2..=128).
    pub dimension: GridDimension,
    /// Side of the compositing canvas in pixels.
    pub canvas_size: CanvasSize,
    /// Letterbox fill, `#rrggbb`.
    pub letterbox: HexColor,
    /// Filter used to scale the source onto the canvas.
    pub filter: ResampleFilter,
    /// Document `<title>`.
    pub title: String,
    /// Document byte format.
    pub flavor: DocumentFlavor,
}

impl Default for PixelifyConfig {
    fn default() -> Self {
        Self {
            dimension: GridDimension::default(),
            canvas_size: CanvasSize::default(),
            letterbox: HexColor::WHITE,
            filter: ResampleFilter::default(),
            title: DEFAULT_DOCUMENT_TITLE.to_owned(),
            flavor: DocumentFlavor::default(),
        }
    }
}

impl PixelifyConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> PixelifyResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| PixelifyError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PixelifyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelifyError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check cross-field constraints the individual types cannot express.
    pub fn validate(&self) -> PixelifyResult<()> {
        if self.title.trim().is_empty() {
            return Err(PixelifyError::validation("title must not be empty"));
        }
        if self.canvas_size.get() < self.dimension.get() {
            return Err(PixelifyError::validation(format!(
                "canvas_size ({}) must be at least the grid dimension ({})",
                self.canvas_size.get(),
                self.dimension.get()
            )));
        }
        Ok(())
    }

    /// Compositor settings derived from this configuration.
    pub fn composite_opts(&self) -> CompositeOpts {
        CompositeOpts {
            canvas_size: self.canvas_size,
            letterbox: self.letterbox,
            filter: self.filter,
        }
    }

    /// Document settings derived from this configuration.
    pub fn document_opts(&self) -> DocumentOpts {
        DocumentOpts {
            title: self.title.clone(),
            flavor: self.flavor,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
