use image::RgbaImage;

use crate::{
    assets::SourceImage,
    config::PixelifyConfig,
    encode::document::generate_document,
    encode::sink::DocumentSink,
    foundation::core::GridDimension,
    foundation::error::{PixelifyError, PixelifyResult},
    render::composite::CompositeOpts,
    render::pipeline::pixelate,
    render::preview::render_preview,
    render::sample::ColorGrid,
    session::coalesce::{Coalescer, Ticket},
};

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Grids computed by [`PixelifySession::refresh`].
    pub recomputations: u64,
    /// Computed grids dropped because a newer request superseded them.
    pub discarded: u64,
}

/// A snapshot of the session inputs, runnable anywhere.
///
/// Hand it to whatever executes the work, then give the result back through
/// [`PixelifySession::accept`]. If the session changed in the meantime the result is dropped.
#[derive(Clone, Debug)]
pub struct PixelateRequest {
    ticket: Ticket,
    image: SourceImage,
    dimension: GridDimension,
    opts: CompositeOpts,
}

impl PixelateRequest {
    /// Ticket identifying this request.
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Grid dimension captured in the snapshot.
    pub fn dimension(&self) -> GridDimension {
        self.dimension
    }

    /// Composite and sample the captured image.
    pub fn run(&self) -> PixelifyResult<ColorGrid> {
        pixelate(&self.image, self.dimension, &self.opts)
    }
}

/// Holds the current image, configuration and last computed grid.
///
/// Changing the image or the configuration only marks the grid stale. The next call that needs
/// a grid recomputes once for the latest inputs, so a burst of changes (a dragged slider, say)
/// costs one recomputation. Documents and previews are re-serialized from the cached grid.
#[derive(Debug, Default)]
pub struct PixelifySession {
    config: PixelifyConfig,
    image: Option<SourceImage>,
    grids: Coalescer<ColorGrid>,
    recomputations: u64,
}

impl PixelifySession {
    /// Create a session with a validated configuration and no image.
    pub fn new(config: PixelifyConfig) -> PixelifyResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &PixelifyConfig {
        &self.config
    }

    /// Current image, if one has been loaded.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Replace the source image.
    pub fn set_image(&mut self, image: SourceImage) {
        self.image = Some(image);
        self.grids.issue();
    }

    /// Change the grid dimension.
    pub fn set_dimension(&mut self, dimension: GridDimension) -> PixelifyResult<()> {
        let config = PixelifyConfig {
            dimension,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    /// Replace the whole configuration.
    ///
    /// Only dimension and compositing changes invalidate the grid; title and flavor changes
    /// re-serialize the cached one.
    pub fn set_config(&mut self, config: PixelifyConfig) -> PixelifyResult<()> {
        config.validate()?;
        let resample = config.dimension != self.config.dimension
            || config.composite_opts() != self.config.composite_opts();
        self.config = config;
        if resample {
            self.grids.issue();
        }
        Ok(())
    }

    /// Return `true` when the cached grid does not reflect the latest inputs.
    pub fn is_stale(&self) -> bool {
        self.grids.latest().is_some() && !self.grids.is_settled()
    }

    /// Snapshot the current inputs as a request.
    pub fn request(&self) -> PixelifyResult<PixelateRequest> {
        let image = self
            .image
            .clone()
            .ok_or_else(|| PixelifyError::validation("no image loaded"))?;
        let ticket = self
            .grids
            .latest()
            .ok_or_else(|| PixelifyError::validation("no image loaded"))?;
        Ok(PixelateRequest {
            ticket,
            image,
            dimension: self.config.dimension,
            opts: self.config.composite_opts(),
        })
    }

    /// Offer a grid computed for `ticket`. Returns `false` when it was superseded.
    pub fn accept(&mut self, ticket: Ticket, grid: ColorGrid) -> bool {
        let accepted = self.grids.complete(ticket, grid);
        if !accepted {
            tracing::warn!(ticket = ticket.seq(), "dropped stale grid");
        }
        accepted
    }

    /// Bring the grid up to date (if needed) and borrow it.
    pub fn refresh(&mut self) -> PixelifyResult<&ColorGrid> {
        if self.is_stale() {
            let req = self.request()?;
            let grid = req.run()?;
            self.recomputations += 1;
            self.accept(req.ticket(), grid);
        }
        self.grids
            .observed()
            .ok_or_else(|| PixelifyError::validation("no image loaded"))
    }

    /// The cached grid, only if it reflects the latest inputs.
    pub fn grid(&self) -> Option<&ColorGrid> {
        if self.is_stale() {
            return None;
        }
        self.grids.observed()
    }

    /// Serialize the up-to-date grid as an HTML document.
    pub fn document(&mut self) -> PixelifyResult<String> {
        let opts = self.config.document_opts();
        let grid = self.refresh()?;
        Ok(generate_document(grid, &opts))
    }

    /// Render the up-to-date grid as a raster preview.
    pub fn preview(&mut self, cell_px: u32) -> PixelifyResult<RgbaImage> {
        let grid = self.refresh()?;
        render_preview(grid, cell_px)
    }

    /// Generate the document and hand it to `sink`.
    ///
    /// A sink failure is returned as-is; the cached grid stays valid and a retry does not
    /// recompute anything.
    pub fn publish(&mut self, sink: &mut dyn DocumentSink) -> PixelifyResult<()> {
        let document = self.document()?;
        sink.write_document(&document).inspect_err(|e| {
            tracing::warn!(error = %e, "document sink failed");
        })
    }

    /// Session counters.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            recomputations: self.recomputations,
            discarded: self.grids.discarded(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/pixelify_session.rs"]
mod tests;
