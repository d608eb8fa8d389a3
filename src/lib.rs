//! pixelify turns any raster image into an `N x N` grid of solid colors and serializes that
//! grid as a small, self-contained HTML document.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes or a file -> [`SourceImage`] (straight-alpha RGBA8)
//! 2. **Composite**: [`SourceImage`] -> [`Canvas`] (scaled to fit, centered, letterboxed)
//! 3. **Sample**: [`Canvas`] + [`GridDimension`] -> [`ColorGrid`] (one point sample per cell)
//! 4. **Generate**: [`ColorGrid`] -> HTML text (one CSS rule and one `<div>` per cell)
//!
//! Every stage after decoding is pure: the same image, dimension and configuration always
//! produce byte-identical output. Failures only happen at the edges (decoding, parameter
//! validation, [`DocumentSink`] writes).
//!
//! [`PixelifySession`] keeps the last grid around so documents and previews can be
//! re-serialized without resampling, and coalesces bursts of parameter changes into a single
//! recomputation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod encode;
mod foundation;
mod render;
mod session;

pub use assets::SourceImage;
pub use assets::decode::{decode_image, load_image};
pub use config::PixelifyConfig;
pub use encode::document::{
    DEFAULT_DOCUMENT_TITLE, DocumentFlavor, DocumentOpts, generate_document,
    generate_document_from_colors,
};
pub use encode::hex::{HexColor, encode_hex, encode_hex_clamped, parse_hex};
pub use encode::sink::{
    DEFAULT_DOCUMENT_FILE_NAME, DocumentSink, FileSink, InMemorySink, WriterSink,
    ensure_parent_dir,
};
pub use foundation::core::{
    CanvasSize, DEFAULT_CANVAS_SIZE, DEFAULT_GRID_DIMENSION, GridDimension, MAX_CANVAS_SIZE,
    MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
};
pub use foundation::error::{PixelifyError, PixelifyResult};
pub use render::composite::{Canvas, CompositeOpts, Placement, ResampleFilter, composite};
pub use render::pipeline::{pixelate, pixelate_to_document};
pub use render::preview::{MAX_PREVIEW_CELL_PX, render_preview};
pub use render::sample::{ColorGrid, PixelSource, sample_grid};
pub use session::coalesce::{Coalescer, Ticket};
pub use session::pixelify_session::{PixelateRequest, PixelifySession, SessionStats};
