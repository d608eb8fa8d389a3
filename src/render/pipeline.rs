use crate::{
    assets::SourceImage,
    config::PixelifyConfig,
    encode::document::generate_document,
    foundation::core::GridDimension,
    foundation::error::PixelifyResult,
    render::composite::{CompositeOpts, composite},
    render::sample::{ColorGrid, sample_grid},
};

/// Composite + sample: turn a decoded image into an `N x N` color grid.
///
/// Pipeline:
/// 1. [`composite`](crate::composite) onto a letterboxed square canvas
/// 2. [`sample_grid`](crate::sample_grid) at each cell center
#[tracing::instrument(skip(image, opts), fields(src_w = image.width(), src_h = image.height()))]
pub fn pixelate(
    image: &SourceImage,
    dimension: GridDimension,
    opts: &CompositeOpts,
) -> PixelifyResult<ColorGrid> {
    let canvas = composite(image, opts);
    let grid = sample_grid(&canvas, dimension)?;
    tracing::debug!(cells = grid.len(), "sampled grid");
    Ok(grid)
}

/// Run the whole pipeline for `config`, returning the grid and its HTML document.
pub fn pixelate_to_document(
    image: &SourceImage,
    config: &PixelifyConfig,
) -> PixelifyResult<(ColorGrid, String)> {
    config.validate()?;
    let grid = pixelate(image, config.dimension, &config.composite_opts())?;
    let document = generate_document(&grid, &config.document_opts());
    Ok((grid, document))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
