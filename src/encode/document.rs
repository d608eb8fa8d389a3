//! Standalone HTML serialization of a color grid.
//!
//! The document is one line of markup (plus a single line break before `</head>`): an inline
//! `<style>` block with a CSS grid wrapper and one `.pxK` rule per cell, then one
//! `<div class="px pxK">` per cell. Class indices are 1-based and follow the grid's row-major
//! order, so rule `K` and cell `K` always refer to the same color.

use crate::{
    encode::hex::HexColor,
    foundation::core::GridDimension,
    foundation::error::{PixelifyError, PixelifyResult},
    render::sample::ColorGrid,
};

/// Title used when none is configured.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Pixel Art";

/// Byte-format variant of the generated document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFlavor {
    /// Exactly `N * N` rules and cells, one column-count declaration.
    #[default]
    Standard,
    /// Historical output: the column-count declaration appears twice and one extra rule/cell
    /// pair is emitted past the end, with the color text `undefined`.
    Legacy,
}

/// Document generation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentOpts {
    /// Contents of `<title>`; HTML-escaped on output.
    pub title: String,
    /// Output byte format.
    pub flavor: DocumentFlavor,
}

impl Default for DocumentOpts {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCUMENT_TITLE.to_owned(),
            flavor: DocumentFlavor::default(),
        }
    }
}

/// Serialize a grid into a self-contained HTML document.
#[tracing::instrument(skip(grid), fields(n = grid.dimension().get()))]
pub fn generate_document(grid: &ColorGrid, opts: &DocumentOpts) -> String {
    render(grid.colors(), grid.dimension(), opts)
}

/// Serialize a raw color sequence. Fails unless `colors.len() == N * N`.
pub fn generate_document_from_colors(
    colors: &[HexColor],
    dimension: GridDimension,
    opts: &DocumentOpts,
) -> PixelifyResult<String> {
    if colors.len() != dimension.cell_count() {
        return Err(PixelifyError::validation(format!(
            "document for a {dimension} grid needs {} colors, got {}",
            dimension.cell_count(),
            colors.len()
        )));
    }
    Ok(render(colors, dimension, opts))
}

fn render(colors: &[HexColor], dimension: GridDimension, opts: &DocumentOpts) -> String {
    let n = dimension.get();
    let emitted = match opts.flavor {
        DocumentFlavor::Standard => colors.len(),
        DocumentFlavor::Legacy => colors.len() + 1,
    };

    let mut rules = String::with_capacity(emitted * 40);
    let mut cells = String::with_capacity(emitted * 34);
    for i in 0..emitted {
        let class = i + 1;
        let color = colors.get(i).map_or_else(|| "undefined".to_owned(), HexColor::to_string);
        rules.push_str(&format!(".px{class}{{background-color: {color}}} "));
        cells.push_str(&format!("<div class=\"px px{class}\"></div> "));
    }

    let columns = format!("grid-template-columns:repeat({n},1fr);");
    let columns = match opts.flavor {
        DocumentFlavor::Standard => columns,
        DocumentFlavor::Legacy => columns.repeat(2),
    };

    let mut doc = String::with_capacity(rules.len() + cells.len() + 512);
    doc.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\" />");
    doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />",
    );
    doc.push_str(&format!("<title>{}</title>", escape_html(&opts.title)));
    doc.push_str(&format!(
        "<style>* {{padding: 0;margin: 0;}} .wrapper{{display:grid;{columns}}}.px{{ aspect-ratio: 1 / 1;}}"
    ));
    doc.push_str(&rules);
    doc.push_str("</style>\n  </head><body><div class=\"wrapper\">");
    doc.push_str(&cells);
    doc.push_str("</div></body></html>");

    tracing::debug!(rules = emitted, bytes = doc.len(), "generated document");
    doc
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/document.rs"]
mod tests;
