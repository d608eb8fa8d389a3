use image::{Rgba, RgbaImage};

use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(w, h, Rgba(rgba))).unwrap()
}

#[test]
fn pixelate_two_by_two_red() {
    let grid = pixelate(
        &solid(2, 2, [255, 0, 0, 255]),
        GridDimension::new(2).unwrap(),
        &CompositeOpts::default(),
    )
    .unwrap();
    assert_eq!(grid.to_hex_strings(), vec!["#ff0000"; 4]);
}

#[test]
fn pixelate_to_document_uses_config() {
    let cfg = PixelifyConfig {
        dimension: GridDimension::new(3).unwrap(),
        title: "Three".to_owned(),
        ..PixelifyConfig::default()
    };
    let (grid, doc) = pixelate_to_document(&solid(9, 9, [0, 128, 0, 255]), &cfg).unwrap();
    assert_eq!(grid.len(), 9);
    assert!(doc.contains("<title>Three</title>"));
    assert!(doc.contains("repeat(3,1fr)"));
    assert_eq!(doc.matches("#008000").count(), 9);
}

#[test]
fn pixelate_to_document_validates_config() {
    let cfg = PixelifyConfig {
        title: String::new(),
        ..PixelifyConfig::default()
    };
    assert!(pixelate_to_document(&solid(4, 4, [0, 0, 0, 255]), &cfg).is_err());
}
