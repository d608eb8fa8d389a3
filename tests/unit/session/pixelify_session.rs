use image::Rgba;

use super::*;
use crate::encode::sink::InMemorySink;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(w, h, Rgba(rgba))).unwrap()
}

fn dim(n: u32) -> GridDimension {
    GridDimension::new(n).unwrap()
}

struct RejectingSink;

impl DocumentSink for RejectingSink {
    fn write_document(&mut self, _document: &str) -> PixelifyResult<()> {
        Err(PixelifyError::sink("clipboard denied"))
    }
}

#[test]
fn refresh_without_image_is_an_error() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    assert!(session.refresh().is_err());
    assert!(session.grid().is_none());
}

#[test]
fn burst_of_changes_costs_one_recomputation() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(4, 4, [255, 0, 0, 255]));
    for n in 2..=40 {
        session.set_dimension(dim(n)).unwrap();
    }
    assert!(session.is_stale());

    let grid = session.refresh().unwrap();
    assert_eq!(grid.dimension().get(), 40);
    assert_eq!(grid.len(), 1600);
    assert_eq!(session.stats().recomputations, 1);

    let _ = session.document().unwrap();
    let _ = session.preview(2).unwrap();
    assert_eq!(session.stats().recomputations, 1);
}

#[test]
fn superseded_request_result_is_discarded() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(4, 4, [0, 0, 255, 255]));
    session.set_dimension(dim(4)).unwrap();
    let old = session.request().unwrap();

    session.set_dimension(dim(8)).unwrap();
    let new = session.request().unwrap();

    let new_grid = new.run().unwrap();
    let old_grid = old.run().unwrap();
    assert!(session.accept(new.ticket(), new_grid));
    assert!(!session.accept(old.ticket(), old_grid));

    assert_eq!(session.grid().unwrap().dimension().get(), 8);
    assert_eq!(session.stats().discarded, 1);
}

#[test]
fn invalid_config_change_keeps_previous_state() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(2, 2, [1, 2, 3, 255]));
    session.refresh().unwrap();

    let bad = PixelifyConfig {
        title: String::new(),
        ..PixelifyConfig::default()
    };
    assert!(session.set_config(bad).is_err());
    assert!(!session.is_stale());
    assert_eq!(session.config().title, "Pixel Art");
}

#[test]
fn sink_failure_leaves_grid_and_document_intact() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(3, 3, [9, 8, 7, 255]));
    let before = session.document().unwrap();

    let err = session.publish(&mut RejectingSink).unwrap_err();
    assert!(err.is_sink());
    assert!(session.grid().is_some());

    let mut sink = InMemorySink::new();
    session.publish(&mut sink).unwrap();
    assert_eq!(sink.last(), Some(before.as_str()));
    assert_eq!(session.stats().recomputations, 1);
}

#[test]
fn new_image_invalidates_cached_grid() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(2, 2, [255, 0, 0, 255]));
    assert_eq!(session.refresh().unwrap().colors()[0].to_string(), "#ff0000");

    session.set_image(solid(2, 2, [0, 255, 0, 255]));
    assert!(session.grid().is_none());
    assert_eq!(session.refresh().unwrap().colors()[0].to_string(), "#00ff00");
    assert_eq!(session.stats().recomputations, 2);
}

#[test]
fn document_only_changes_reuse_cached_grid() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(4, 4, [255, 0, 0, 255]));
    let before = session.document().unwrap();

    let cfg = PixelifyConfig {
        title: "Renamed".to_owned(),
        flavor: crate::encode::document::DocumentFlavor::Legacy,
        ..session.config().clone()
    };
    session.set_config(cfg).unwrap();
    assert!(!session.is_stale());

    let after = session.document().unwrap();
    assert_ne!(before, after);
    assert!(after.contains("<title>Renamed</title>"));
    assert!(after.contains("undefined"));
    assert_eq!(session.stats().recomputations, 1);

    let cfg = PixelifyConfig {
        letterbox: crate::encode::hex::HexColor::new(0, 0, 0),
        ..session.config().clone()
    };
    session.set_config(cfg).unwrap();
    assert!(session.is_stale());
    session.refresh().unwrap();
    assert_eq!(session.stats().recomputations, 2);
}

#[test]
fn externally_computed_grids_are_not_counted_as_recomputations() {
    let mut session = PixelifySession::new(PixelifyConfig::default()).unwrap();
    session.set_image(solid(2, 2, [0, 0, 0, 255]));
    let req = session.request().unwrap();
    let grid = req.run().unwrap();
    assert!(session.accept(req.ticket(), grid));

    assert!(session.grid().is_some());
    assert_eq!(session.stats().recomputations, 0);
}
