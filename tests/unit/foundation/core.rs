use super::*;

#[test]
fn grid_dimension_accepts_inclusive_bounds() {
    assert_eq!(GridDimension::new(2).unwrap().cell_count(), 4);
    assert_eq!(GridDimension::new(128).unwrap().cell_count(), 16_384);
    assert_eq!(GridDimension::default().get(), 16);
}

#[test]
fn grid_dimension_rejects_out_of_range() {
    for n in [0, 1, 129, 1000] {
        let err = GridDimension::new(n).unwrap_err();
        assert!(matches!(err, PixelifyError::Validation(_)), "n={n}");
    }
}

#[test]
fn grid_dimension_deserializes_through_validation() {
    let d: GridDimension = serde_json::from_str("32").unwrap();
    assert_eq!(d.get(), 32);
    assert!(serde_json::from_str::<GridDimension>("1").is_err());
    assert_eq!(serde_json::to_string(&d).unwrap(), "32");
}

#[test]
fn cell_size_is_real_valued() {
    let d = GridDimension::new(3).unwrap();
    assert!((d.cell_size(100) - 100.0 / 3.0).abs() < 1e-12);
}

#[test]
fn canvas_size_bounds() {
    assert_eq!(CanvasSize::default().get(), 100);
    assert!(CanvasSize::new(0).is_err());
    assert!(CanvasSize::new(MAX_CANVAS_SIZE + 1).is_err());
    assert_eq!(CanvasSize::new(1).unwrap().as_f64(), 1.0);
}
