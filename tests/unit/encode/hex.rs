use super::*;

#[test]
fn encodes_lowercase_zero_padded() {
    assert_eq!(encode_hex(255, 0, 0), "#ff0000");
    assert_eq!(encode_hex(5, 10, 171), "#050aab");
    assert_eq!(encode_hex(0, 0, 0).len(), 7);
}

#[test]
fn clamped_entry_point_saturates() {
    assert_eq!(encode_hex_clamped(-4, 300, 128), "#00ff80");
}

#[test]
fn hex_round_trips_every_channel_value() {
    for v in 0..=255u8 {
        let (r, g, b) = (v, v.wrapping_mul(7), 255 - v);
        assert_eq!(parse_hex(&encode_hex(r, g, b)).unwrap(), [r, g, b]);
    }
}

#[test]
fn parses_short_form_and_rejects_garbage() {
    assert_eq!(parse_hex("#fff").unwrap(), [255, 255, 255]);
    assert_eq!(parse_hex("0A0").unwrap(), [0, 170, 0]);
    assert!(parse_hex("#ff00").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("#ééé").is_err());
    assert!(parse_hex("#+f+f+f").is_err());
    assert!(parse_hex("+f+").is_err());
    assert!("+f+f+f".parse::<HexColor>().is_err());
}

#[test]
fn hex_color_display_and_serde() {
    let c = HexColor::new(0, 0, 255);
    assert_eq!(c.to_string(), "#0000ff");
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0000ff\"");

    let back: HexColor = serde_json::from_str("\"#0000FF\"").unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
}
