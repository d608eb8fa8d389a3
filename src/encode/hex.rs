use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{PixelifyError, PixelifyResult};

/// Encode three 8-bit channels as `#rrggbb` (lowercase, zero-padded).
pub fn encode_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Like [`encode_hex`], clamping each channel into `[0, 255]` first.
pub fn encode_hex_clamped(r: i32, g: i32, b: i32) -> String {
    fn clamp(v: i32) -> u8 {
        v.clamp(0, 255) as u8
    }
    encode_hex(clamp(r), clamp(g), clamp(b))
}

/// Decode `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive) into channels.
pub fn parse_hex(s: &str) -> PixelifyResult<[u8; 3]> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> PixelifyResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| PixelifyError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PixelifyError::validation(format!(
            "hex color \"{s}\" must contain only hex digits"
        )));
    }

    match digits.len() {
        6 => Ok([
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        ]),
        3 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                let nibble = hex_byte(&digits[i..i + 1])?;
                *slot = nibble * 17;
            }
            Ok(out)
        }
        _ => Err(PixelifyError::validation(format!(
            "hex color \"{s}\" must be #rrggbb or #rgb"
        ))),
    }
}

/// An opaque sRGB color rendered as a 7-character `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Pure white, the default letterbox fill.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as opaque `[r, g, b, 255]`.
    pub fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for HexColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = PixelifyError;

    fn from_str(s: &str) -> PixelifyResult<Self> {
        parse_hex(s).map(Self::from)
    }
}

impl serde::Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/hex.rs"]
mod tests;
