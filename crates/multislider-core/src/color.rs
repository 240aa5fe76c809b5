//! RGBA colors for slider styling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color, every channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from channels, each clamped into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque color from clamped channels.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        let channel = |at: usize| -> Result<f32, ColorParseError> {
            digits
                .get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|byte| f32::from(byte) / 255.0)
                .ok_or(ColorParseError::InvalidHex)
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// `#rrggbb`, alpha dropped.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |channel: f32| (channel * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex characters")]
    InvalidHex,
    #[error("invalid hex string length {0} (expected 6 or 8)")]
    InvalidLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_clamps_channels() {
        assert_eq!(
            Color::new(1.5, -0.5, 0.5, 2.0),
            Color::new(1.0, 0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Ok(Color::RED));
        assert_eq!(Color::from_hex("0000ff"), Ok(Color::BLUE));
        let translucent = Color::from_hex("#ffffff80").unwrap();
        assert!((translucent.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#fff"), Err(ColorParseError::InvalidLength(3)));
        assert!(Color::from_hex("#ff00é0").is_err());
        assert_eq!(
            ColorParseError::InvalidLength(3).to_string(),
            "invalid hex string length 3 (expected 6 or 8)"
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(0.8, 0.8, 0.8).to_hex(), "#cccccc");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    proptest! {
        #[test]
        fn prop_channels_stay_in_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
            let c = Color::new(r, g, b, a);
            for channel in [c.r, c.g, c.b, c.a] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
        }

        #[test]
        fn prop_hex_round_trip(r: u8, g: u8, b: u8) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(Color::from_hex(&hex).unwrap().to_hex(), hex);
        }
    }
}
