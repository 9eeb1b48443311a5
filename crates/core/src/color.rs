//! 24-bit RGB color with hex-string parsing.
//!
//! The LIC blend math is defined on integer 0–255 channels, so `Rgb` stores
//! `u8` components directly. Serializes as a hex string `"#rrggbb"` for
//! human-readable configuration; the hex round-trip is exact.

use crate::error::LicError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// A pure gray of the given intensity.
    pub const fn gray(v: u8) -> Rgb {
        Rgb { r: v, g: v, b: v }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `LicError::InvalidColor` for anything that is not exactly six
    /// hex digits (plus optional leading `#`).
    pub fn from_hex(hex: &str) -> Result<Rgb, LicError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(LicError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| LicError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| LicError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| LicError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb { r, g, b })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_red_with_hash() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn from_hex_parses_without_hash() {
        assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("#FF00AA").unwrap(),
            Rgb::from_hex("#ff00aa").unwrap()
        );
    }

    #[test]
    fn from_hex_parses_arbitrary_color() {
        assert_eq!(
            Rgb::from_hex("#804020").unwrap(),
            Rgb {
                r: 0x80,
                g: 0x40,
                b: 0x20
            }
        );
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ff00ff00").is_err());
    }

    #[test]
    fn to_hex_known_colors() {
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
        assert_eq!(Rgb { r: 0x80, g: 0x40, b: 0x20 }.to_hex(), "#804020");
    }

    #[test]
    fn gray_fills_all_channels() {
        assert_eq!(Rgb::gray(0x7f), Rgb { r: 0x7f, g: 0x7f, b: 0x7f });
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb { r: 255, g: 0, b: 0 }).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Rgb = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(c, Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Round-trip law: hex_to_rgb(rgb_to_hex(c)) == c for all 24-bit colors.
            #[test]
            fn hex_round_trip_is_exact(r: u8, g: u8, b: u8) {
                let original = Rgb { r, g, b };
                let parsed = Rgb::from_hex(&original.to_hex()).unwrap();
                prop_assert_eq!(parsed, original);
            }

            #[test]
            fn json_round_trip_is_exact(r: u8, g: u8, b: u8) {
                let original = Rgb { r, g, b };
                let json = serde_json::to_string(&original).unwrap();
                let parsed: Rgb = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(parsed, original);
            }
        }
    }
}
