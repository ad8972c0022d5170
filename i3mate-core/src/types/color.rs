//! Color representation for bar rendering.
//!
//! This module provides the [`Color`] struct for RGB colors parsed from the
//! hex strings the window manager reports in its bar configuration, and
//! [`ColorParseError`] for handling errors during parsing.
//!
//! # Examples
//!
//! ```
//! use i3mate_core::types::color::Color;
//! use std::str::FromStr;
//!
//! let red = Color::from_hex("#ff0000").unwrap();
//! assert_eq!(red, Color::rgb(0xff, 0x00, 0x00));
//! assert_eq!(red.to_hex(), "#ff0000");
//!
//! // Short form expands per component.
//! assert_eq!(Color::from_str("#f80").unwrap(), Color::rgb(0xff, 0x88, 0x00));
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string did not start with `#`.
    /// Contains the input string that caused the error.
    #[error("Invalid hex color string format: '{0}'. Expected #RGB, #RRGGBB, or #RRGGBBAA.")]
    InvalidHexFormat(String),

    /// A component was not valid hexadecimal.
    /// Contains the problematic input and the source parsing error.
    #[error("Invalid hex digit in '{input_str}': {source}")]
    InvalidHexDigit {
        input_str: String,
        #[source]
        source: ParseIntError,
    },

    /// The string had an unsupported number of characters after the `#`.
    /// Supported lengths are 3 (RGB), 6 (RRGGBB), and 8 (RRGGBBAA).
    #[error("Invalid hex color string length: '{0}'. Expected 3, 6, or 8 characters after '#'.")]
    InvalidHexLength(String),
}

/// An opaque RGB color.
///
/// The window manager reports bar colors as `#rrggbb` strings; this struct
/// stores the three 8-bit channels and converts back to the same hex form
/// for Pango markup. An alpha pair in `#rrggbbaa` input is validated and
/// then dropped, since the markup produced by the renderers is always
/// opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a new `Color` from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses a `#RGB`, `#RRGGBB`, or `#RRGGBBAA` hex string.
    ///
    /// The leading `#` is required. `#RGB` components are doubled
    /// (`#f80` -> `#ff8800`); an `AA` pair is parsed for validity and
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] describing the malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidHexFormat(hex.to_string()))?;

        let parse_pair = |pair: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(pair, 16).map_err(|source| ColorParseError::InvalidHexDigit {
                input_str: hex.to_string(),
                source,
            })
        };

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let doubled: String = [ch, ch].iter().collect();
                    channels[i] = parse_pair(&doubled)?;
                }
                Ok(Color::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let r = parse_pair(&digits[0..2])?;
                let g = parse_pair(&digits[2..4])?;
                let b = parse_pair(&digits[4..6])?;
                if digits.len() == 8 {
                    // Alpha is validated but not kept.
                    parse_pair(&digits[6..8])?;
                }
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(ColorParseError::InvalidHexLength(hex.to_string())),
        }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_long_form() {
        assert_eq!(Color::from_hex("#285577").unwrap(), Color::rgb(0x28, 0x55, 0x77));
    }

    #[test]
    fn parses_short_form_by_doubling() {
        assert_eq!(Color::from_hex("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn drops_alpha_pair() {
        assert_eq!(Color::from_hex("#28557780").unwrap(), Color::rgb(0x28, 0x55, 0x77));
    }

    #[test]
    fn rejects_missing_hash() {
        match Color::from_hex("285577") {
            Err(ColorParseError::InvalidHexFormat(s)) => assert_eq!(s, "285577"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_length() {
        assert!(matches!(
            Color::from_hex("#28557"),
            Err(ColorParseError::InvalidHexLength(_))
        ));
    }

    #[test]
    fn rejects_non_hex_digits() {
        match Color::from_hex("#zz5577") {
            Err(ColorParseError::InvalidHexDigit { input_str, .. }) => {
                assert_eq!(input_str, "#zz5577");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn hex_round_trip_is_lowercase() {
        let c = Color::from_hex("#2F343A").unwrap();
        assert_eq!(c.to_hex(), "#2f343a");
        assert_eq!(format!("{}", c), "#2f343a");
    }
}
