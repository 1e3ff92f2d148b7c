//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::{SegError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// White. Template pixels of this colour mark segments.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Default colour for lit segments.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Default colour for unlit segments (CSS `dimgray`).
    pub const DIM_GRAY: Self = Self::rgb(105, 105, 105);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        let nibble = |i: usize| parse_hex_digit(&hex[i..=i]).map(|d| d << 4 | d);
        let byte = |i: usize| parse_hex_byte(&hex[i..i + 2]);

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Look up a CSS/SVG colour keyword such as `red` or `DimGray`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        palette::named::from_str(&name).map(|c| Self::rgb(c.red, c.green, c.blue))
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FromStr for Colour {
    type Err = SegError;

    /// Parse a hex colour or, failing that, a colour keyword.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        if let Some(named) = Self::from_name(trimmed) {
            return Ok(named);
        }

        Self::from_hex(trimmed).map_err(|_| SegError::Parse {
            message: format!("The colour '{}' was not recognized", trimmed),
            help: Some(
                "Use hex notation like in HTML (#FF0000) or a CSS colour name (red)".to_string(),
            ),
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> SegError {
    SegError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SegError::Parse {
        message: format!("Invalid hex digit: {}", s),
        help: None,
    })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SegError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
