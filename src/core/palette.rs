//! Background colours, one per card index.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwatchError {
    #[error("colour `{0}` must look like #RRGGBB")]
    Format(String),
}

impl FromStr for Swatch {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SwatchError::Format(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| SwatchError::Format(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered list of background colours indexed by card position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Swatch>);

impl Palette {
    pub fn new(swatches: Vec<Swatch>) -> Self {
        Self(swatches)
    }

    /// Colour for a card index.  `None` past the end of the palette; the
    /// background is then left unstyled.
    pub fn get(&self, index: usize) -> Option<Swatch> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Swatch::rgb(0x88, 0x50, 0xFF),
            Swatch::rgb(0xFF, 0xBA, 0x00),
            Swatch::rgb(0x40, 0x54, 0xFF),
        ])
    }
}
