//! Palette — ordered, read-only colors indexed by color genes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entries in the built-in palette, one per two-digit color gene
pub const BUILTIN_PALETTE_SIZE: usize = 100;

/// Palette errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("Palette index {index} out of range (palette has {len} colors)")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Palette must contain at least one color")]
    Empty,
}

/// An RGB color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color([u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Hex notation as used in CSS
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode(self.0))
    }

    /// HSL → RGB, hue in degrees, saturation and lightness in [0, 1]
    fn from_hsl(hue: f64, sat: f64, light: f64) -> Self {
        let c = (1.0 - (2.0 * light - 1.0).abs()) * sat;
        let h = (hue % 360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = light - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self([to_u8(r), to_u8(g), to_u8(b)])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| PaletteError::InvalidColor(s.to_string()))?;
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb)
            .map_err(|_| PaletteError::InvalidColor(s.to_string()))?;
        Ok(Self(rgb))
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

/// The color table. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Parse a list of `#rrggbb` strings
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .map(|e| e.as_ref().parse())
            .collect::<Result<Vec<Color>, _>>()?;
        Self::new(colors)
    }

    /// One hundred colors: ten hue bands, ten shades each
    pub fn builtin() -> Self {
        let colors = (0..BUILTIN_PALETTE_SIZE)
            .map(|i| {
                let band = (i / 10) as f64;
                let shade = (i % 10) as f64;
                Color::from_hsl(band * 36.0 + shade * 3.0, 0.35 + band * 0.05, 0.25 + shade * 0.055)
            })
            .collect();
        Self { colors }
    }

    /// Look up a color gene. Indices past the end fail with `OutOfRange`.
    pub fn get(&self, index: usize) -> Result<&Color, PaletteError> {
        self.colors.get(index).ok_or(PaletteError::OutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_two_digit_genes() {
        let palette = Palette::builtin();
        assert_eq!(palette.len(), 100);
        assert!(palette.get(0).is_ok());
        assert!(palette.get(99).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00"]).unwrap();
        assert_eq!(
            palette.get(2),
            Err(PaletteError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            Palette::builtin().get(100),
            Err(PaletteError::OutOfRange { index: 100, len: 100 })
        );
    }

    #[test]
    fn test_color_parse() {
        let c: Color = "#1a2B3c".parse().unwrap();
        assert_eq!(c.channels(), [0x1a, 0x2b, 0x3c]);
        assert_eq!(c.to_hex(), "#1a2b3c");
        assert!("1a2b3c".parse::<Color>().is_err());
        assert!("#1a2b".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::Empty));
    }

    #[test]
    fn test_serde_as_hex_list() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#000000","#ffffff"]"##);
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
        assert!(serde_json::from_str::<Palette>("[]").is_err());
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
    }
}
