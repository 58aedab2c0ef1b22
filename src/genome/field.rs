//! GeneField — positional layout of a genome numeral

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Number of genes in a genome
pub const GENE_COUNT: usize = 10;

/// One named gene of a genome, in numeral order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneField {
    BodyColor,
    MouthColor,
    EyesColor,
    EarsColor,
    EyesShape,
    DecorationPattern,
    DecorationMidColor,
    DecorationSidesColor,
    Animation,
    Special,
}

impl GeneField {
    /// All genes in numeral order
    pub const ALL: [GeneField; GENE_COUNT] = [
        GeneField::BodyColor,
        GeneField::MouthColor,
        GeneField::EyesColor,
        GeneField::EarsColor,
        GeneField::EyesShape,
        GeneField::DecorationPattern,
        GeneField::DecorationMidColor,
        GeneField::DecorationSidesColor,
        GeneField::Animation,
        GeneField::Special,
    ];

    /// Position of this gene in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Character range of this gene inside a 16-digit numeral
    pub fn range(self) -> Range<usize> {
        match self {
            GeneField::BodyColor => 0..2,
            GeneField::MouthColor => 2..4,
            GeneField::EyesColor => 4..6,
            GeneField::EarsColor => 6..8,
            GeneField::EyesShape => 8..9,
            GeneField::DecorationPattern => 9..10,
            GeneField::DecorationMidColor => 10..12,
            GeneField::DecorationSidesColor => 12..14,
            GeneField::Animation => 14..15,
            GeneField::Special => 15..16,
        }
    }

    /// Number of digits this gene occupies
    pub fn width(self) -> usize {
        self.range().len()
    }

    /// Cardinality of a categorical gene. Decoded as `digit % n + 1`.
    pub fn cardinality(self) -> Option<u8> {
        match self {
            GeneField::EyesShape | GeneField::DecorationPattern => Some(8),
            GeneField::Animation => Some(6),
            _ => None,
        }
    }

    /// Whether `value` is a decoded value of this gene
    pub fn accepts(self, value: u8) -> bool {
        match self.cardinality() {
            Some(n) => (1..=n).contains(&value),
            None => u32::from(value) < 10u32.pow(self.width() as u32),
        }
    }

    /// Whether the gene indexes into the palette
    pub fn is_color(self) -> bool {
        matches!(
            self,
            GeneField::BodyColor
                | GeneField::MouthColor
                | GeneField::EyesColor
                | GeneField::EarsColor
                | GeneField::DecorationMidColor
                | GeneField::DecorationSidesColor
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneField::BodyColor => "body color",
            GeneField::MouthColor => "mouth color",
            GeneField::EyesColor => "eyes color",
            GeneField::EarsColor => "ears color",
            GeneField::EyesShape => "eyes shape",
            GeneField::DecorationPattern => "decoration pattern",
            GeneField::DecorationMidColor => "decoration mid color",
            GeneField::DecorationSidesColor => "decoration sides color",
            GeneField::Animation => "animation",
            GeneField::Special => "special",
        }
    }
}

impl fmt::Display for GeneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_tile_sixteen_digits() {
        let mut next = 0;
        for field in GeneField::ALL {
            let range = field.range();
            assert_eq!(range.start, next, "{} does not follow its predecessor", field);
            next = range.end;
        }
        assert_eq!(next, 16);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, field) in GeneField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_categorical_genes() {
        assert_eq!(GeneField::EyesShape.cardinality(), Some(8));
        assert_eq!(GeneField::DecorationPattern.cardinality(), Some(8));
        assert_eq!(GeneField::Animation.cardinality(), Some(6));
        assert_eq!(GeneField::Special.cardinality(), None);
        assert!(!GeneField::Special.is_color());
        assert!(GeneField::DecorationSidesColor.is_color());
        assert_eq!(GeneField::ALL.iter().filter(|f| f.is_color()).count(), 6);
    }

    #[test]
    fn test_accepts_decoded_values_only() {
        assert!(GeneField::BodyColor.accepts(0));
        assert!(GeneField::BodyColor.accepts(99));
        assert!(!GeneField::BodyColor.accepts(100));
        assert!(!GeneField::EyesShape.accepts(0));
        assert!(GeneField::EyesShape.accepts(8));
        assert!(!GeneField::Animation.accepts(7));
        assert!(GeneField::Special.accepts(9));
        assert!(!GeneField::Special.accepts(10));
    }
}
