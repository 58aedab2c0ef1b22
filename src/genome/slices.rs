//! GeneSlices — positional slicing of a genome numeral
//!
//! Slicing is lenient: a numeral shorter than 16 digits (a small random
//! draw is never zero-padded) yields truncated or empty slices for the
//! trailing genes instead of failing.

use super::{GeneField, Genome, GenomeError, GENE_COUNT};

/// The ten raw substrings of a numeral, in gene order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneSlices<'a> {
    numeral: &'a str,
    slices: [&'a str; GENE_COUNT],
}

impl<'a> GeneSlices<'a> {
    /// Slice a numeral by character position. Never fails.
    pub fn of(numeral: &'a str) -> Self {
        let slices = GeneField::ALL.map(|field| {
            let range = field.range();
            char_slice(numeral, range.start, range.end)
        });
        Self { numeral, slices }
    }

    pub fn numeral(&self) -> &'a str {
        self.numeral
    }

    pub fn get(&self, field: GeneField) -> &'a str {
        self.slices[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneField, &'a str)> + '_ {
        GeneField::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// True when every slice has its full width
    pub fn is_full(&self) -> bool {
        self.iter().all(|(f, s)| s.chars().count() == f.width())
    }

    /// Parse every slice into a gene.
    ///
    /// An empty slice becomes a missing gene. Anything other than ASCII
    /// digits fails with `GenomeError::Parse`. Categorical genes are
    /// reduced modulo their cardinality and shifted to start at 1.
    pub fn parse(&self) -> Result<Genome, GenomeError> {
        let mut genes = [None; GENE_COUNT];
        for (field, slice) in self.iter() {
            genes[field.index()] = parse_gene(field, slice)?;
        }
        Ok(Genome::from_genes(genes))
    }
}

fn parse_gene(field: GeneField, slice: &str) -> Result<Option<u8>, GenomeError> {
    if slice.is_empty() {
        return Ok(None);
    }
    if !slice.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenomeError::Parse {
            field,
            slice: slice.to_string(),
        });
    }
    // at most two ASCII digits, always fits
    let value = slice.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0'));
    Ok(Some(match field.cardinality() {
        Some(n) => value % n + 1,
        None => value,
    }))
}

fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(start)..byte_at(end)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_full_numeral_slices() {
        let slices = GeneSlices::of("1234567890123456");
        assert!(slices.is_full());
        let got: Vec<&str> = slices.iter().map(|(_, s)| s).collect();
        assert_eq!(
            got,
            vec!["12", "34", "56", "78", "9", "0", "12", "34", "5", "6"]
        );
    }

    #[test]
    fn test_short_numeral_truncates_trailing_genes() {
        let slices = GeneSlices::of("12345");
        assert!(!slices.is_full());
        assert_eq!(slices.get(GeneField::BodyColor), "12");
        assert_eq!(slices.get(GeneField::MouthColor), "34");
        assert_eq!(slices.get(GeneField::EyesColor), "5");
        assert_eq!(slices.get(GeneField::EarsColor), "");
        assert_eq!(slices.get(GeneField::Special), "");
    }

    #[test]
    fn test_empty_numeral() {
        let slices = GeneSlices::of("");
        assert!(slices.iter().all(|(_, s)| s.is_empty()));
        let genome = slices.parse().unwrap();
        assert!(GeneField::ALL.iter().all(|&f| genome.get(f).is_none()));
    }

    #[test]
    fn test_slices_match_table_for_random_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let n: u64 = rng.gen_range(0..10_000_000_000_000_000);
            let numeral = n.to_string();
            let slices = GeneSlices::of(&numeral);
            for (field, slice) in slices.iter() {
                let r = field.range();
                let expected = &numeral[r.start.min(numeral.len())..r.end.min(numeral.len())];
                assert_eq!(slice, expected, "{} of {}", field, numeral);
            }
            if n >= 1_000_000_000_000_000 {
                assert!(slices.is_full());
                assert!(slices.parse().unwrap().is_complete());
            }
        }
    }

    #[test]
    fn test_small_draws_are_tolerated() {
        for n in [0u64, 7, 42, 123_456_789, 999_999_999_999_999] {
            let numeral = n.to_string();
            let genome = GeneSlices::of(&numeral).parse().unwrap();
            assert!(!genome.is_complete());
        }
    }

    #[test]
    fn test_non_digit_is_parse_error() {
        let err = GeneSlices::of("12ab567890123456").parse().unwrap_err();
        match err {
            GenomeError::Parse { field, slice } => {
                assert_eq!(field, GeneField::MouthColor);
                assert_eq!(slice, "ab");
            }
            other => panic!("Wrong error: {:?}", other),
        }
        assert!(GeneSlices::of("+234567890123456").parse().is_err());
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let slices = GeneSlices::of("1é34567890123456");
        assert_eq!(slices.get(GeneField::BodyColor), "1é");
        assert!(slices.parse().is_err());
    }

    #[test]
    fn test_categorical_ranges_for_every_digit() {
        for d in 0..10u8 {
            let numeral = format!("00000000{d}{d}0000{d}0");
            let genome = GeneSlices::of(&numeral).parse().unwrap();
            let shape = genome.eyes_shape().unwrap();
            let pattern = genome.decoration_pattern().unwrap();
            let animation = genome.animation().unwrap();
            assert!((1..=8).contains(&shape));
            assert!((1..=8).contains(&pattern));
            assert!((1..=6).contains(&animation));
            assert_eq!(shape, d % 8 + 1);
            assert_eq!(animation, d % 6 + 1);
        }
    }
}
