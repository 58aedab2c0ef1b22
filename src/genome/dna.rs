//! Genome — the decoded attribute record of a kitty
//!
//! A genome is a value: produced once (default, random or decoded) and
//! replaced wholesale. Each gene is `Option<u8>`; `None` marks a gene whose
//! digits were missing from a short numeral.

use super::{GeneField, GeneSlices, GENE_COUNT};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits in a well-formed genome numeral
pub const NUMERAL_DIGITS: usize = 16;

/// Random draws are uniform in `[0, NUMERAL_SPACE)`
pub const NUMERAL_SPACE: u64 = 10_000_000_000_000_000;

/// Genome decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenomeError {
    #[error("Gene '{field}' is not a decimal number: {slice:?}")]
    Parse { field: GeneField, slice: String },

    #[error("Genome numeral must have {expected} digits, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("Gene '{field}' out of range: {value}")]
    Range { field: GeneField, value: u8 },
}

/// A kitty genome: ten genes in numeral order
///
/// Serialized as the array of genes; deserializing checks every present
/// gene against its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[Option<u8>; GENE_COUNT]", try_from = "[Option<u8>; GENE_COUNT]")]
pub struct Genome {
    genes: [Option<u8>; GENE_COUNT],
}

impl Default for Genome {
    /// The starter cat shown on page load
    fn default() -> Self {
        Self::from_genes([
            Some(10),
            Some(13),
            Some(96),
            Some(10),
            Some(1),
            Some(1),
            Some(13),
            Some(13),
            Some(1),
            Some(1),
        ])
    }
}

impl Genome {
    pub(crate) fn from_genes(genes: [Option<u8>; GENE_COUNT]) -> Self {
        Self { genes }
    }

    /// Strictly decode a numeral of exactly 16 ASCII digits
    pub fn from_numeral(numeral: &str) -> Result<Self, GenomeError> {
        let actual = numeral.chars().count();
        if actual != NUMERAL_DIGITS {
            return Err(GenomeError::Length {
                expected: NUMERAL_DIGITS,
                actual,
            });
        }
        GeneSlices::of(numeral).parse()
    }

    /// Draw a uniformly random numeral below 10^16, without zero padding
    pub fn random_numeral<R: Rng + ?Sized>(rng: &mut R) -> String {
        rng.gen_range(0..NUMERAL_SPACE).to_string()
    }

    /// Draw a random genome.
    ///
    /// About one draw in ten has fewer than 16 digits; its trailing genes
    /// come back missing rather than as an error.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let numeral = Self::random_numeral(rng);
        // formatted u64, digits only
        GeneSlices::of(&numeral)
            .parse()
            .unwrap_or(Self::from_genes([None; GENE_COUNT]))
    }

    pub fn get(&self, field: GeneField) -> Option<u8> {
        self.genes[field.index()]
    }

    pub fn body_color(&self) -> Option<u8> {
        self.get(GeneField::BodyColor)
    }

    pub fn mouth_color(&self) -> Option<u8> {
        self.get(GeneField::MouthColor)
    }

    pub fn eyes_color(&self) -> Option<u8> {
        self.get(GeneField::EyesColor)
    }

    pub fn ears_color(&self) -> Option<u8> {
        self.get(GeneField::EarsColor)
    }

    pub fn eyes_shape(&self) -> Option<u8> {
        self.get(GeneField::EyesShape)
    }

    pub fn decoration_pattern(&self) -> Option<u8> {
        self.get(GeneField::DecorationPattern)
    }

    pub fn decoration_mid_color(&self) -> Option<u8> {
        self.get(GeneField::DecorationMidColor)
    }

    pub fn decoration_sides_color(&self) -> Option<u8> {
        self.get(GeneField::DecorationSidesColor)
    }

    pub fn animation(&self) -> Option<u8> {
        self.get(GeneField::Animation)
    }

    pub fn special(&self) -> Option<u8> {
        self.get(GeneField::Special)
    }

    /// A new genome with the body color replaced
    pub fn with_body_color(&self, value: u8) -> Self {
        let mut genes = self.genes;
        genes[GeneField::BodyColor.index()] = Some(value);
        Self { genes }
    }

    pub fn is_complete(&self) -> bool {
        self.genes.iter().all(Option::is_some)
    }

    /// Genes lost to a short numeral
    pub fn missing(&self) -> Vec<GeneField> {
        GeneField::ALL
            .iter()
            .copied()
            .filter(|&f| self.get(f).is_none())
            .collect()
    }

    /// The on-screen text of a gene: two digits for colors, one otherwise,
    /// empty when missing
    pub fn display_value(&self, field: GeneField) -> String {
        match self.get(field) {
            None => String::new(),
            Some(v) if field.is_color() => format!("{:02}", v),
            Some(v) => v.to_string(),
        }
    }

    /// Concatenated display values; 16 digits for a complete genome
    pub fn to_numeral(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(GeneField::ALL.iter().map(|&f| self.display_value(f)).collect())
    }

    /// A numeral that decodes back to this genome.
    ///
    /// Differs from `to_numeral` on categorical genes: a displayed `v` comes
    /// from the digit `v - 1`. `None` when a gene is missing or out of range.
    pub fn encode(&self) -> Option<String> {
        GeneField::ALL
            .iter()
            .map(|&f| {
                let v = self.get(f).filter(|&v| f.accepts(v))?;
                Some(match f.cardinality() {
                    Some(_) => (v - 1).to_string(),
                    None => format!("{:0width$}", v, width = f.width()),
                })
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        let genes: Vec<String> = GeneField::ALL
            .iter()
            .map(|&f| {
                let v = self.display_value(f);
                if v.is_empty() { "-".to_string() } else { v }
            })
            .collect();
        format!(
            "Genome [{}] | complete={} | missing={}",
            genes.join(" "),
            self.is_complete(),
            self.missing().len()
        )
    }
}

impl From<Genome> for [Option<u8>; GENE_COUNT] {
    fn from(genome: Genome) -> Self {
        genome.genes
    }
}

impl TryFrom<[Option<u8>; GENE_COUNT]> for Genome {
    type Error = GenomeError;

    fn try_from(genes: [Option<u8>; GENE_COUNT]) -> Result<Self, Self::Error> {
        for (field, gene) in GeneField::ALL.into_iter().zip(genes) {
            if let Some(value) = gene.filter(|&v| !field.accepts(v)) {
                return Err(GenomeError::Range { field, value });
            }
        }
        Ok(Self::from_genes(genes))
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in GeneField::ALL {
            f.write_str(&self.display_value(field))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_genome() {
        let g = Genome::default();
        assert_eq!(g.body_color(), Some(10));
        assert_eq!(g.mouth_color(), Some(13));
        assert_eq!(g.eyes_color(), Some(96));
        assert_eq!(g.ears_color(), Some(10));
        assert_eq!(g.eyes_shape(), Some(1));
        assert_eq!(g.decoration_pattern(), Some(1));
        assert_eq!(g.decoration_mid_color(), Some(13));
        assert_eq!(g.decoration_sides_color(), Some(13));
        assert_eq!(g.animation(), Some(1));
        assert_eq!(g.special(), Some(1));
        assert_eq!(Genome::default(), Genome::default());
    }

    #[test]
    fn test_decode_scenario() {
        let g = Genome::from_numeral("1234567890123456").unwrap();
        println!("{}", g.summary());
        assert_eq!(g.body_color(), Some(12));
        assert_eq!(g.mouth_color(), Some(34));
        assert_eq!(g.eyes_color(), Some(56));
        assert_eq!(g.ears_color(), Some(78));
        assert_eq!(g.eyes_shape(), Some(2));
        assert_eq!(g.decoration_pattern(), Some(1));
        assert_eq!(g.decoration_mid_color(), Some(12));
        assert_eq!(g.decoration_sides_color(), Some(34));
        assert_eq!(g.animation(), Some(6));
        assert_eq!(g.special(), Some(6));
    }

    #[test]
    fn test_strict_length() {
        assert_eq!(
            Genome::from_numeral("123"),
            Err(GenomeError::Length { expected: 16, actual: 3 })
        );
        assert!(Genome::from_numeral("12345678901234567").is_err());
    }

    #[test]
    fn test_to_numeral_keeps_leading_zeros() {
        let g = Genome::from_numeral("0507090011020304").unwrap();
        assert_eq!(g.to_numeral().as_deref(), Some("0507090022020314"));
        assert_eq!(g.to_string(), "0507090022020314");
    }

    #[test]
    fn test_default_numeral() {
        assert_eq!(
            Genome::default().to_numeral().as_deref(),
            Some("1013961011131311")
        );
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let a = Genome::random(&mut StdRng::seed_from_u64(42));
        let b = Genome::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_categorical_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let g = Genome::random(&mut rng);
            if let Some(v) = g.eyes_shape() {
                assert!((1..=8).contains(&v));
            }
            if let Some(v) = g.decoration_pattern() {
                assert!((1..=8).contains(&v));
            }
            if let Some(v) = g.animation() {
                assert!((1..=6).contains(&v));
            }
        }
    }

    #[test]
    fn test_with_body_color_leaves_original() {
        let g = Genome::default();
        let h = g.with_body_color(42);
        assert_eq!(g.body_color(), Some(10));
        assert_eq!(h.body_color(), Some(42));
        assert_eq!(h.mouth_color(), g.mouth_color());
    }

    #[test]
    fn test_missing_genes_display_empty() {
        let g = GeneSlices::of("1234").parse().unwrap();
        assert_eq!(g.missing().len(), 8);
        assert_eq!(g.display_value(GeneField::EyesColor), "");
        assert_eq!(g.to_numeral(), None);
        assert_eq!(g.to_string(), "1234");
    }

    #[test]
    fn test_serde_keeps_missing_genes() {
        let g = GeneSlices::of("12345").parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[12,34,5,null,null,null,null,null,null,null]");
        assert_eq!(serde_json::from_str::<Genome>(&json).unwrap(), g);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_genes() {
        let bad_shape = "[10,13,96,10,9,1,13,13,1,1]";
        assert!(serde_json::from_str::<Genome>(bad_shape).is_err());
        let bad_color = "[100,13,96,10,1,1,13,13,1,1]";
        assert!(serde_json::from_str::<Genome>(bad_color).is_err());
        assert_eq!(
            Genome::try_from([Some(10), Some(13), Some(96), Some(10), Some(1), Some(1), Some(13), Some(13), Some(0), Some(1)]),
            Err(GenomeError::Range { field: GeneField::Animation, value: 0 })
        );
        assert_eq!(
            serde_json::from_str::<Genome>("[10,13,96,10,1,1,13,13,1,1]").unwrap(),
            Genome::default()
        );
    }

    #[test]
    fn test_encode_decodes_back() {
        assert_eq!(Genome::default().encode().as_deref(), Some("1013961000131301"));
        let g = Genome::from_numeral("0507090011020304").unwrap();
        assert_eq!(g.encode().as_deref(), Some("0507090011020304"));

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let g = Genome::random(&mut rng);
            match g.encode() {
                Some(numeral) => assert_eq!(Genome::from_numeral(&numeral), Ok(g)),
                None => assert!(!g.is_complete()),
            }
        }
        assert_eq!(Genome::default().with_body_color(150).encode(), None);
    }
}
