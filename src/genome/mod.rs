//! Genome — the 16-digit DNA of a kitty
//!
//! A genome numeral is sliced positionally into ten genes: four colors,
//! two categorical cattributes, two decoration colors, an animation id
//! and a trailing special digit.

mod field;
mod slices;
mod dna;

pub use field::{GeneField, GENE_COUNT};
pub use slices::GeneSlices;
pub use dna::{Genome, GenomeError, NUMERAL_DIGITS, NUMERAL_SPACE};
