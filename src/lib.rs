//! Kitties — genome codec, palette renderer and Birth event display
//!
//! A kitty is fully described by a 16-digit decimal genome. This crate
//! decodes and draws genomes, renders them onto a display surface, and
//! shows newly minted kitties announced by the contract's Birth events.

pub mod genome;
pub mod render;
pub mod chain;
pub mod app;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use genome::{GeneField, GeneSlices, Genome, GenomeError};
pub use render::{encode_current_display, CatView, Color, MemoryView, Palette, PaletteError, RenderError, Renderer};
pub use chain::{Address, BirthEvent, BirthFeed, BirthWatcher, LocalChain, Session, Subscription};
pub use app::{AppConfig, Controller};
