//! Rendering — projecting a genome onto a display surface
//!
//! The palette turns color genes into concrete colors, the `CatView` trait
//! abstracts the surface (DOM, terminal, memory), and the `Renderer`
//! writes a genome onto it.

mod palette;
mod view;
mod renderer;

pub use palette::{Color, Palette, PaletteError, BUILTIN_PALETTE_SIZE};
pub use view::{CatView, MemoryView};
pub use renderer::{encode_current_display, RenderError, Renderer};
