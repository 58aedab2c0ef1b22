//! Renderer — writes a genome onto a `CatView`

use super::{CatView, Color, Palette, PaletteError};
use crate::genome::{GeneField, Genome};
use log::debug;

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid body color value: {0:?}")]
    InvalidControl(String),
}

/// Projects genomes through a palette
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resolve one color gene. A missing gene resolves to no color.
    pub fn resolve(&self, genome: &Genome, field: GeneField) -> Result<Option<Color>, PaletteError> {
        genome
            .get(field)
            .map(|index| self.palette.get(index as usize).copied())
            .transpose()
    }

    /// Render a genome.
    ///
    /// Every color gene is resolved before the view is touched, so an
    /// out-of-range index leaves the display as it was.
    pub fn render<V: CatView + ?Sized>(&self, genome: &Genome, view: &mut V) -> Result<(), RenderError> {
        let swatches = GeneField::ALL
            .iter()
            .filter(|f| f.is_color())
            .map(|&f| self.resolve(genome, f).map(|color| (f, color)))
            .collect::<Result<Vec<_>, PaletteError>>()?;

        for (field, color) in &swatches {
            view.paint(*field, color.as_ref());
        }
        for field in GeneField::ALL {
            view.set_gene(field, &genome.display_value(field));
        }
        let body = genome
            .body_color()
            .map(|v| v.to_string())
            .unwrap_or_default();
        view.set_body_color_control(&body);

        debug!("Rendered {}", genome.summary());
        Ok(())
    }

    /// Re-resolve and repaint the body color from a raw control value.
    ///
    /// This is the path taken when the user edits the body color control;
    /// it does not go through `render`.
    pub fn apply_body_color<V: CatView + ?Sized>(&self, raw: &str, view: &mut V) -> Result<u8, RenderError> {
        let value: u8 = raw
            .trim()
            .parse()
            .map_err(|_| RenderError::InvalidControl(raw.to_string()))?;
        let color = *self.palette.get(value as usize)?;
        view.paint(GeneField::BodyColor, Some(&color));
        view.set_gene(GeneField::BodyColor, &format!("{:02}", value));
        debug!("Body color {} -> {}", value, color);
        Ok(value)
    }
}

/// Concatenate the ten displayed gene fields in numeral order.
///
/// No validation: whatever the view shows is what comes back.
pub fn encode_current_display<V: CatView + ?Sized>(view: &V) -> String {
    GeneField::ALL.iter().map(|&f| view.gene(f)).collect()
}
