//! CatView — the display surface a genome is projected onto
//!
//! The surface holds only text and colors. It is never the source of
//! truth for the genome; the controller owns that.

use super::Color;
use crate::genome::{GeneField, GENE_COUNT};

/// A display surface for one cat
pub trait CatView {
    /// Show the text of a gene in its numeric field
    fn set_gene(&mut self, field: GeneField, text: &str);

    /// Current text of a gene's numeric field
    fn gene(&self, field: GeneField) -> String;

    /// Paint the swatch for a color gene; `None` clears it
    fn paint(&mut self, field: GeneField, color: Option<&Color>);

    /// Write the body color numeric control
    fn set_body_color_control(&mut self, value: &str);

    fn body_color_control(&self) -> String;

    /// Show a one-line notification (Birth events)
    fn notify(&mut self, text: &str);
}

/// In-memory surface, used by the terminal front-end and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    genes: [String; GENE_COUNT],
    swatches: [Option<Color>; GENE_COUNT],
    body_color_control: String,
    notifications: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swatch(&self, field: GeneField) -> Option<Color> {
        self.swatches[field.index()]
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }

    /// Multi-line dump of every field and swatch
    pub fn describe(&self) -> String {
        GeneField::ALL
            .iter()
            .map(|&f| {
                let swatch = self
                    .swatch(f)
                    .map(|c| format!(" {}", c))
                    .unwrap_or_default();
                format!("{:>24}: {:<2}{}", f.name(), self.genes[f.index()], swatch)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CatView for MemoryView {
    fn set_gene(&mut self, field: GeneField, text: &str) {
        self.genes[field.index()] = text.to_string();
    }

    fn gene(&self, field: GeneField) -> String {
        self.genes[field.index()].clone()
    }

    fn paint(&mut self, field: GeneField, color: Option<&Color>) {
        self.swatches[field.index()] = color.copied();
    }

    fn set_body_color_control(&mut self, value: &str) {
        self.body_color_control = value.to_string();
    }

    fn body_color_control(&self) -> String {
        self.body_color_control.clone()
    }

    fn notify(&mut self, text: &str) {
        self.notifications.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_view_fields() {
        let mut view = MemoryView::new();
        view.set_gene(GeneField::EarsColor, "42");
        view.paint(GeneField::EarsColor, Some(&Color::rgb(1, 2, 3)));
        assert_eq!(view.gene(GeneField::EarsColor), "42");
        assert_eq!(view.gene(GeneField::BodyColor), "");
        assert_eq!(view.swatch(GeneField::EarsColor), Some(Color::rgb(1, 2, 3)));
        view.paint(GeneField::EarsColor, None);
        assert_eq!(view.swatch(GeneField::EarsColor), None);
    }

    #[test]
    fn test_notifications_accumulate() {
        let mut view = MemoryView::new();
        assert!(view.last_notification().is_none());
        view.notify("first");
        view.notify("second");
        assert_eq!(view.notifications().len(), 2);
        assert_eq!(view.last_notification(), Some("second"));
    }
}
