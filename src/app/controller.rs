//! Controller — owns the current genome and keeps the view in sync
//!
//! The genome held here is the source of truth. The view is only ever
//! written from it, and a genome is committed only after it rendered.

use crate::genome::Genome;
use crate::render::{encode_current_display, CatView, RenderError, Renderer};
use log::{info, warn};
use rand::Rng;

pub struct Controller<V: CatView> {
    renderer: Renderer,
    view: V,
    genome: Genome,
}

impl<V: CatView> Controller<V> {
    /// Build the controller and render the default cat (page load)
    pub fn new(renderer: Renderer, view: V) -> Result<Self, RenderError> {
        let mut controller = Self {
            renderer,
            view,
            genome: Genome::default(),
        };
        controller.default_cat()?;
        Ok(controller)
    }

    /// "Default cat" action
    pub fn default_cat(&mut self) -> Result<&Genome, RenderError> {
        self.show(Genome::default())?;
        Ok(&self.genome)
    }

    /// "Random cat" action.
    ///
    /// Short draws render with their missing genes left blank.
    pub fn random_cat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Genome, RenderError> {
        let genome = Genome::random(rng);
        if !genome.is_complete() {
            warn!("Random draw is short, missing genes: {:?}", genome.missing());
        }
        self.show(genome)?;
        Ok(&self.genome)
    }

    /// Render `genome` and make it current. On failure the previous genome
    /// and display stay in place.
    pub fn show(&mut self, genome: Genome) -> Result<(), RenderError> {
        self.renderer.render(&genome, &mut self.view)?;
        info!("Showing {}", genome.summary());
        self.genome = genome;
        Ok(())
    }

    /// React to an edit of the body color control
    pub fn on_body_color_changed(&mut self) -> Result<u8, RenderError> {
        let raw = self.view.body_color_control();
        let value = self.renderer.apply_body_color(&raw, &mut self.view)?;
        self.genome = self.genome.with_body_color(value);
        Ok(value)
    }

    /// Type `raw` into the body color control, then react to the edit
    pub fn set_body_color(&mut self, raw: &str) -> Result<u8, RenderError> {
        self.view.set_body_color_control(raw);
        self.on_body_color_changed()
    }

    /// The displayed genes, concatenated
    pub fn dna(&self) -> String {
        encode_current_display(&self.view)
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
