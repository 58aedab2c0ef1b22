//! Browser front-end — a DOM-backed `CatView` and the page entry points
//!
//! Element ids follow the page template: `#dnabody` … `#dnaspecial` for the
//! gene fields, `#bodycolor` for the body color control and
//! `#kittyCreation` for Birth notifications.

use crate::app::Controller;
use crate::chain::BirthEvent;
use crate::genome::GeneField;
use crate::render::{CatView, Color, Renderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

fn gene_element_id(field: GeneField) -> &'static str {
    match field {
        GeneField::BodyColor => "dnabody",
        GeneField::MouthColor => "dnamouth",
        GeneField::EyesColor => "dnaeyes",
        GeneField::EarsColor => "dnaears",
        GeneField::EyesShape => "dnashape",
        GeneField::DecorationPattern => "dnadecoration",
        GeneField::DecorationMidColor => "dnadecorationMid",
        GeneField::DecorationSidesColor => "dnadecorationSides",
        GeneField::Animation => "dnadanimation",
        GeneField::Special => "dnaspecial",
    }
}

/// CSS selector of the cat parts painted by a color gene
fn swatch_selector(field: GeneField) -> Option<&'static str> {
    match field {
        GeneField::BodyColor => Some(".cat__head, .cat__chest"),
        GeneField::MouthColor => Some(".cat__mouth-contour, .cat__chest_inner, .cat__tail"),
        GeneField::EyesColor => Some(".cat__eye span"),
        GeneField::EarsColor => Some(".cat__ear--left, .cat__ear--right, .cat__paw-left, .cat__paw-right"),
        GeneField::DecorationMidColor => Some(".cat__head-dots"),
        GeneField::DecorationSidesColor => Some(".cat__head-dots_first, .cat__head-dots_second"),
        _ => None,
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

pub struct DomView {
    document: Document,
}

impl DomView {
    fn body_color_input(&self) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id("bodycolor")
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    }
}

impl CatView for DomView {
    fn set_gene(&mut self, field: GeneField, text: &str) {
        if let Some(el) = self.document.get_element_by_id(gene_element_id(field)) {
            el.set_text_content(Some(text));
        }
    }

    fn gene(&self, field: GeneField) -> String {
        self.document
            .get_element_by_id(gene_element_id(field))
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn paint(&mut self, field: GeneField, color: Option<&Color>) {
        let Some(selector) = swatch_selector(field) else { return };
        let background = color.map(Color::to_hex).unwrap_or_default();
        report((|| -> Result<(), JsValue> {
            let nodes = self.document.query_selector_all(selector)?;
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    el.style().set_property("background", &background)?;
                }
            }
            Ok(())
        })());
    }

    fn set_body_color_control(&mut self, value: &str) {
        if let Some(input) = self.body_color_input() {
            input.set_value(value);
        }
    }

    fn body_color_control(&self) -> String {
        self.body_color_input().map(|i| i.value()).unwrap_or_default()
    }

    fn notify(&mut self, text: &str) {
        let Some(el) = self.document.get_element_by_id("kittyCreation") else { return };
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            report(el.style().set_property("display", "block"));
            el.set_text_content(Some(text));
        }
    }
}

/// The page application, driven from JS event handlers
#[wasm_bindgen]
pub struct KittyApp {
    controller: Controller<DomView>,
}

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl KittyApp {
    /// Call once the document is ready; renders the default cat
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<KittyApp, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let controller = Controller::new(Renderer::default(), DomView { document }).map_err(to_js)?;
        Ok(Self { controller })
    }

    #[wasm_bindgen(js_name = defaultCat)]
    pub fn default_cat(&mut self) -> Result<(), JsValue> {
        self.controller.default_cat().map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = randomCat)]
    pub fn random_cat(&mut self) -> Result<(), JsValue> {
        self.controller
            .random_cat(&mut rand::thread_rng())
            .map(|_| ())
            .map_err(to_js)
    }

    /// Bind to the `change` event of `#bodycolor`
    #[wasm_bindgen(js_name = onBodyColorChange)]
    pub fn on_body_color_change(&mut self) -> Result<u8, JsValue> {
        self.controller.on_body_color_changed().map_err(to_js)
    }

    #[wasm_bindgen(js_name = getDna)]
    pub fn dna(&self) -> String {
        self.controller.dna()
    }

    /// Show a Birth event; pass `JSON.stringify(event.returnValues)`.
    ///
    /// In the browser the wallet and the `Birth` subscription live on the
    /// JS side (the injected provider); only the display happens here.
    #[wasm_bindgen(js_name = showBirth)]
    pub fn show_birth(&mut self, return_values: &str) -> Result<(), JsValue> {
        let event: BirthEvent = serde_json::from_str(return_values).map_err(to_js)?;
        self.controller.view_mut().notify(&event.notification());
        Ok(())
    }
}
