use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{set_hidden, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::found_places_label;

pub const RESULTS_ID: &str = "results";

/// Resumen "Found N places:" (oculto mientras no haya resultados)
pub fn render_results(state: &AppState) -> Result<Element, JsValue> {
    let results = ElementBuilder::new("div")?
        .id(RESULTS_ID)?
        .class("results")
        .build();
    fill_results(&results, state)?;
    Ok(results)
}

/// Contenido interno del resumen (lo reutiliza la actualización incremental)
pub fn render_results_content(state: &AppState) -> Result<Vec<Element>, JsValue> {
    let places = state.places();
    let title = ElementBuilder::new("h3")?
        .text(&found_places_label(places.len(), &state.language.borrow()))
        .build();

    let mut chips = ElementBuilder::new("div")?.class("chips");
    for place in &places {
        chips = chips.child(ElementBuilder::new("span")?.class("chip").text(&place.name).build())?;
    }

    Ok(vec![title, chips.build()])
}

pub fn fill_results(container: &Element, state: &AppState) -> Result<(), JsValue> {
    container.set_inner_html("");
    for child in render_results_content(state)? {
        container.append_child(&child)?;
    }
    set_hidden(container, state.places.borrow().is_empty())
}
