use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{set_hidden, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::MAP_CONTAINER_ID;
use super::render_results;

pub const MAP_PLACEHOLDER_ID: &str = "map-placeholder";
pub const MAP_PLACEHOLDER_TEXT_ID: &str = "map-placeholder-text";

/// Contenedor del mapa + placeholder superpuesto + resumen de resultados
pub fn render_map_panel(state: &AppState) -> Result<Element, JsValue> {
    let map = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("map")
        .build();

    let stage = ElementBuilder::new("div")?
        .class("map-stage")
        .child(map)?
        .child(render_placeholder(state)?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("map-panel")
        .child(stage)?
        .child(render_results(state)?)?
        .build())
}

fn render_placeholder(state: &AppState) -> Result<Element, JsValue> {
    let status = state.map_status();
    let text = status.placeholder_key().map(|key| state.text(key)).unwrap_or_default();

    let placeholder = ElementBuilder::new("div")?
        .id(MAP_PLACEHOLDER_ID)?
        .class("map-placeholder")
        .child(ElementBuilder::new("span")?.class("placeholder-icon").text("🌍").build())?
        .child(ElementBuilder::new("p")?.id(MAP_PLACEHOLDER_TEXT_ID)?.text(&text).build())?
        .build();
    set_hidden(&placeholder, status.is_ready())?;
    Ok(placeholder)
}
