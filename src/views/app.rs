// ============================================================================
// APP VIEW - Página completa
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use super::{render_header, render_input_panel, render_map_panel};

/// Acciones que la vista dispara (las implementa App)
#[derive(Clone)]
pub struct PageActions {
    pub on_sample: Rc<dyn Fn()>,
    pub on_locate: Rc<dyn Fn()>,
}

/// Renderizar la página. Se llama una sola vez: después todo es incremental
/// para no destruir el contenedor del mapa.
pub fn render_app(state: &AppState, actions: &PageActions, has_api_key: bool) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("container")
        .child(render_header(state)?)?
        .child(render_input_panel(state, actions, has_api_key)?)?
        .child(render_map_panel(state)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page")
        .child(container)?
        .build())
}
