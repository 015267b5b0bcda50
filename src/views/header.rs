use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::AppState;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("div")?
        .class("app-title")
        .child(ElementBuilder::new("span")?.class("app-icon").text("📍").build())?
        .child(ElementBuilder::new("h1")?.text(&state.text("app_title")).build())?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .child(ElementBuilder::new("p")?.class("tagline").text(&state.text("tagline")).build())?
        .build())
}
