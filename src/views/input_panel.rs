// ============================================================================
// INPUT PANEL - URL (deshabilitada), botones de acción, errores y aviso de key
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{on_click, on_input, set_disabled, set_hidden, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::ARTICLE_URL_PLACEHOLDER;
use super::PageActions;

pub const SAMPLE_BUTTON_ID: &str = "btn-sample";
pub const LOCATE_BUTTON_ID: &str = "btn-locate";
pub const ERROR_BANNER_ID: &str = "error-banner";

pub fn render_input_panel(state: &AppState, actions: &PageActions, has_api_key: bool) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("section")?
        .class("input-panel")
        .child(render_controls(state, actions)?)?
        .child(render_error_banner(state)?)?;

    let notice = if has_api_key {
        None
    } else {
        Some(render_api_key_notice(state)?)
    };

    Ok(panel.child_opt(notice)?.build())
}

fn render_controls(state: &AppState, actions: &PageActions) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id("article-url")?
        .attr("type", "url")?
        .attr("placeholder", ARTICLE_URL_PLACEHOLDER)?
        .attr("value", &state.article_url.borrow())?
        .build();
    // Extracción desde artículos todavía no implementada
    set_disabled(&input, true)?;
    {
        let state = state.clone();
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                state.set_article_url(target.value());
            }
        })?;
    }

    let url_field = ElementBuilder::new("div")?
        .class("url-field")
        .child(ElementBuilder::new("label")?.attr("for", "article-url")?.text(&state.text("url_label")).build())?
        .child(input)?
        .build();

    let sample_button = ElementBuilder::new("button")?
        .id(SAMPLE_BUTTON_ID)?
        .class("btn btn-primary")
        .text(&sample_button_label(state))
        .build();
    set_disabled(&sample_button, !state.actions_enabled())?;
    {
        let on_sample = actions.on_sample.clone();
        on_click(&sample_button, move |_| on_sample())?;
    }

    let locate_button = ElementBuilder::new("button")?
        .id(LOCATE_BUTTON_ID)?
        .class("btn btn-secondary")
        .text(&format!("📍 {}", state.text("my_location")))
        .build();
    set_disabled(&locate_button, !state.actions_enabled())?;
    {
        let on_locate = actions.on_locate.clone();
        on_click(&locate_button, move |_| on_locate())?;
    }

    let buttons = ElementBuilder::new("div")?
        .class("actions")
        .child(sample_button)?
        .child(locate_button)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("controls")
        .child(url_field)?
        .child(buttons)?
        .build())
}

/// "⏳ Loading..." mientras hay extracción en curso
pub fn sample_button_label(state: &AppState) -> String {
    if state.is_loading() {
        format!("⏳ {}", state.text("loading"))
    } else {
        format!("🌍 {}", state.text("test_sample"))
    }
}

pub fn render_error_banner(state: &AppState) -> Result<Element, JsValue> {
    let error = state.error();
    let banner = ElementBuilder::new("div")?
        .id(ERROR_BANNER_ID)?
        .class("error-banner")
        .text(&format!("⚠️ {}", error.as_deref().unwrap_or_default()))
        .build();
    set_hidden(&banner, error.is_none())?;
    Ok(banner)
}

fn render_api_key_notice(state: &AppState) -> Result<Element, JsValue> {
    let paragraph = ElementBuilder::new("p")?
        .child(ElementBuilder::new("strong")?.text(&state.text("next_step")).build())?
        .build();
    paragraph.append_with_str_1(&format!(" {}", state.text("add_api_key")))?;

    Ok(ElementBuilder::new("div")?
        .id("api-key-notice")?
        .class("notice")
        .child(paragraph)?
        .build())
}
