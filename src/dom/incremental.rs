// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron. El contenedor del mapa
// nunca se vuelve a crear (Google Maps vive dentro de él).
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, set_attribute, set_disabled, set_hidden, set_text_content};
use crate::state::AppState;
use crate::views::input_panel::{sample_button_label, ERROR_BANNER_ID, LOCATE_BUTTON_ID, SAMPLE_BUTTON_ID};
use crate::views::map_panel::{MAP_PLACEHOLDER_ID, MAP_PLACEHOLDER_TEXT_ID};
use crate::views::results::{fill_results, RESULTS_ID};

/// Botones de acción: disabled + texto "Loading..."
pub fn update_actions(state: &AppState) -> Result<(), JsValue> {
    let disabled = !state.actions_enabled();

    if let Some(button) = get_element_by_id(SAMPLE_BUTTON_ID) {
        set_disabled(&button, disabled)?;
        set_text_content(&button, &sample_button_label(state));
    } else {
        log::warn!("⚠️ [UPDATE_ACTIONS] #{} no encontrado en el DOM", SAMPLE_BUTTON_ID);
    }

    if let Some(button) = get_element_by_id(LOCATE_BUTTON_ID) {
        set_disabled(&button, disabled)?;
    }

    Ok(())
}

/// Banner de error: visible solo con mensaje
pub fn update_error_banner(state: &AppState) -> Result<(), JsValue> {
    let Some(banner) = get_element_by_id(ERROR_BANNER_ID) else {
        return Err(JsValue::from_str("#error-banner not found in DOM"));
    };

    match state.error() {
        Some(message) => {
            set_text_content(&banner, &format!("⚠️ {}", message));
            set_hidden(&banner, false)
        }
        None => set_hidden(&banner, true),
    }
}

/// Placeholder del mapa según MapStatus
pub fn update_map_placeholder(state: &AppState) -> Result<(), JsValue> {
    let status = state.map_status();
    let Some(placeholder) = get_element_by_id(MAP_PLACEHOLDER_ID) else {
        return Err(JsValue::from_str("#map-placeholder not found in DOM"));
    };

    if let Some(reason) = status.failure_reason() {
        set_attribute(&placeholder, "title", reason)?;
    }

    match status.placeholder_key() {
        Some(key) => {
            if let Some(text) = get_element_by_id(MAP_PLACEHOLDER_TEXT_ID) {
                set_text_content(&text, &state.text(key));
            }
            set_hidden(&placeholder, false)
        }
        None => set_hidden(&placeholder, true),
    }
}

/// Re-renderizar solo el resumen de resultados
pub fn update_results(state: &AppState) -> Result<(), JsValue> {
    let Some(results) = get_element_by_id(RESULTS_ID) else {
        return Err(JsValue::from_str("#results not found in DOM"));
    };
    fill_results(&results, state)
}
