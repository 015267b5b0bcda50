// ============================================================================
// MAPS SDK SERVICE - Carga del script de Google Maps (una sola vez por página)
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;
use crate::dom::{create_element, head};
use crate::maps::{js_error_message, MapError};
use crate::utils::constants::{GOOGLE_MAPS_LIBRARIES, GOOGLE_MAPS_SCRIPT_URL};
use crate::utils::google_maps_ffi::is_maps_sdk_loaded;

thread_local! {
    static LOAD_ATTEMPTED: Cell<bool> = const { Cell::new(false) };
}

/// Servicio de carga del SDK - stateless salvo el guard de "un intento por página"
pub struct MapsSdkService;

impl MapsSdkService {
    /// URL del script con la key y las librerías
    pub fn script_url(api_key: &str) -> String {
        format!(
            "{}?key={}&libraries={}",
            GOOGLE_MAPS_SCRIPT_URL, api_key, GOOGLE_MAPS_LIBRARIES
        )
    }

    /// Cargar el SDK. Si `google.maps` ya existe no inyecta nada.
    pub async fn load(api_key: &str) -> Result<(), MapError> {
        if api_key.trim().is_empty() {
            return Err(MapError::MissingApiKey);
        }

        if is_maps_sdk_loaded() {
            log::info!("🗺️ [SDK] Google Maps ya presente, se omite la carga");
            return Ok(());
        }

        if LOAD_ATTEMPTED.with(|attempted| attempted.replace(true)) {
            log::warn!("⚠️ [SDK] La carga ya se intentó en esta página");
            return Err(MapError::SdkLoadFailed("load already attempted".to_string()));
        }

        let script: HtmlScriptElement = create_element("script")
            .and_then(|element| element.dyn_into::<HtmlScriptElement>().map_err(JsValue::from))
            .map_err(MapError::from_js)?;
        script.set_src(&Self::script_url(api_key));
        script.set_async(true);

        // onload/onerror resuelven la Promise directamente
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        let head = head().ok_or_else(|| MapError::SdkLoadFailed("no <head> element".to_string()))?;
        head.append_child(&script).map_err(MapError::from_js)?;
        log::info!("📥 [SDK] Script de Google Maps inyectado");

        JsFuture::from(promise)
            .await
            .map_err(|e| MapError::SdkLoadFailed(js_error_message(&e)))?;

        if !is_maps_sdk_loaded() {
            return Err(MapError::SdkLoadFailed("google.maps not available after load".to_string()));
        }

        log::info!("✅ [SDK] Google Maps cargado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_url_includes_key_and_libraries() {
        assert_eq!(
            MapsSdkService::script_url("KEY123"),
            "https://maps.googleapis.com/maps/api/js?key=KEY123&libraries=places,geometry"
        );
    }

    #[test]
    fn test_blank_key_is_rejected_before_touching_the_page() {
        let result = futures::executor::block_on(MapsSdkService::load("  "));
        assert_eq!(result, Err(MapError::MissingApiKey));
    }
}
