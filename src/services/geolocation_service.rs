// ============================================================================
// GEOLOCATION SERVICE - Posición actual vía navigator.geolocation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use js_sys::Reflect;
use crate::dom::window;
use crate::maps::{js_error_message, GeolocationError, LocationProvider};
use crate::models::LatLng;

/// Geolocalización del navegador (consulta única, sin watch)
pub struct BrowserGeolocation;

impl BrowserGeolocation {
    pub fn new() -> Self {
        Self
    }

    fn read_number(target: &JsValue, key: &str) -> Option<f64> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_f64())
    }

    fn position_to_lat_lng(position: &JsValue) -> Result<LatLng, GeolocationError> {
        let coords = Reflect::get(position, &JsValue::from_str("coords"))
            .map_err(|e| GeolocationError::Unknown(js_error_message(&e)))?;
        let lat = Self::read_number(&coords, "latitude");
        let lng = Self::read_number(&coords, "longitude");
        match (lat, lng) {
            (Some(lat), Some(lng)) => Ok(LatLng::new(lat, lng)),
            _ => Err(GeolocationError::PositionUnavailable),
        }
    }

    fn error_from_js(error: &JsValue) -> GeolocationError {
        let code = Self::read_number(error, "code").unwrap_or(0.0) as u16;
        GeolocationError::from_code(code, &js_error_message(error))
    }
}

impl Default for BrowserGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for BrowserGeolocation {
    async fn current_position(&self) -> Result<LatLng, GeolocationError> {
        let geolocation = window()
            .and_then(|w| w.navigator().geolocation().ok())
            .ok_or(GeolocationError::Unsupported)?;

        let mut request_error = None;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
                request_error = Some(e);
            }
        });
        if let Some(e) = request_error {
            return Err(GeolocationError::Unknown(js_error_message(&e)));
        }

        match JsFuture::from(promise).await {
            Ok(position) => Self::position_to_lat_lng(&position),
            Err(error) => Err(Self::error_from_js(&error)),
        }
    }
}
