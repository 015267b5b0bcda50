// ============================================================================
// GEOCODING SERVICE - Geocoding directo con google.maps.Geocoder
// ============================================================================

use wasm_bindgen_futures::JsFuture;
use crate::maps::{js_error_message, GeocodeCandidate, Geocoder, MapError};
use crate::utils::google_maps_ffi::{self as gmaps, geocode_address};

/// Geocoder del SDK (requiere el SDK cargado)
pub struct GoogleGeocoder {
    inner: gmaps::Geocoder,
}

impl GoogleGeocoder {
    pub fn new() -> Result<Self, MapError> {
        if !gmaps::is_maps_sdk_loaded() {
            return Err(MapError::NotReady);
        }
        let inner = gmaps::Geocoder::new().map_err(MapError::from_js)?;
        Ok(Self { inner })
    }
}

impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, MapError> {
        let promise = geocode_address(&self.inner, address).map_err(MapError::from_js)?;

        // La Promise se rechaza con el status del servicio (ZERO_RESULTS, OVER_QUERY_LIMIT, ...)
        let value = JsFuture::from(promise).await.map_err(|status| MapError::Geocode {
            address: address.to_string(),
            status: js_error_message(&status),
        })?;

        serde_wasm_bindgen::from_value::<Vec<GeocodeCandidate>>(value)
            .map_err(|e| MapError::Js(e.to_string()))
    }
}
