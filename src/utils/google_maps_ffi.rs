// ============================================================================
// GOOGLE MAPS FFI - Bindings wasm-bindgen para el SDK de Google Maps JS
// ============================================================================
// Solo wrappers para tipos/funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Debug, Clone)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_class = "Map", js_name = fitBounds)]
    pub fn fit_bounds(this: &GoogleMap, bounds: &JsValue);

    #[wasm_bindgen(method, js_class = "Map", js_name = setZoom)]
    pub fn set_zoom(this: &GoogleMap, zoom: f64);

    /// `google.maps.Marker`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    /// `marker.setMap(null)` lo quita del mapa
    #[wasm_bindgen(method, js_class = "Marker", js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);

    #[wasm_bindgen(method, js_class = "Marker", js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &js_sys::Function) -> JsValue;

    /// `google.maps.InfoWindow`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = InfoWindow)]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    pub fn new(options: &JsValue) -> Result<InfoWindow, JsValue>;

    #[wasm_bindgen(method, js_class = "InfoWindow", js_name = open)]
    pub fn open(this: &InfoWindow, map: &GoogleMap, anchor: &Marker);

    /// `google.maps.Size`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Size)]
    #[derive(Debug, Clone)]
    pub type Size;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Size")]
    pub fn new(width: f64, height: f64) -> Size;

    /// `google.maps.Geocoder`
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Geocoder)]
    #[derive(Debug, Clone)]
    pub type Geocoder;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Geocoder")]
    pub fn new() -> Result<Geocoder, JsValue>;
}

// Puente JS: el Geocoder usa callbacks (results, status); lo envolvemos en una
// Promise para conservar el código de status y poder usar JsFuture.
#[wasm_bindgen(inline_js = "
export function isMapsSdkLoaded() {
    return !!(window.google && window.google.maps);
}

export function dropAnimation() {
    return window.google.maps.Animation.DROP;
}

export function geocodeAddress(geocoder, address) {
    return new Promise((resolve, reject) => {
        geocoder.geocode({ address }, (results, status) => {
            if (status === 'OK' && results && results.length > 0) {
                resolve(results.map((r) => ({
                    lat: r.geometry.location.lat(),
                    lng: r.geometry.location.lng(),
                    formatted_address: r.formatted_address || null,
                })));
            } else {
                reject(String(status));
            }
        });
    });
}
")]
extern "C" {
    #[wasm_bindgen(js_name = isMapsSdkLoaded)]
    pub fn is_maps_sdk_loaded() -> bool;

    #[wasm_bindgen(js_name = dropAnimation)]
    pub fn drop_animation() -> JsValue;

    #[wasm_bindgen(catch, js_name = geocodeAddress)]
    pub fn geocode_address(geocoder: &Geocoder, address: &str) -> Result<js_sys::Promise, JsValue>;
}
