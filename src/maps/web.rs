use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use crate::dom::ElementBuilder;
use crate::models::LatLngBounds;
use crate::utils::constants::{USER_LOCATION_ICON_SIZE, USER_LOCATION_ICON_SVG};
use crate::utils::google_maps_ffi::{self as gmaps, GoogleMap, InfoWindow, Marker};
use super::{MapError, MapOptions, MapSurface, MarkerIcon, MarkerSpec, PopupContent};

/// Renderizador de mapas para web usando Google Maps JavaScript API
pub struct GoogleMapSurface {
    map: GoogleMap,
}

impl GoogleMapSurface {
    fn marker_options(&self, spec: &MarkerSpec) -> Result<js_sys::Object, MapError> {
        let options = js_sys::Object::new();
        set_prop(&options, "position", &to_js(&spec.position)?)?;
        set_prop(&options, "map", &self.map)?;
        set_prop(&options, "title", &JsValue::from_str(&spec.title))?;

        if spec.drop_animation {
            set_prop(&options, "animation", &gmaps::drop_animation())?;
        }

        if spec.icon == MarkerIcon::UserLocation {
            let icon = js_sys::Object::new();
            let url = format!(
                "data:image/svg+xml;charset=UTF-8,{}",
                String::from(js_sys::encode_uri_component(USER_LOCATION_ICON_SVG))
            );
            set_prop(&icon, "url", &JsValue::from_str(&url))?;
            let size = gmaps::Size::new(USER_LOCATION_ICON_SIZE, USER_LOCATION_ICON_SIZE);
            set_prop(&icon, "scaledSize", &size)?;
            set_prop(&options, "icon", &icon)?;
        }

        Ok(options)
    }

    /// Abrir el InfoWindow al hacer click en el marcador
    fn attach_popup(&self, marker: &Marker, popup: &PopupContent) -> Result<(), MapError> {
        let content = render_popup(popup)?;
        let options = js_sys::Object::new();
        set_prop(&options, "content", &content)?;
        let info_window = InfoWindow::new(&options).map_err(MapError::from_js)?;

        let map = self.map.clone();
        let anchor = marker.clone();
        let closure = Closure::wrap(Box::new(move || {
            info_window.open(&map, &anchor);
        }) as Box<dyn FnMut()>);
        marker.add_listener("click", closure.as_ref().unchecked_ref());
        // El listener vive lo mismo que el marcador en el SDK
        closure.forget();
        Ok(())
    }
}

impl MapSurface for GoogleMapSurface {
    type Container = web_sys::Element;
    type Marker = Marker;

    fn create(container: &web_sys::Element, options: &MapOptions) -> Result<Self, MapError> {
        if !gmaps::is_maps_sdk_loaded() {
            return Err(MapError::NotReady);
        }
        let js_options = to_js(options)?;
        let map = GoogleMap::new(container, &js_options).map_err(MapError::from_js)?;
        Ok(Self { map })
    }

    fn add_marker(&self, spec: &MarkerSpec) -> Result<Marker, MapError> {
        let options = self.marker_options(spec)?;
        let marker = Marker::new(&options).map_err(MapError::from_js)?;

        if let Some(popup) = &spec.popup {
            self.attach_popup(&marker, popup)?;
        }

        log::debug!("📍 [MAP] Marcador '{}' en ({}, {})", spec.title, spec.position.lat, spec.position.lng);
        Ok(marker)
    }

    fn remove_marker(&self, marker: &Marker) {
        marker.set_map(&JsValue::NULL);
    }

    fn fit_bounds(&self, bounds: &LatLngBounds) {
        match to_js(bounds) {
            Ok(literal) => self.map.fit_bounds(&literal),
            Err(e) => log::error!("❌ [MAP] No se pudo serializar bounds: {}", e),
        }
    }

    fn set_zoom(&self, zoom: f64) {
        self.map.set_zoom(zoom);
    }
}

/// Contenido del popup: título + descripción opcional (texto, nunca HTML)
fn render_popup(popup: &PopupContent) -> Result<web_sys::Element, MapError> {
    let title = ElementBuilder::new("h3")
        .map_err(MapError::from_js)?
        .attr("style", "margin: 0 0 8px 0; font-size: 16px; font-weight: bold;")
        .map_err(MapError::from_js)?
        .text(&popup.title)
        .build();

    let mut container = ElementBuilder::new("div")
        .map_err(MapError::from_js)?
        .attr("style", "padding: 8px; max-width: 200px;")
        .map_err(MapError::from_js)?
        .child(title)
        .map_err(MapError::from_js)?;

    if let Some(body) = &popup.body {
        let paragraph = ElementBuilder::new("p")
            .map_err(MapError::from_js)?
            .attr("style", "margin: 0; font-size: 14px; color: #666;")
            .map_err(MapError::from_js)?
            .text(body)
            .build();
        container = container.child(paragraph).map_err(MapError::from_js)?;
    }

    Ok(container.build())
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Js(e.to_string()))
}

fn set_prop(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(MapError::from_js)
}
