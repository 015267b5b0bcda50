use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use crate::config::MapConfig;
use crate::models::{LatLng, LatLngBounds};

/// Superficie de mapa concreta (Google Maps en web, fakes en tests)
pub trait MapSurface: Sized {
    /// Elemento donde se monta el mapa
    type Container: ?Sized;
    /// Handle de un marcador creado en el mapa
    type Marker;

    /// Construir el mapa dentro del contenedor
    fn create(container: &Self::Container, options: &MapOptions) -> Result<Self, MapError>;

    /// Crear un marcador (con popup opcional al hacer click)
    fn add_marker(&self, spec: &MarkerSpec) -> Result<Self::Marker, MapError>;

    /// Quitar un marcador del mapa
    fn remove_marker(&self, marker: &Self::Marker);

    /// Ajustar la vista para contener el rectángulo
    fn fit_bounds(&self, bounds: &LatLngBounds);

    fn set_zoom(&self, zoom: f64);
}

/// Geocoding directo: texto libre -> candidatos (en el orden del servicio)
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, MapError>;
}

/// Posición actual del usuario (una sola consulta)
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<LatLng, GeolocationError>;
}

/// Candidato devuelto por el geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

impl GeocodeCandidate {
    pub fn location(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Opciones de construcción del mapa (se serializan a `MapOptions` de Google)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub map_type_control: bool,
    pub street_view_control: bool,
    pub fullscreen_control: bool,
}

impl MapOptions {
    /// Vista mundial por defecto
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: config.default_center(),
            zoom: config.default_zoom,
            map_type_control: true,
            street_view_control: false,
            fullscreen_control: true,
        }
    }
}

/// Qué dibujar para un marcador
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    pub title: String,
    pub popup: Option<PopupContent>,
    pub icon: MarkerIcon,
    pub drop_animation: bool,
}

/// Contenido del InfoWindow
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerIcon {
    /// Pin estándar de Google
    Default,
    /// Punto azul de "tu ubicación"
    UserLocation,
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    MissingApiKey,
    SdkLoadFailed(String),
    NotReady,
    Geocode { address: String, status: String },
    NoResults(String),
    Js(String),
}

impl MapError {
    /// Convertir un error JS a texto legible
    pub fn from_js(value: JsValue) -> Self {
        MapError::Js(js_error_message(&value))
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingApiKey => write!(f, "Google Maps API key not configured"),
            MapError::SdkLoadFailed(msg) => write!(f, "Failed to load Google Maps: {}", msg),
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::Geocode { address, status } => write!(f, "Geocoding failed for {} ({})", address, status),
            MapError::NoResults(address) => write!(f, "Geocoding returned no results for {}", address),
            MapError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

impl From<MapError> for JsValue {
    fn from(error: MapError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Error de geolocalización (códigos de `GeolocationPositionError`)
#[derive(Debug, Clone, PartialEq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown(String),
}

impl GeolocationError {
    pub fn from_code(code: u16, message: &str) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::PositionUnavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unknown(message.to_string()),
        }
    }

    /// Clave i18n del mensaje a mostrar
    pub fn message_key(&self) -> &'static str {
        match self {
            GeolocationError::Unsupported => "error_geolocation_unsupported",
            _ => "error_geolocation",
        }
    }
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeolocationError::Unsupported => write!(f, "Geolocation is not supported by this browser"),
            GeolocationError::PermissionDenied => write!(f, "Location permission denied"),
            GeolocationError::PositionUnavailable => write!(f, "Position unavailable"),
            GeolocationError::Timeout => write!(f, "Location request timed out"),
            GeolocationError::Unknown(msg) => write!(f, "Unknown geolocation error: {}", msg),
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Mensaje legible de un JsValue (string, Error o cualquier otro valor)
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
