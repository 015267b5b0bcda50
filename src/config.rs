use serde::{Deserialize, Serialize};
use crate::models::LatLng;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub google_maps_api_key: Option<String>,
    pub language: Option<String>,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            google_maps_api_key: None,
            language: None,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Zoom fijo cuando solo se resuelve un lugar (fitBounds sobre un punto hace zoom máximo)
    pub single_place_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 20.0,
            default_center_lng: 0.0,
            default_zoom: 2.0,
            single_place_zoom: 15.0,
        }
    }
}

impl MapConfig {
    pub fn default_center(&self) -> LatLng {
        LatLng::new(self.default_center_lat, self.default_center_lng)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "GOOGLE_MAPS_API_KEY" => option_env!("GOOGLE_MAPS_API_KEY"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "APP_LANGUAGE" => option_env!("APP_LANGUAGE"),
            "DEFAULT_MAP_CENTER_LAT" => option_env!("DEFAULT_MAP_CENTER_LAT"),
            "DEFAULT_MAP_CENTER_LNG" => option_env!("DEFAULT_MAP_CENTER_LNG"),
            "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
            "SINGLE_PLACE_ZOOM" => option_env!("SINGLE_PLACE_ZOOM"),
            _ => None,
        })
    }

    /// Construye la configuración a partir de una función de búsqueda de claves.
    /// Valores vacíos o no parseables caen al valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = MapConfig::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };
        let parse_f64 = |key: &str, default: f64| {
            non_empty(key)
                .and_then(|value| value.parse::<f64>().ok())
                .filter(|value| value.is_finite())
                .unwrap_or(default)
        };

        Self {
            environment: non_empty("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: non_empty("ENABLE_LOGGING")
                .and_then(|value| value.parse().ok())
                .unwrap_or(true),
            google_maps_api_key: non_empty("GOOGLE_MAPS_API_KEY").map(str::to_string),
            language: non_empty("APP_LANGUAGE").map(|lang| lang.to_uppercase()),
            map_config: MapConfig {
                default_center_lat: parse_f64("DEFAULT_MAP_CENTER_LAT", defaults.default_center_lat),
                default_center_lng: parse_f64("DEFAULT_MAP_CENTER_LNG", defaults.default_center_lng),
                default_zoom: parse_f64("DEFAULT_MAP_ZOOM", defaults.default_zoom),
                single_place_zoom: parse_f64("SINGLE_PLACE_ZOOM", defaults.single_place_zoom),
            },
        }
    }

    /// Obtiene la API key de Google Maps (None si no está configurada)
    pub fn api_key(&self) -> Option<&str> {
        self.google_maps_api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.google_maps_api_key.is_some()
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
