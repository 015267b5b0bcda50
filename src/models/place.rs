use serde::{Deserialize, Serialize};
use crate::models::LatLng;
use crate::utils::constants::SAMPLE_PLACES;

/// Lugar a geocodificar y mostrar en el mapa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Se rellena solo tras un geocoding exitoso
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
}

impl Place {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            coordinates: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Copia del lugar con las coordenadas resueltas
    pub fn resolved(&self, coordinates: LatLng) -> Self {
        Self {
            coordinates: Some(coordinates),
            ..self.clone()
        }
    }
}

/// Lista de lugares de ejemplo (la extracción desde artículos aún no existe)
pub fn sample_places() -> Vec<Place> {
    SAMPLE_PLACES
        .iter()
        .map(|(name, description)| Place::new(*name).with_description(*description))
        .collect()
}
