// ============================================================================
// LOCATION VIEWMODEL - Marcador de "tu ubicación"
// ============================================================================

use crate::maps::{GeolocationError, LocationProvider, MapHost, MapSurface, MarkerIcon, MarkerSpec, PopupContent};
use crate::models::LatLng;
use crate::state::AppState;

pub struct LocationViewModel;

impl LocationViewModel {
    /// Punto azul con popup simple; no participa del ajuste de bounds
    pub fn user_marker(position: LatLng, title: &str) -> MarkerSpec {
        MarkerSpec {
            position,
            title: title.to_string(),
            popup: Some(PopupContent {
                title: title.to_string(),
                body: None,
            }),
            icon: MarkerIcon::UserLocation,
            drop_animation: false,
        }
    }

    /// Consultar la posición del usuario y agregar su marcador.
    /// Un fallo muestra un mensaje de una línea y no toca el mapa.
    pub async fn show_user_location<M, L>(
        state: &AppState,
        host: &MapHost<M>,
        provider: &L,
    ) -> Result<LatLng, GeolocationError>
    where
        M: MapSurface,
        L: LocationProvider,
    {
        let position = match provider.current_position().await {
            Ok(position) => position,
            Err(e) => {
                log::warn!("📍 [LOCATION] {}", e);
                state.set_error(Some(state.text(e.message_key())));
                return Err(e);
            }
        };

        log::info!("📍 [LOCATION] Usuario en ({}, {})", position.lat, position.lng);
        if host.is_ready() {
            let spec = Self::user_marker(position, &state.text("your_location"));
            if let Err(e) = host.add_marker(&spec) {
                log::error!("❌ [LOCATION] No se pudo crear el marcador: {}", e);
            }
        } else {
            log::warn!("⚠️ [LOCATION] Mapa no inicializado, no se agrega marcador");
        }

        Ok(position)
    }
}
