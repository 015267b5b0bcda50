// ============================================================================
// MAP VIEWMODEL - Geocodificar lugares y colocarlos en el mapa
// ============================================================================
// Lógica pura sobre los traits de maps: sin DOM, sin SDK
// ============================================================================

use crate::config::AppConfig;
use crate::maps::{Geocoder, MapError, MapHost, MapSurface, MarkerIcon, MarkerSpec, PopupContent};
use crate::models::{LatLng, Place};
use crate::state::{AppState, MapStatus};

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Estado inicial del mapa según la configuración
    pub fn initial_status(config: &AppConfig) -> MapStatus {
        if config.has_api_key() {
            MapStatus::Loading
        } else {
            MapStatus::MissingApiKey
        }
    }

    /// Marcador de un lugar resuelto: pin con animación y popup nombre/descripción
    pub fn place_marker(place: &Place, position: LatLng) -> MarkerSpec {
        MarkerSpec {
            position,
            title: place.name.clone(),
            popup: Some(PopupContent {
                title: place.name.clone(),
                body: place.description.clone(),
            }),
            icon: MarkerIcon::Default,
            drop_animation: true,
        }
    }

    /// Geocodifica cada lugar en orden (uno a la vez) y coloca un marcador por éxito.
    ///
    /// Los fallos individuales se loguean y se saltan. Los marcadores previos dejan de
    /// rastrearse al empezar pero siguen visibles: se quitan cuando se crea el primer
    /// marcador nuevo, y si no se crea ninguno vuelven a rastrearse sin tocar el mapa.
    /// Devuelve los lugares resueltos en el orden de entrada.
    pub async fn geocode_and_mark<M, G>(
        host: &MapHost<M>,
        geocoder: &G,
        places: &[Place],
    ) -> Result<Vec<Place>, MapError>
    where
        M: MapSurface,
        G: Geocoder,
    {
        if !host.is_ready() {
            return Err(MapError::NotReady);
        }

        log::info!("🔎 [GEOCODE] Geocodificando {} lugares", places.len());
        let mut resolved = Vec::new();
        let mut points = Vec::new();
        let mut previous = Some(host.take_markers());

        for place in places {
            let location = match Self::geocode_first(geocoder, &place.name).await {
                Ok(location) => location,
                Err(e) => {
                    log::warn!("⚠️ [GEOCODE] Failed to geocode {}: {}", place.name, e);
                    continue;
                }
            };

            if let Err(e) = host.add_marker(&Self::place_marker(place, location)) {
                log::warn!("⚠️ [GEOCODE] No se pudo crear el marcador de {}: {}", place.name, e);
                continue;
            }

            if let Some(old) = previous.take() {
                host.remove_markers(old);
            }

            points.push(location);
            resolved.push(place.resolved(location));
        }

        if let Some(old) = previous {
            host.restore_markers(old);
        }

        if !resolved.is_empty() {
            host.fit_to_points(&points)?;
        }

        log::info!(
            "✅ [GEOCODE] {}/{} lugares resueltos, {} marcadores en el mapa",
            resolved.len(),
            places.len(),
            host.marker_count()
        );
        Ok(resolved)
    }

    /// Primer candidato, sin desambiguar
    async fn geocode_first<G: Geocoder>(geocoder: &G, address: &str) -> Result<LatLng, MapError> {
        let candidates = geocoder.geocode(address).await?;
        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| MapError::NoResults(address.to_string()))?;
        let location = first.location();
        if let Some(formatted) = &first.formatted_address {
            log::debug!("🔎 [GEOCODE] {} -> {}", address, formatted);
        }
        if !location.is_valid() {
            return Err(MapError::Geocode {
                address: address.to_string(),
                status: "INVALID_LOCATION".to_string(),
            });
        }
        Ok(location)
    }

    /// Acción "Test Sample": corre el pipeline y actualiza el estado de la página.
    /// La lista de resultados solo se reemplaza si hubo al menos un éxito.
    pub async fn extract_places<M, G>(
        state: &AppState,
        host: &MapHost<M>,
        geocoder: &G,
        places: Vec<Place>,
    ) where
        M: MapSurface,
        G: Geocoder,
    {
        if state.is_loading() {
            log::warn!("⚠️ [EXTRACT] Ya hay una extracción en curso");
            return;
        }

        state.set_loading(true);
        match Self::geocode_and_mark(host, geocoder, &places).await {
            Ok(resolved) if !resolved.is_empty() => state.set_places(resolved),
            Ok(_) => log::warn!("⚠️ [EXTRACT] Ningún lugar pudo geocodificarse"),
            Err(e) => {
                log::error!("❌ [EXTRACT] {}", e);
                state.set_error(Some(state.text("error_sample")));
            }
        }
        state.set_loading(false);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fake::FakeGeocoder;
    use futures::executor::block_on;
    use crate::maps::host::fake::{ready_host, FakeSurface};
    use crate::models::sample_places;

    fn names(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_all_london_places_are_marked_in_order() {
        let host = ready_host();
        let geocoder = FakeGeocoder::london();
        let places = sample_places();

        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &places)).unwrap();

        assert_eq!(names(&resolved), vec!["Big Ben, London", "Tower Bridge, London", "London Eye, London"]);
        assert!(resolved.iter().all(|p| p.coordinates.is_some()));
        assert_eq!(host.marker_count(), 3);

        let bounds = host.fake_surface().last_fit().unwrap();
        assert!(resolved.iter().all(|p| bounds.contains(&p.coordinates.unwrap())));
        assert_eq!(host.fake_surface().last_zoom(), None);
    }

    #[test]
    fn test_geocoding_is_sequential_and_uses_first_candidate() {
        let host = ready_host();
        let geocoder = FakeGeocoder::london();
        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &sample_places())).unwrap();

        assert_eq!(
            *geocoder.requests.borrow(),
            vec!["Big Ben, London", "Tower Bridge, London", "London Eye, London"]
        );
        assert_eq!(resolved[0].coordinates, Some(LatLng::new(51.5007, -0.1246)));
    }

    #[test]
    fn test_partial_failure_skips_only_failed_places() {
        let host = ready_host();
        let geocoder = FakeGeocoder::with(&[
            ("Big Ben, London", 51.5007, -0.1246),
            ("London Eye, London", 51.5033, -0.1196),
        ]);
        let places = sample_places();

        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &places)).unwrap();

        assert_eq!(names(&resolved), vec!["Big Ben, London", "London Eye, London"]);
        assert_eq!(host.marker_count(), 2);
        assert!(resolved.len() <= places.len());
        assert!(resolved.iter().all(|r| places.iter().any(|p| p.name == r.name)));
    }

    #[test]
    fn test_single_success_uses_fixed_zoom() {
        let host = ready_host();
        let geocoder = FakeGeocoder::with(&[("Tower Bridge, London", 51.5055, -0.0754)]);

        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &sample_places())).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(host.fake_surface().last_zoom(), Some(15.0));
    }

    #[test]
    fn test_all_failures_leave_markers_untouched() {
        let host = ready_host();
        block_on(MapViewModel::geocode_and_mark(&host, &FakeGeocoder::london(), &sample_places())).unwrap();
        let calls_before = host.fake_surface().calls.borrow().len();

        let nowhere = vec![Place::new("Atlantis"), Place::new("El Dorado")];
        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &FakeGeocoder::london(), &nowhere)).unwrap();

        assert!(resolved.is_empty());
        assert_eq!(host.marker_count(), 3);
        assert_eq!(host.fake_surface().calls.borrow().len(), calls_before);
    }

    #[test]
    fn test_rejected_marker_keeps_previous_markers_and_results() {
        let state = AppState::new("EN");
        let host = ready_host();
        let geocoder = FakeGeocoder::london();
        block_on(MapViewModel::extract_places(&state, &host, &geocoder, sample_places()));
        assert_eq!(state.places().len(), 3);

        host.fake_surface().reject_next.set(1);
        block_on(MapViewModel::extract_places(&state, &host, &geocoder, vec![Place::new("Big Ben, London")]));

        assert_eq!(state.places().len(), 3);
        assert_eq!(host.marker_count(), 3);
        assert_eq!(
            host.fake_surface().visible_titles(),
            vec!["Big Ben, London", "Tower Bridge, London", "London Eye, London"]
        );

        // La siguiente corrida sí reemplaza los tres
        block_on(MapViewModel::extract_places(&state, &host, &geocoder, vec![Place::new("London Eye, London")]));
        assert_eq!(host.marker_count(), 1);
        assert_eq!(host.fake_surface().visible_titles(), vec!["London Eye, London"]);
    }

    #[test]
    fn test_previous_markers_cleared_by_first_created_marker() {
        let host = ready_host();
        let geocoder = FakeGeocoder::london();
        block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &sample_places())).unwrap();

        host.fake_surface().reject_next.set(1);
        let resolved = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &sample_places())).unwrap();

        assert_eq!(names(&resolved), vec!["Tower Bridge, London", "London Eye, London"]);
        assert_eq!(host.marker_count(), 2);
        assert_eq!(
            host.fake_surface().visible_titles(),
            vec!["Tower Bridge, London", "London Eye, London"]
        );
    }

    #[test]
    fn test_new_run_replaces_previous_markers() {
        let host = ready_host();
        block_on(MapViewModel::geocode_and_mark(&host, &FakeGeocoder::london(), &sample_places())).unwrap();

        let only_big_ben = vec![Place::new("Big Ben, London")];
        block_on(MapViewModel::geocode_and_mark(&host, &FakeGeocoder::london(), &only_big_ben)).unwrap();

        assert_eq!(host.marker_count(), 1);
        assert_eq!(host.fake_surface().visible_titles(), vec!["Big Ben, London"]);
    }

    #[test]
    fn test_marker_popup_shows_name_and_description() {
        let place = Place::new("Big Ben, London").with_description("Famous clock tower");
        let spec = MapViewModel::place_marker(&place, LatLng::new(51.5007, -0.1246));
        assert_eq!(spec.title, "Big Ben, London");
        assert!(spec.drop_animation);
        assert_eq!(
            spec.popup,
            Some(PopupContent {
                title: "Big Ben, London".to_string(),
                body: Some("Famous clock tower".to_string()),
            })
        );
    }

    #[test]
    fn test_map_not_ready_makes_no_geocode_calls() {
        let host: MapHost<FakeSurface> = MapHost::new(15.0);
        let geocoder = FakeGeocoder::london();

        let result = block_on(MapViewModel::geocode_and_mark(&host, &geocoder, &sample_places()));

        assert_eq!(result, Err(MapError::NotReady));
        assert!(geocoder.requests.borrow().is_empty());
    }

    #[test]
    fn test_extract_places_updates_results() {
        let state = AppState::new("EN");
        state.set_map_status(MapStatus::Ready);
        let host = ready_host();

        block_on(MapViewModel::extract_places(&state, &host, &FakeGeocoder::london(), sample_places()));

        assert_eq!(state.places().len(), 3);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_extract_places_all_failures_keep_previous_results() {
        let state = AppState::new("EN");
        let host = ready_host();
        block_on(MapViewModel::extract_places(&state, &host, &FakeGeocoder::london(), sample_places()));
        let before = state.places();

        block_on(MapViewModel::extract_places(&state, &host, &FakeGeocoder::default(), sample_places()));

        assert_eq!(state.places(), before);
        assert_eq!(host.marker_count(), 3);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_extract_places_without_map_shows_error() {
        let state = AppState::new("EN");
        let host: MapHost<FakeSurface> = MapHost::new(15.0);

        block_on(MapViewModel::extract_places(&state, &host, &FakeGeocoder::london(), sample_places()));

        assert_eq!(state.error().as_deref(), Some("Failed to load sample places"));
        assert!(state.places().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_initial_status_without_key_waits_for_credential() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(MapViewModel::initial_status(&config), MapStatus::MissingApiKey);

        let config = AppConfig::from_lookup(|key| (key == "GOOGLE_MAPS_API_KEY").then_some("k"));
        assert_eq!(MapViewModel::initial_status(&config), MapStatus::Loading);
    }
}
