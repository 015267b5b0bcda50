// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, navigator_language};
use crate::dom::incremental::{update_actions, update_error_banner, update_map_placeholder, update_results};
use crate::maps::{GoogleMapSurface, MapError, MapHost, MapOptions};
use crate::models::sample_places;
use crate::services::{BrowserGeolocation, GoogleGeocoder, MapsSdkService};
use crate::state::app_state::{AppState, IncrementalUpdate, MapStatus};
use crate::utils::constants::{APP_ROOT_ID, MAP_CONTAINER_ID};
use crate::utils::i18n::resolve_language;
use crate::viewmodels::{LocationViewModel, MapViewModel};
use crate::views::{render_app, PageActions};

/// Aplicación principal
pub struct App {
    state: AppState,
    host: Rc<MapHost<GoogleMapSurface>>,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let language = resolve_language(CONFIG.language.as_deref(), navigator_language().as_deref());
        let state = AppState::new(language);
        let host = Rc::new(MapHost::new(CONFIG.map_config.single_place_zoom));

        // Batchear updates: se aplican en el siguiente tick
        state.subscribe_to_changes(|update| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            }).forget();
        });

        log::info!("🌐 [APP] Idioma: {} | API key configurada: {}", language, CONFIG.has_api_key());

        Ok(Self { state, host, root })
    }

    /// Renderizar aplicación completa (solo al arrancar: contiene `#map`)
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.state, &self.actions(), CONFIG.has_api_key())?;
        append_child(&self.root, &view)?;
        log::info!("✅ [APP] Página renderizada");
        Ok(())
    }

    fn actions(&self) -> PageActions {
        let sample_state = self.state.clone();
        let sample_host = self.host.clone();
        let locate_state = self.state.clone();
        let locate_host = self.host.clone();

        PageActions {
            on_sample: Rc::new(move || Self::run_sample(sample_state.clone(), sample_host.clone())),
            on_locate: Rc::new(move || Self::locate_user(locate_state.clone(), locate_host.clone())),
        }
    }

    /// Cargar el SDK y construir el mapa. Sin API key la página queda esperando.
    pub fn start_map(&self) {
        let state = self.state.clone();
        state.set_map_status(MapViewModel::initial_status(&CONFIG));

        let Some(api_key) = CONFIG.api_key().map(str::to_string) else {
            log::warn!("🔑 [APP] GOOGLE_MAPS_API_KEY no configurada");
            state.set_error(Some(state.text("error_api_key_missing")));
            return;
        };

        let host = self.host.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match MapsSdkService::load(&api_key).await {
                Ok(()) => Self::mount_map(&host),
                Err(e) => Err(e),
            };

            match result {
                Ok(_) => state.set_map_status(MapStatus::Ready),
                Err(e) => {
                    log::error!("❌ [APP] {}", e);
                    state.set_map_status(MapStatus::Failed(e.to_string()));
                    state.set_error(Some(state.text("error_sdk_load")));
                }
            }
        });
    }

    fn mount_map(host: &MapHost<GoogleMapSurface>) -> Result<bool, MapError> {
        let container = get_element_by_id(MAP_CONTAINER_ID).ok_or(MapError::NotReady)?;
        host.initialize(&container, &MapOptions::from_config(&CONFIG.map_config))
    }

    fn run_sample(state: AppState, host: Rc<MapHost<GoogleMapSurface>>) {
        if !state.actions_enabled() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let geocoder = match GoogleGeocoder::new() {
                Ok(geocoder) => geocoder,
                Err(e) => {
                    log::error!("❌ [APP] Geocoder no disponible: {}", e);
                    state.set_error(Some(state.text("error_sample")));
                    return;
                }
            };
            MapViewModel::extract_places(&state, &*host, &geocoder, sample_places()).await;
        });
    }

    fn locate_user(state: AppState, host: Rc<MapHost<GoogleMapSurface>>) {
        if !state.actions_enabled() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let provider = BrowserGeolocation::new();
            let _ = LocationViewModel::show_user_location(&state, &*host, &provider).await;
        });
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Actions => update_actions(&self.state),
            IncrementalUpdate::ErrorBanner => update_error_banner(&self.state),
            IncrementalUpdate::MapPlaceholder => update_map_placeholder(&self.state),
            IncrementalUpdate::Results => update_results(&self.state),
        }
    }
}
