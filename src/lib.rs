// ============================================================================
// MAPPER - EXTRACTOR DE LUGARES EN ARTÍCULOS (RUST PURO + MVVM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Geocodificación, marcadores y ubicación del usuario
// - Services: SOLO comunicación con el SDK de Google Maps y el navegador
// - Maps: Instancia única del mapa detrás del trait MapSurface
// - State: State Management con Rc<RefCell>
// ============================================================================

mod config;
mod models;
mod maps;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::IncrementalUpdate;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging (ENABLE_LOGGING=false deja solo warnings y errores)
    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Mapper - Rust Puro + MVVM ({})", CONFIG.environment);

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // El contenedor #map ya existe: arrancar la carga del SDK
    app.start_map();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Aplicar una actualización incremental sobre la app montada.
///
/// No hay re-render completo de respaldo: reconstruir la página destruiría `#map`
/// y el `MapHost` ya inicializado no volvería a montar el mapa.
pub fn rerender_app_with_type(update_type: IncrementalUpdate) {
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => {
            log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", update_type);
            if let Err(e) = app.update_incremental(update_type) {
                log::error!("❌ [UPDATE] {:?} falló: {:?}", update_type, e);
            }
        }
        None => log::warn!("⚠️ [UPDATE] App no está inicializada"),
    });
}
