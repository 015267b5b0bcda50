// ============================================================================
// APP STATE - Estado global de la página
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Place;
use crate::utils::i18n::t;

/// Actualización incremental del DOM. La página se renderiza completa una sola vez
/// al arrancar; después solo se tocan estos elementos.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Botones "Test Sample" / "My Location" (disabled + texto de carga)
    Actions,
    /// Banner de error
    ErrorBanner,
    /// Placeholder encima del mapa
    MapPlaceholder,
    /// Resumen de lugares encontrados
    Results,
}

/// Estado de la superficie del mapa
#[derive(Clone, Debug, PartialEq)]
pub enum MapStatus {
    Idle,
    /// Sin API key: terminal hasta recargar la página
    MissingApiKey,
    Loading,
    Ready,
    /// Falló la carga del SDK o la construcción del mapa: terminal
    Failed(String),
}

impl MapStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapStatus::Ready)
    }

    /// Clave i18n del texto del placeholder (None cuando el mapa es visible)
    pub fn placeholder_key(&self) -> Option<&'static str> {
        match self {
            MapStatus::Ready => None,
            MapStatus::MissingApiKey => Some("waiting_api_key"),
            MapStatus::Failed(_) => Some("error_sdk_load"),
            MapStatus::Idle | MapStatus::Loading => Some("loading_maps"),
        }
    }

    /// Detalle técnico del fallo de carga (para el tooltip del placeholder)
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            MapStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Fase implícita de la página
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagePhase {
    Idle,
    MapLoading,
    MapReady,
    Extracting,
    MarkersPlaced,
    Error,
}

type ChangeSubscriber = Rc<dyn Fn(IncrementalUpdate)>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub map_status: Rc<RefCell<MapStatus>>,
    /// Extracción en curso (deshabilita los botones)
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    /// Solo lugares geocodificados con éxito, en el orden de entrada
    pub places: Rc<RefCell<Vec<Place>>>,
    /// Input de URL (deshabilitado hasta que exista la extracción de artículos)
    pub article_url: Rc<RefCell<String>>,
    pub language: Rc<RefCell<String>>,

    pub change_subscribers: Rc<RefCell<Vec<ChangeSubscriber>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(language: &str) -> Self {
        Self {
            map_status: Rc::new(RefCell::new(MapStatus::Idle)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            places: Rc::new(RefCell::new(Vec::new())),
            article_url: Rc::new(RefCell::new(String::new())),
            language: Rc::new(RefCell::new(language.to_string())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(IncrementalUpdate) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self, update: IncrementalUpdate) {
        let subscribers: Vec<ChangeSubscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update);
        }
    }

    /// Texto traducido en el idioma actual
    pub fn text(&self, key: &str) -> String {
        t(key, &self.language.borrow())
    }

    pub fn map_status(&self) -> MapStatus {
        self.map_status.borrow().clone()
    }

    pub fn set_map_status(&self, status: MapStatus) {
        let before = self.phase();
        *self.map_status.borrow_mut() = status;
        log::info!("🗺️ [STATE] Fase: {:?} -> {:?}", before, self.phase());
        self.notify(IncrementalUpdate::MapPlaceholder);
        self.notify(IncrementalUpdate::Actions);
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.notify(IncrementalUpdate::Actions);
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        if let Some(message) = &error {
            log::warn!("⚠️ [STATE] Error visible: {}", message);
        }
        *self.error.borrow_mut() = error;
        self.notify(IncrementalUpdate::ErrorBanner);
    }

    pub fn places(&self) -> Vec<Place> {
        self.places.borrow().clone()
    }

    pub fn set_places(&self, places: Vec<Place>) {
        *self.places.borrow_mut() = places;
        self.notify(IncrementalUpdate::Results);
    }

    pub fn set_article_url(&self, url: String) {
        *self.article_url.borrow_mut() = url;
    }

    /// Los botones de acción solo funcionan con el mapa listo y sin extracción en curso
    pub fn actions_enabled(&self) -> bool {
        matches!(self.phase(), PagePhase::MapReady | PagePhase::MarkersPlaced)
    }

    pub fn phase(&self) -> PagePhase {
        match &*self.map_status.borrow() {
            MapStatus::Idle => PagePhase::Idle,
            MapStatus::Loading => PagePhase::MapLoading,
            MapStatus::MissingApiKey | MapStatus::Failed(_) => PagePhase::Error,
            MapStatus::Ready if self.is_loading() => PagePhase::Extracting,
            MapStatus::Ready if !self.places.borrow().is_empty() => PagePhase::MarkersPlaced,
            MapStatus::Ready => PagePhase::MapReady,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_follow_the_page_lifecycle() {
        let state = AppState::new("EN");
        assert_eq!(state.phase(), PagePhase::Idle);

        state.set_map_status(MapStatus::Loading);
        assert_eq!(state.phase(), PagePhase::MapLoading);
        assert!(!state.actions_enabled());

        state.set_map_status(MapStatus::Ready);
        assert_eq!(state.phase(), PagePhase::MapReady);
        assert!(state.actions_enabled());

        state.set_loading(true);
        assert_eq!(state.phase(), PagePhase::Extracting);
        assert!(!state.actions_enabled());

        state.set_places(vec![Place::new("Big Ben, London")]);
        state.set_loading(false);
        assert_eq!(state.phase(), PagePhase::MarkersPlaced);
    }

    #[test]
    fn test_terminal_errors() {
        let state = AppState::new("EN");
        state.set_map_status(MapStatus::MissingApiKey);
        assert_eq!(state.phase(), PagePhase::Error);
        assert_eq!(state.map_status().placeholder_key(), Some("waiting_api_key"));

        state.set_map_status(MapStatus::Failed("script error".to_string()));
        assert_eq!(state.phase(), PagePhase::Error);
        assert_eq!(state.map_status().failure_reason(), Some("script error"));
        assert!(!state.actions_enabled());
    }

    #[test]
    fn test_placeholder_hidden_when_ready() {
        assert_eq!(MapStatus::Ready.placeholder_key(), None);
        assert_eq!(MapStatus::Loading.placeholder_key(), Some("loading_maps"));
        assert_eq!(MapStatus::Loading.failure_reason(), None);
    }

    #[test]
    fn test_subscribers_receive_specific_updates() {
        let state = AppState::new("EN");
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        state.subscribe_to_changes(move |update| sink.borrow_mut().push(update));

        state.set_error(Some("boom".to_string()));
        state.set_places(Vec::new());

        assert_eq!(
            *received.borrow(),
            vec![IncrementalUpdate::ErrorBanner, IncrementalUpdate::Results]
        );
    }

    #[test]
    fn test_text_uses_state_language() {
        let state = AppState::new("ES");
        assert_eq!(state.text("my_location"), "Mi ubicación");
    }
}
