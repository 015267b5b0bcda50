// ============================================================================
// MAP HOST - Dueño único de la instancia del mapa y de sus marcadores
// ============================================================================

use std::cell::{OnceCell, RefCell};
use crate::models::{LatLng, LatLngBounds};
use super::{MapError, MapOptions, MapSurface, MarkerSpec};

/// Instancia única del mapa por página + lista de marcadores rastreados.
/// Todos los métodos usan `&self`: se comparte vía `Rc` desde el hilo de UI.
pub struct MapHost<M: MapSurface> {
    surface: OnceCell<M>,
    markers: RefCell<Vec<M::Marker>>,
    single_place_zoom: f64,
}

impl<M: MapSurface> MapHost<M> {
    pub fn new(single_place_zoom: f64) -> Self {
        Self {
            surface: OnceCell::new(),
            markers: RefCell::new(Vec::new()),
            single_place_zoom,
        }
    }

    /// Construir el mapa. Si ya existe una instancia no hace nada y devuelve `Ok(false)`.
    pub fn initialize(&self, container: &M::Container, options: &MapOptions) -> Result<bool, MapError> {
        if self.surface.get().is_some() {
            log::info!("🗺️ [MAP] Mapa ya inicializado, se ignora");
            return Ok(false);
        }

        let surface = M::create(container, options)?;
        if self.surface.set(surface).is_err() {
            return Ok(false);
        }
        log::info!("✅ [MAP] Mapa creado (centro {:?}, zoom {})", options.center, options.zoom);
        Ok(true)
    }

    pub fn is_ready(&self) -> bool {
        self.surface.get().is_some()
    }

    fn surface(&self) -> Result<&M, MapError> {
        self.surface.get().ok_or(MapError::NotReady)
    }

    /// Crear y rastrear un marcador
    pub fn add_marker(&self, spec: &MarkerSpec) -> Result<(), MapError> {
        let marker = self.surface()?.add_marker(spec)?;
        self.markers.borrow_mut().push(marker);
        Ok(())
    }

    /// Dejar de rastrear los marcadores actuales sin quitarlos del mapa
    pub fn take_markers(&self) -> Vec<M::Marker> {
        std::mem::take(&mut *self.markers.borrow_mut())
    }

    /// Volver a rastrear marcadores sacados con `take_markers` (quedan antes que los nuevos)
    pub fn restore_markers(&self, mut markers: Vec<M::Marker>) {
        if markers.is_empty() {
            return;
        }
        let mut tracked = self.markers.borrow_mut();
        markers.append(&mut tracked);
        *tracked = markers;
    }

    /// Quitar del mapa marcadores ya sacados del rastreo. Seguro con la lista vacía.
    pub fn remove_markers(&self, markers: Vec<M::Marker>) {
        if markers.is_empty() {
            return;
        }
        if let Some(surface) = self.surface.get() {
            for marker in &markers {
                surface.remove_marker(marker);
            }
        }
        log::info!("🧹 [MAP] {} marcadores eliminados", markers.len());
    }

    pub fn marker_count(&self) -> usize {
        self.markers.borrow().len()
    }

    /// Ajustar la vista a los puntos. Con un único punto se usa un zoom fijo cercano.
    pub fn fit_to_points(&self, points: &[LatLng]) -> Result<(), MapError> {
        let surface = self.surface()?;
        let Some(bounds) = LatLngBounds::from_points(points.iter().copied()) else {
            return Ok(());
        };

        surface.fit_bounds(&bounds);
        if points.len() == 1 {
            surface.set_zoom(self.single_place_zoom);
        }
        log::info!("🎯 [MAP] Vista ajustada a {} puntos", points.len());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};
    use crate::config::MapConfig;
    use crate::maps::{MapError, MapHost, MapOptions, MapSurface, MarkerSpec};
    use crate::models::LatLngBounds;

    /// Llamadas registradas por la superficie falsa
    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceCall {
        AddMarker(String),
        RemoveMarker(usize),
        FitBounds(LatLngBounds),
        SetZoom(f64),
    }

    #[derive(Default)]
    pub struct FakeSurface {
        pub calls: RefCell<Vec<SurfaceCall>>,
        pub visible: RefCell<Vec<(usize, MarkerSpec)>>,
        /// Cantidad de marcadores siguientes que el SDK rechaza
        pub reject_next: Cell<usize>,
        next_id: Cell<usize>,
    }

    impl FakeSurface {
        pub fn visible_titles(&self) -> Vec<String> {
            self.visible.borrow().iter().map(|(_, spec)| spec.title.clone()).collect()
        }

        pub fn last_fit(&self) -> Option<LatLngBounds> {
            self.calls.borrow().iter().rev().find_map(|call| match call {
                SurfaceCall::FitBounds(bounds) => Some(*bounds),
                _ => None,
            })
        }

        pub fn last_zoom(&self) -> Option<f64> {
            self.calls.borrow().iter().rev().find_map(|call| match call {
                SurfaceCall::SetZoom(zoom) => Some(*zoom),
                _ => None,
            })
        }
    }

    impl MapHost<FakeSurface> {
        pub(crate) fn fake_surface(&self) -> &FakeSurface {
            self.surface.get().expect("mapa inicializado")
        }
    }

    /// Host con el mapa ya construido (zoom de un solo lugar = 15)
    pub(crate) fn ready_host() -> MapHost<FakeSurface> {
        let host = MapHost::new(15.0);
        host.initialize("map", &MapOptions::from_config(&MapConfig::default()))
            .expect("init");
        host
    }

    impl MapSurface for FakeSurface {
        type Container = str;
        type Marker = usize;

        fn create(_container: &str, _options: &MapOptions) -> Result<Self, MapError> {
            Ok(Self::default())
        }

        fn add_marker(&self, spec: &MarkerSpec) -> Result<usize, MapError> {
            let rejections = self.reject_next.get();
            if rejections > 0 {
                self.reject_next.set(rejections - 1);
                return Err(MapError::Js("Marker constructor failed".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.calls.borrow_mut().push(SurfaceCall::AddMarker(spec.title.clone()));
            self.visible.borrow_mut().push((id, spec.clone()));
            Ok(id)
        }

        fn remove_marker(&self, marker: &usize) {
            self.calls.borrow_mut().push(SurfaceCall::RemoveMarker(*marker));
            self.visible.borrow_mut().retain(|(id, _)| id != marker);
        }

        fn fit_bounds(&self, bounds: &LatLngBounds) {
            self.calls.borrow_mut().push(SurfaceCall::FitBounds(*bounds));
        }

        fn set_zoom(&self, zoom: f64) {
            self.calls.borrow_mut().push(SurfaceCall::SetZoom(zoom));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::fake::{ready_host, FakeSurface, SurfaceCall};
    use crate::config::MapConfig;
    use crate::maps::MarkerIcon;

    fn pin(title: &str, lat: f64, lng: f64) -> MarkerSpec {
        MarkerSpec {
            position: LatLng::new(lat, lng),
            title: title.to_string(),
            popup: None,
            icon: MarkerIcon::Default,
            drop_animation: false,
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let host: MapHost<FakeSurface> = MapHost::new(15.0);
        let options = MapOptions::from_config(&MapConfig::default());
        assert!(!host.is_ready());
        assert_eq!(host.initialize("map", &options), Ok(true));
        assert_eq!(host.initialize("map", &options), Ok(false));
        assert!(host.is_ready());
    }

    #[test]
    fn test_marker_before_map_is_not_ready() {
        let host: MapHost<FakeSurface> = MapHost::new(15.0);
        assert_eq!(host.add_marker(&pin("a", 0.0, 0.0)), Err(MapError::NotReady));
        assert_eq!(host.fit_to_points(&[LatLng::new(0.0, 0.0)]), Err(MapError::NotReady));
        host.remove_markers(host.take_markers());
    }

    #[test]
    fn test_taken_markers_stay_visible_until_removed() {
        let host = ready_host();
        host.add_marker(&pin("a", 1.0, 1.0)).unwrap();
        host.add_marker(&pin("b", 2.0, 2.0)).unwrap();

        let previous = host.take_markers();
        assert_eq!(host.marker_count(), 0);
        assert_eq!(host.fake_surface().visible_titles(), vec!["a", "b"]);

        host.remove_markers(previous);
        assert!(host.fake_surface().visible_titles().is_empty());

        // Lista vacía: sin efectos
        let calls_before = host.fake_surface().calls.borrow().len();
        host.remove_markers(host.take_markers());
        assert_eq!(host.fake_surface().calls.borrow().len(), calls_before);
    }

    #[test]
    fn test_restored_markers_keep_their_order() {
        let host = ready_host();
        host.add_marker(&pin("a", 1.0, 1.0)).unwrap();
        let previous = host.take_markers();
        host.add_marker(&pin("b", 2.0, 2.0)).unwrap();

        host.restore_markers(previous);
        assert_eq!(host.marker_count(), 2);

        host.remove_markers(host.take_markers());
        assert_eq!(
            *host.fake_surface().calls.borrow(),
            vec![
                SurfaceCall::AddMarker("a".to_string()),
                SurfaceCall::AddMarker("b".to_string()),
                SurfaceCall::RemoveMarker(0),
                SurfaceCall::RemoveMarker(1),
            ]
        );
    }

    #[test]
    fn test_single_point_uses_fixed_zoom() {
        let host = ready_host();
        host.fit_to_points(&[LatLng::new(51.5007, -0.1246)]).unwrap();
        assert_eq!(host.fake_surface().last_zoom(), Some(15.0));
    }

    #[test]
    fn test_many_points_fit_bounds_without_zoom() {
        let host = ready_host();
        let points = [LatLng::new(51.5007, -0.1246), LatLng::new(51.5055, -0.0754)];
        host.fit_to_points(&points).unwrap();
        let surface = host.fake_surface();
        let bounds = surface.last_fit().unwrap();
        assert!(points.iter().all(|p| bounds.contains(p)));
        assert_eq!(surface.last_zoom(), None);
    }

    #[test]
    fn test_empty_points_is_noop() {
        let host = ready_host();
        host.fit_to_points(&[]).unwrap();
        assert!(host.fake_surface().calls.borrow().is_empty());
        assert!(!host.fake_surface().calls.borrow().contains(&SurfaceCall::SetZoom(15.0)));
    }
}
