use serde::{Deserialize, Serialize};

/// Punto geográfico (se serializa como `LatLngLiteral` de Google Maps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Rectángulo envolvente (se serializa como `LatLngBoundsLiteral`)
///
/// No maneja el antimeridiano: la caja siempre va de `west` a `east` sin cruzar 180°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Caja degenerada que contiene un solo punto
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Caja mínima que contiene todos los puntos (None si no hay puntos)
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }
}

#[cfg(test)]
impl LatLngBounds {
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_enclose_all_points() {
        let points = [
            LatLng::new(51.5007, -0.1246),
            LatLng::new(51.5055, -0.0754),
            LatLng::new(51.5033, -0.1196),
        ];
        let bounds = LatLngBounds::from_points(points).unwrap();
        assert!(points.iter().all(|p| bounds.contains(p)));
        assert_eq!(bounds.south, 51.5007);
        assert_eq!(bounds.north, 51.5055);
        assert_eq!(bounds.west, -0.1246);
        assert_eq!(bounds.east, -0.0754);
    }

    #[test]
    fn test_no_points_no_bounds() {
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let point = LatLng::new(48.8584, 2.2945);
        let bounds = LatLngBounds::from_points([point]).unwrap();
        assert_eq!(bounds, LatLngBounds::from_point(point));
        assert_eq!((bounds.south, bounds.west), (bounds.north, bounds.east));
    }

    #[test]
    fn test_point_validation() {
        assert!(LatLng::new(0.0, 0.0).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_bounds_serialize_as_literal() {
        let bounds = LatLngBounds::from_point(LatLng::new(1.0, 2.0));
        let json = serde_json::to_value(bounds).unwrap();
        assert_eq!(json, serde_json::json!({"south": 1.0, "west": 2.0, "north": 1.0, "east": 2.0}));
    }
}
