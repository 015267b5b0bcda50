/// ID del contenedor raíz de la app en index.html
pub const APP_ROOT_ID: &str = "app";

/// ID del contenedor del mapa
pub const MAP_CONTAINER_ID: &str = "map";

/// URL base del SDK de Google Maps JavaScript
pub const GOOGLE_MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

/// Librerías adicionales que se cargan con el SDK
pub const GOOGLE_MAPS_LIBRARIES: &str = "places,geometry";

/// Lugares de ejemplo: (nombre, descripción)
pub const SAMPLE_PLACES: &[(&str, &str)] = &[
    ("Big Ben, London", "Famous clock tower"),
    ("Tower Bridge, London", "Iconic bridge"),
    ("London Eye, London", "Giant observation wheel"),
];

/// Icono del marcador de ubicación del usuario (punto azul)
pub const USER_LOCATION_ICON_SVG: &str = r#"<svg fill="blue" height="24" viewBox="0 0 24 24" width="24" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="8"/><circle cx="12" cy="12" r="3" fill="white"/></svg>"#;

/// Tamaño en píxeles del icono de ubicación
pub const USER_LOCATION_ICON_SIZE: f64 = 24.0;

/// Placeholder del input de URL (extracción desde artículos todavía deshabilitada)
pub const ARTICLE_URL_PLACEHOLDER: &str = "https://example.com/best-restaurants-london";
