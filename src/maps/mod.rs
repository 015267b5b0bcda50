// Módulo de mapas: trait común + implementación Google Maps para web

pub mod traits;
pub mod host;
pub mod web;

pub use traits::*;
pub use host::MapHost;
pub use web::GoogleMapSurface;
