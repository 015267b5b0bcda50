// ============================================================================
// SERVICES - SOLO comunicación con el exterior (SDK de mapas, navegador)
// ============================================================================

pub mod maps_sdk_service;
pub mod geocoding_service;
pub mod geolocation_service;

pub use maps_sdk_service::*;
pub use geocoding_service::*;
pub use geolocation_service::*;
