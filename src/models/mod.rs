pub mod geo;
pub mod place;

pub use geo::{LatLng, LatLngBounds};
pub use place::{Place, sample_places};
