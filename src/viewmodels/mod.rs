pub mod map_viewmodel;
pub mod location_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use location_viewmodel::LocationViewModel;
