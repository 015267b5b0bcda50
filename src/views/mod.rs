// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod app;
pub mod header;
pub mod input_panel;
pub mod map_panel;
pub mod results;

pub use app::{render_app, PageActions};
pub use header::render_header;
pub use input_panel::render_input_panel;
pub use map_panel::render_map_panel;
pub use results::render_results;
