pub mod config;
pub mod controller;
pub mod error;
pub mod routes;
pub mod state;
pub mod view;

pub use config::{Config, ConfigError};
pub use controller::PickerController;
pub use error::PanelError;
pub use routes::create_router;
pub use state::AppState;
pub use view::{CellView, PanelStatus, PanelView, SelectionView};
