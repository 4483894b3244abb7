use thiserror::Error;

use iconpick_catalog::FetchError;
use iconpick_core::PickerError;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error("Failed to fetch SVG: {0}")]
    Asset(#[from] FetchError),

    #[error("Host bridge is not running")]
    HostUnavailable,
}
