//! Iconpick Core - Icon model, filtering, pagination and the plugin protocol.
//!
//! Everything in this crate is synchronous and free of I/O. Fetching and the
//! host document live in `iconpick-catalog` and `iconpick-host`.

pub mod asset;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod icon;
pub mod message;
pub mod pagination;
pub mod picker;
pub mod style;
pub mod trigger;
pub mod validation;

// Re-exports for convenience
pub use asset::AssetUrls;
pub use debounce::Debouncer;
pub use error::{PickerError, ValidationError};
pub use filter::{FilterState, SourceFilter};
pub use icon::{IconMeta, IconSource};
pub use message::PluginMessage;
pub use pagination::Paginator;
pub use picker::{LoadStatus, PickerState, PreviewRequest, RenderedCell, DEFAULT_PAGE_SIZE};
pub use style::{MaterialStyle, StyleOptions};
pub use trigger::OneShot;
pub use validation::Validator;
