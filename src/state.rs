use std::sync::Arc;

use iconpick_catalog::AssetFetcher;
use iconpick_host::HeadlessDocument;

use crate::controller::PickerController;

/// Application state shared across handlers.
pub struct AppState<F: AssetFetcher> {
    pub controller: Arc<PickerController<F>>,
    pub document: Arc<HeadlessDocument>,
}

impl<F: AssetFetcher> AppState<F> {
    pub fn new(controller: Arc<PickerController<F>>, document: Arc<HeadlessDocument>) -> Self {
        Self {
            controller,
            document,
        }
    }
}

impl<F: AssetFetcher> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            document: Arc::clone(&self.document),
        }
    }
}
