use std::sync::Arc;

use super::data::SalesDataset;

/// State shared by all handlers.
///
/// The dataset is read-only after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<SalesDataset>,
}

impl AppState {
    pub fn new(dataset: SalesDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
