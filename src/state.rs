use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::KeyValueStore;

/// Shared handler state.
///
/// The link service is type-erased over its backend so the same router
/// serves Redis in production and test doubles in integration tests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn KeyValueStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
        }
    }
}
