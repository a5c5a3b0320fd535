//! API server state

use crate::items::ItemService;
use crate::store::StoreConnector;

/// API server state, cloned into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub items: ItemService,
}

impl AppState {
    pub fn new(store: StoreConnector) -> Self {
        Self {
            items: ItemService::new(store),
        }
    }

    pub fn store(&self) -> &StoreConnector {
        self.items.store()
    }
}
