use uc_db::UserStore;

use std::sync::Arc;

/// Shared state for the REST handlers.
///
/// The store is injected at construction; handlers never know which
/// implementation sits behind it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
