//! Application state shared across handlers

use std::sync::Arc;

use crate::store::RegistryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn RegistryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn RegistryStore {
        self.inner.store.as_ref()
    }
}
