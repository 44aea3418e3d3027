use std::sync::Arc;

use crate::config::SessionConfig;

/// Shared handler state, generic over the storage backend.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub session: Arc<SessionConfig>,
}

impl<S> AppState<S> {
    pub fn new(store: S, session: SessionConfig) -> Self {
        Self {
            store,
            session: Arc::new(session),
        }
    }
}
