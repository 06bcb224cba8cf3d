//! Shared application state for all routes. The store is injected so
//! handlers run against an in-memory fake in tests.

use crate::store::BookStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}
