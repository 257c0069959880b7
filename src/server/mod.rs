//! HTTP surface: shared state, routing, and the handlers behind each route.

mod error;
mod handlers;
mod shutdown;

pub use error::{ApiError, ITEM_NOT_FOUND_DETAIL};
pub use handlers::{HealthResponse, MessageResponse, ITEM_DELETED_MESSAGE};
pub use shutdown::shutdown_signal;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::sync::RwLock;

use crate::http_logging::HttpLoggingLayer;
use crate::item::ItemStore;
use handlers::{
    create_item, delete_item, get_item, health, list_items, not_found, root, update_item,
};

/// Prefix under which the item routes are mounted.
pub const API_PREFIX: &str = "/api";

/// State shared by every handler.
///
/// Owns the item store; each router built from a fresh `AppState` starts
/// with an empty collection. Mutations take the write lock for the whole
/// read-modify-write sequence, so id assignment and append are atomic.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ItemStore>>,
    service_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(service_name: &str) -> Self {
        Self {
            store: Arc::new(RwLock::new(ItemStore::new())),
            service_name: Arc::from(service_name),
        }
    }
}

/// Build the application router: liveness routes at the root, item routes
/// under [`API_PREFIX`], and request logging around all of it.
///
/// CORS is layered on by the caller so the allow-list stays configuration.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(API_PREFIX, api)
        .fallback(not_found)
        .with_state(state)
        .layer(HttpLoggingLayer)
}
