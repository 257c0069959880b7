use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use super::status::MessageResponse;
use crate::item::{Item, ItemCreate};
use crate::server::{ApiError, AppState};

/// Acknowledgment returned by a successful delete.
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

pub(in crate::server) async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

pub(in crate::server) async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

pub(in crate::server) async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemCreate>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(fields) = payload?;
    let item = state.store.write().await.create(fields)?;
    info!(item.id = item.id, "Created item");
    Ok(Json(item))
}

pub(in crate::server) async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ItemCreate>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(fields) = payload?;
    let item = state.store.write().await.update(id, fields)?;
    info!(item.id = id, "Updated item");
    Ok(Json(item))
}

pub(in crate::server) async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.store.write().await.delete(id)?;
    info!(item.id = id, "Deleted item");
    Ok(Json(MessageResponse {
        message: ITEM_DELETED_MESSAGE.to_string(),
    }))
}
