//! Datastore API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::Document;
use crate::AppState;

/// GET /api/datastore - The whole site document as stored.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Document> {
    let store = state.store.lock().await;
    success(store.document().clone(), store.last_updated())
}
