use contracts::domain::order::{Order, OrderRequest, OrderStatusUpdate};

use crate::shared::http::{self, ApiError};

/// Orders as the backend returns them (recency-sorted server-side).
pub async fn list() -> Result<Vec<Order>, ApiError> {
    http::get_json("/ordini").await
}

pub async fn create(request: &OrderRequest) -> Result<(), ApiError> {
    http::post_command("/ordini", request).await
}

pub async fn update(id: i64, request: &OrderRequest) -> Result<(), ApiError> {
    http::put_command(&format!("/ordini/{}", id), request).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/ordini/{}", id)).await
}

/// Partial update carrying only the three status flags.
pub async fn update_status(id: i64, update: &OrderStatusUpdate) -> Result<(), ApiError> {
    http::patch_command(&format!("/ordini/{}/stato", id), update).await
}
