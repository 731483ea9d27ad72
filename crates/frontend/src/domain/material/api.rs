use contracts::domain::material::{Material, MaterialRequest};

use crate::shared::http::{self, ApiError};

pub async fn list() -> Result<Vec<Material>, ApiError> {
    http::get_json("/materiali").await
}

pub async fn create(request: &MaterialRequest) -> Result<(), ApiError> {
    http::post_command("/materiali", request).await
}

pub async fn update(id: i64, request: &MaterialRequest) -> Result<(), ApiError> {
    http::put_command(&format!("/materiali/{}", id), request).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/materiali/{}", id)).await
}
