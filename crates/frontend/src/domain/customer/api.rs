use contracts::domain::customer::{Customer, CustomerRequest};

use crate::shared::http::{self, ApiError};

pub async fn list() -> Result<Vec<Customer>, ApiError> {
    http::get_json("/clienti").await
}

pub async fn create(request: &CustomerRequest) -> Result<(), ApiError> {
    // Creation uses `/clienti/add`, unlike update/delete below: the deployed
    // backend only accepts creates on that path.
    http::post_command("/clienti/add", request).await
}

pub async fn update(id: i64, request: &CustomerRequest) -> Result<(), ApiError> {
    http::put_command(&format!("/clienti/{}", id), request).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/clienti/{}", id)).await
}
