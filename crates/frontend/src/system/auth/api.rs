use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{post_json, ApiError};

/// Login with username and password; the backend answers `{ token }`.
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    post_json("/login", &LoginRequest { username, password }).await
}
