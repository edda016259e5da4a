use contracts::shared::api::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, get_authorized, send};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let (status, envelope) = send(Request::post(&api_url("/auth/login")).json(&request)).await?;
    let data = envelope.into_data(status)?;
    serde_json::from_value::<LoginResponse>(data).map_err(|e| ApiError::parse(e.to_string()))
}

/// Logout (invalidate the token on the server)
pub async fn logout(access_token: &str) -> Result<(), ApiError> {
    let (status, envelope) = send(
        Request::post(&api_url("/auth/logout"))
            .header("Authorization", &format!("Bearer {}", access_token))
            .build(),
    )
    .await?;
    envelope.into_ack(status)
}

/// Get current user info for the stored token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let (status, envelope) = get_authorized(&api_url("/auth/me")).await?;
    envelope.into_item(status, "user")
}
