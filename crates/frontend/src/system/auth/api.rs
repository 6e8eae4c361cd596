use contracts::system::auth::{ApiErrorBody, LoginError, LoginRequest, LoginResponse, Role};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Resolve the login endpoint for a role.
pub fn login_endpoint(role: Role) -> String {
    api_url(role.login_path())
}

/// Post credentials to the role-specific login endpoint.
///
/// Exactly one request per call. A non-2xx answer is decoded into the
/// error payload and returned as `LoginError::Rejected`; transport
/// failures and undecodable bodies become `LoginError::Protocol`.
pub async fn login(role: Role, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
    let response = Request::post(&login_endpoint(role))
        .json(request)
        .map_err(|e| LoginError::Protocol(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| LoginError::Protocol(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let body = response
            .json::<ApiErrorBody>()
            .await
            .map_err(|e| LoginError::Protocol(format!("Failed to parse error response: {}", e)))?;
        return Err(LoginError::Rejected(body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| LoginError::Protocol(format!("Failed to parse response: {}", e)))
}
