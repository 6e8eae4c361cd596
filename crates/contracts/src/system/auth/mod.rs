use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notification text when an error payload carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "Login failed";

const STATUS_APPROVED: &str = "approved";

/// Account category attempting to authenticate.
///
/// Selects the backend login endpoint and the redirect convention applied
/// after authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    IssuingAuthority,
    VerifyingAuthority,
    Individual,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user type: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    pub const ALL: [Role; 4] = [
        Role::IssuingAuthority,
        Role::VerifyingAuthority,
        Role::Individual,
        Role::Admin,
    ];

    /// Path segment identifying the role in login routes and in the
    /// persisted `userRole` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::IssuingAuthority => "issuing-auth",
            Role::VerifyingAuthority => "verifying-auth",
            Role::Individual => "individual",
            Role::Admin => "admin",
        }
    }

    /// Login endpoint path on the backend. The two authority roles share
    /// the `/api/auth` prefix; individuals and admins have their own.
    pub fn login_path(self) -> &'static str {
        match self {
            Role::IssuingAuthority => "/api/auth/login/issuing-auth",
            Role::VerifyingAuthority => "/api/auth/login/verifying-auth",
            Role::Individual => "/api/individual/login",
            Role::Admin => "/api/admin/login",
        }
    }

    /// Human-readable label, e.g. "issuing auth".
    pub fn display_name(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issuing-auth" => Ok(Role::IssuingAuthority),
            "verifying-auth" => Ok(Role::VerifyingAuthority),
            "individual" => Ok(Role::Individual),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub official_email: String,
    pub password: String,
}

/// Body of a successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

impl LoginResponse {
    /// Unique account identifier embedded as the third segment of the
    /// redirect path, e.g. `/admin/abc123/dashboard` -> `abc123`.
    pub fn unique_id(&self) -> Option<&str> {
        self.redirect_url
            .as_deref()?
            .split('/')
            .nth(2)
            .filter(|s| !s.is_empty())
    }
}

/// JSON payload of a non-2xx login response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure result of a login attempt.
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    /// The server answered with an error payload.
    #[error("{}", .0.message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Rejected(ApiErrorBody),
    /// Transport failure or an undecodable response body.
    #[error("{0}")]
    Protocol(String),
}

/// What the UI must do about a failed login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureAction {
    /// Show the message; stay on the page.
    Notify(String),
    /// Show the message, then navigate to the application root.
    NotifyAndGoHome(String),
}

/// Map a login failure onto the user-facing action.
///
/// A rejected payload whose `status` is anything but "approved" sends the
/// user back to the root: the account exists but is not cleared for login
/// yet. A payload without a `status` stays on the page with its message.
/// Transport failures and the odd case of a rejection that still claims
/// `status: "approved"` both fall back to a plain notification, so no
/// failure shape is ever silent.
pub fn classify_failure(error: &LoginError) -> FailureAction {
    match error {
        LoginError::Rejected(body) => {
            let message = body
                .message
                .clone()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            match body.status.as_deref() {
                Some(status) if status != STATUS_APPROVED => {
                    FailureAction::NotifyAndGoHome(message)
                }
                _ => FailureAction::Notify(message),
            }
        }
        LoginError::Protocol(_) => FailureAction::Notify(FALLBACK_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert_eq!(
            Role::from_str("superuser"),
            Err(RoleParseError("superuser".to_string()))
        );
        assert!(Role::from_str("").is_err());
        assert!(Role::from_str("Admin").is_err());
    }

    #[test]
    fn test_login_path_table() {
        assert_eq!(
            Role::IssuingAuthority.login_path(),
            "/api/auth/login/issuing-auth"
        );
        assert_eq!(
            Role::VerifyingAuthority.login_path(),
            "/api/auth/login/verifying-auth"
        );
        assert_eq!(Role::Individual.login_path(), "/api/individual/login");
        assert_eq!(Role::Admin.login_path(), "/api/admin/login");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Role::IssuingAuthority.display_name(), "issuing auth");
        assert_eq!(Role::Admin.display_name(), "admin");
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let request = LoginRequest {
            official_email: "clerk@example.gov".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["officialEmail"], "clerk@example.gov");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_response_deserializes_with_optional_fields() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token":"t1","message":"Welcome","redirectUrl":"/admin/abc123/dashboard"}"#,
        )
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("t1"));
        assert_eq!(response.status, None);
        assert_eq!(response.unique_id(), Some("abc123"));

        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Check your inbox"}"#).unwrap();
        assert_eq!(response.token, None);
        assert_eq!(response.unique_id(), None);
    }

    #[test]
    fn test_unique_id_requires_third_segment() {
        let response = |url: &str| LoginResponse {
            token: None,
            status: None,
            message: String::new(),
            redirect_url: Some(url.to_string()),
        };
        assert_eq!(
            response("/individual/u456/home").unique_id(),
            Some("u456")
        );
        assert_eq!(response("/admin").unique_id(), None);
        assert_eq!(response("/admin//dashboard").unique_id(), None);
        assert_eq!(response("").unique_id(), None);
    }

    #[test]
    fn test_missing_status_notifies_in_place() {
        let error = LoginError::Rejected(ApiErrorBody {
            status: None,
            message: Some("Wrong password".to_string()),
        });
        assert_eq!(
            classify_failure(&error),
            FailureAction::Notify("Wrong password".to_string())
        );
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let error = LoginError::Rejected(ApiErrorBody::default());
        assert_eq!(
            classify_failure(&error),
            FailureAction::Notify(FALLBACK_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_unapproved_status_redirects_home() {
        let error = LoginError::Rejected(ApiErrorBody {
            status: Some("pending".to_string()),
            message: Some("Account awaiting approval".to_string()),
        });
        assert_eq!(
            classify_failure(&error),
            FailureAction::NotifyAndGoHome("Account awaiting approval".to_string())
        );
    }

    #[test]
    fn test_approved_status_on_failure_notifies_in_place() {
        // A rejection claiming "approved" is contradictory; it degrades to a
        // plain notification instead of going silent.
        let error = LoginError::Rejected(ApiErrorBody {
            status: Some("approved".to_string()),
            message: Some("Internal error".to_string()),
        });
        assert_eq!(
            classify_failure(&error),
            FailureAction::Notify("Internal error".to_string())
        );
    }

    #[test]
    fn test_transport_failure_uses_fallback_text() {
        let error = LoginError::Protocol("Failed to send request: timeout".to_string());
        assert_eq!(
            classify_failure(&error),
            FailureAction::Notify(FALLBACK_MESSAGE.to_string())
        );
    }
}
