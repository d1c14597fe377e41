//! Request/response types for the auth endpoints.
//!
//! Field names follow the frontend contract, hence the camelCase renames on
//! the probe and status responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of an administrator. Never carries the password hash.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: AdminUser,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Answer of the coarse "am I logged in" probe; cookie presence only.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResponse {
    pub is_logged_in: bool,
}

/// Answer of the fully verified status check.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    #[test]
    fn login_request_defaults_missing_fields() -> Result<()> {
        let decoded: LoginRequest = serde_json::from_str(r#"{"username":"admin"}"#)?;
        assert_eq!(decoded.username, "admin");
        assert_eq!(decoded.password, "");
        Ok(())
    }

    #[test]
    fn probe_response_uses_frontend_key() -> Result<()> {
        let value = serde_json::to_value(ProbeResponse {
            is_logged_in: true,
        })?;
        let flag = value
            .get("isLoggedIn")
            .and_then(serde_json::Value::as_bool)
            .context("missing isLoggedIn")?;
        assert!(flag);
        Ok(())
    }

    #[test]
    fn status_response_omits_empty_fields() -> Result<()> {
        let value = serde_json::to_value(StatusResponse {
            is_authenticated: false,
            user: None,
            message: Some("Not authenticated".to_string()),
        })?;
        assert!(value.get("user").is_none());
        assert_eq!(
            value.get("isAuthenticated").and_then(serde_json::Value::as_bool),
            Some(false)
        );
        Ok(())
    }

    #[test]
    fn login_response_round_trips() -> Result<()> {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            user: AdminUser {
                id: "42".to_string(),
                username: "admin".to_string(),
            },
        };
        let value = serde_json::to_value(&response)?;
        let decoded: LoginResponse = serde_json::from_value(value)?;
        assert_eq!(decoded.user.username, "admin");
        Ok(())
    }
}
