use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

/// Login success: the session token plus the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

/// Body of `GET /api/auth/me` when the bearer token is still valid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub user: UserInfo,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_response_without_wallet() {
        let body = r#"{"user":{"id":"7","username":"alice","email":"alice@example.com","created_at":"2024-01-01T00:00:00Z"}}"#;

        let response: SessionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.user.username, "alice");
        assert_eq!(response.user.wallet_address, None);
    }

    #[test]
    fn test_user_info_omits_missing_wallet() {
        let user = UserInfo {
            id: "7".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            wallet_address: None,
        };

        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("wallet_address"));
    }
}
