use serde::{Deserialize, Serialize};

/// Claims leídos del token local. Solo para gating de UI.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionClaims {
    pub user_id: String,
    pub role: String,
    /// `exp` del token (segundos epoch); informativo, el cliente nunca lo refresca
    pub expires_at: Option<i64>,
}

impl SessionClaims {
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "accessToken", alias = "access_token")]
    pub access_token: String,
}

/// Cuerpo genérico `{ message }` (éxito o error)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
