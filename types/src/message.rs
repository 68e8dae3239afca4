use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body returned by both `/secret-data` and `/admin-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedMessage {
    pub message: String,
}

/// Form fields posted to `/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: SecretString,
    pub token_type: String,
    pub role: String,
}
