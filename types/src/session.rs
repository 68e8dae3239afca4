use secrecy::SecretString;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_ROLE_KEY: &str = "user_role";
pub const ADMIN_ROLE: &str = "admin";

/// The persisted session as read at page mount.
///
/// Only exists when a non-empty token is stored; the role may be missing.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SecretString,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, role: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.is_empty())?;
        Some(Self {
            token: token.into(),
            role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}
