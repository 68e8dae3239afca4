//! In-memory fakes for the page tests.

use std::cell::RefCell;
use std::rc::Rc;

use api::PortalApi;
use secrecy::{ExposeSecret, SecretString};
use types::{Credentials, LoginResponse, ProtectedMessage, Result};

use crate::navigation::{Destination, Navigate, Navigation};

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Rc<RefCell<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<Navigation> {
        self.history.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn push(&self, to: Destination) {
        self.history.borrow_mut().push(Navigation::Push(to));
    }

    fn replace(&self, to: Destination) {
        self.history.borrow_mut().push(Navigation::Replace(to));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SecretData { token: String },
    AdminData { token: String },
    Login { username: String },
}

/// Scripted [`PortalApi`]: every endpoint fails unless given a response.
#[derive(Debug, Default)]
pub struct FakeApi {
    secret: Option<String>,
    admin: Option<String>,
    login_role: Option<String>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_secret(message: &str) -> Self {
        Self {
            secret: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_admin(message: &str) -> Self {
        Self {
            admin: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_login(role: &str) -> Self {
        Self {
            login_role: Some(role.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn respond(message: &Option<String>) -> Result<ProtectedMessage> {
        match message {
            Some(message) => Ok(ProtectedMessage {
                message: message.clone(),
            }),
            None => Err(types::err!("401 Unauthorized")),
        }
    }
}

impl PortalApi for FakeApi {
    async fn secret_data(&self, token: &SecretString) -> Result<ProtectedMessage> {
        self.calls.borrow_mut().push(Call::SecretData {
            token: token.expose_secret().to_string(),
        });
        Self::respond(&self.secret)
    }

    async fn admin_data(&self, token: &SecretString) -> Result<ProtectedMessage> {
        self.calls.borrow_mut().push(Call::AdminData {
            token: token.expose_secret().to_string(),
        });
        Self::respond(&self.admin)
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.calls.borrow_mut().push(Call::Login {
            username: credentials.username.clone(),
        });
        match &self.login_role {
            Some(role) => Ok(LoginResponse {
                access_token: format!("token-for-{}", credentials.username).into(),
                token_type: "bearer".into(),
                role: role.clone(),
            }),
            None => Err("Incorrect username or password".into()),
        }
    }
}
