use api::PortalApi;
use secrecy::ExposeSecret;
use types::{AUTH_TOKEN_KEY, Credentials, Result, USER_ROLE_KEY};

use crate::navigation::{Destination, Navigate};
use crate::store::{SessionStore, read_session};

pub const LOGIN_ERROR_MESSAGE: &str = "Invalid username or password.";

/// Creates the session the other pages read.
pub struct LoginPage<S, N> {
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigate> LoginPage<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Sends already signed-in visitors to the dashboard. Returns whether a
    /// redirect happened.
    pub fn mount(&self) -> bool {
        if read_session(&self.store).is_some() {
            self.navigator.push(Destination::Dashboard);
            return true;
        }
        false
    }

    pub async fn submit(&self, api: &impl PortalApi, credentials: Credentials) -> Result<()> {
        let response = match api.login(&credentials).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, username = %credentials.username, "login failed");
                return Err(LOGIN_ERROR_MESSAGE.into());
            }
        };

        tracing::info!(username = %credentials.username, role = %response.role, "logged in");
        self.store
            .set(AUTH_TOKEN_KEY, response.access_token.expose_secret());
        self.store.set(USER_ROLE_KEY, &response.role);
        self.navigator.push(Destination::Dashboard);
        Ok(())
    }
}
