use api::PortalApi;

use crate::navigation::{Destination, Navigate};
use crate::page::PageState;
use crate::store::{SessionStore, logout, read_session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContent {
    pub secret_message: String,
    /// Derived once from the stored role at mount.
    pub is_admin: bool,
}

/// Landing page for any signed-in user.
pub struct DashboardPage<S, N> {
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigate> DashboardPage<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Run the mount effect to completion and return the settled state.
    ///
    /// Without a token this pushes the login page and makes no request. Any
    /// failure fetching the secret message is treated as an invalid session
    /// and logs the user out.
    pub async fn mount(&self, api: &impl PortalApi) -> PageState<DashboardContent> {
        let Some(session) = read_session(&self.store) else {
            tracing::info!("no session token, redirecting to login");
            self.navigator.push(Destination::Login);
            return PageState::Redirecting;
        };

        let is_admin = session.is_admin();

        match api.secret_data(&session.token).await {
            Ok(body) => PageState::Ready(DashboardContent {
                secret_message: body.message,
                is_admin,
            }),
            Err(error) => {
                tracing::warn!(%error, "failed to fetch secret data");
                self.logout();
                PageState::Redirecting
            }
        }
    }

    pub fn logout(&self) {
        logout(&self.store, &self.navigator);
    }
}
