use std::time::Duration;

use api::PortalApi;

use crate::navigation::{DelayedRedirect, Destination, Navigate};
use crate::page::PageState;
use crate::store::{SessionStore, logout, read_session};

pub const ADMIN_ERROR_MESSAGE: &str = "No access or session expired.";
pub const ADMIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContent {
    pub admin_message: String,
}

/// Result of mounting the admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminMount {
    pub state: PageState<AdminContent>,
    /// Set when the fetch failed. The caller owns running it, and cancels it
    /// by dropping the future.
    pub redirect: Option<DelayedRedirect>,
}

pub struct AdminPage<S, N> {
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigate> AdminPage<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Non-admins are sent back to the dashboard with a history replace.
    ///
    /// A failed fetch keeps the stored session: the dashboard re-validates the
    /// token and logs out if it is actually expired.
    pub async fn mount(&self, api: &impl PortalApi) -> AdminMount {
        let session = match read_session(&self.store) {
            Some(session) if session.is_admin() => session,
            _ => {
                tracing::info!("not an admin session, redirecting to dashboard");
                self.navigator.replace(Destination::Dashboard);
                return AdminMount {
                    state: PageState::Redirecting,
                    redirect: None,
                };
            }
        };

        match api.admin_data(&session.token).await {
            Ok(body) => AdminMount {
                state: PageState::Ready(AdminContent {
                    admin_message: body.message,
                }),
                redirect: None,
            },
            Err(error) => {
                tracing::warn!(%error, "failed to fetch admin data");
                AdminMount {
                    state: PageState::Failed {
                        error: ADMIN_ERROR_MESSAGE.to_string(),
                    },
                    redirect: Some(DelayedRedirect::replace(
                        Destination::Dashboard,
                        ADMIN_REDIRECT_DELAY,
                    )),
                }
            }
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn logout(&self) {
        logout(&self.store, &self.navigator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Navigation;
    use crate::store::MemoryStore;
    use crate::testing::{Call, FakeApi, RecordingNavigator};
    use types::{AUTH_TOKEN_KEY, USER_ROLE_KEY};

    fn page(
        store: &MemoryStore,
    ) -> (AdminPage<MemoryStore, RecordingNavigator>, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        (AdminPage::new(store.clone(), navigator.clone()), navigator)
    }

    #[tokio::test]
    async fn non_admin_is_replaced_to_dashboard() {
        for store in [
            MemoryStore::new(),
            MemoryStore::with_session("tok", Some("user")),
            MemoryStore::with_session("tok", None),
        ] {
            let (page, navigator) = page(&store);
            let api = FakeApi::with_admin("secret");

            let mount = page.mount(&api).await;

            assert_eq!(mount.state, PageState::Redirecting);
            assert_eq!(mount.redirect, None);
            assert_eq!(
                navigator.history(),
                vec![Navigation::Replace(Destination::Dashboard)]
            );
            assert!(api.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn admin_fetch_sends_one_request_with_token() {
        let store = MemoryStore::with_session("admin-tok", Some("admin"));
        let (page, navigator) = page(&store);
        let api = FakeApi::with_admin("Hello, admin user! This is admin-only data.");

        let mount = page.mount(&api).await;

        assert_eq!(
            mount.state,
            PageState::Ready(AdminContent {
                admin_message: "Hello, admin user! This is admin-only data.".into(),
            })
        );
        assert_eq!(mount.redirect, None);
        assert_eq!(
            api.calls(),
            vec![Call::AdminData {
                token: "admin-tok".into()
            }]
        );
        assert!(navigator.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_shows_error_then_redirects() {
        let store = MemoryStore::with_session("tok", Some("admin"));
        let (page, navigator) = page(&store);

        let mount = page.mount(&FakeApi::failing()).await;

        assert_eq!(mount.state.error(), Some(ADMIN_ERROR_MESSAGE));
        assert!(!mount.state.is_loading());
        assert!(navigator.history().is_empty());

        let redirect = mount.redirect.unwrap();
        assert_eq!(redirect.delay, ADMIN_REDIRECT_DELAY);

        let start = tokio::time::Instant::now();
        redirect.fire(page.navigator(), tokio::time::sleep).await;

        assert!(start.elapsed() >= ADMIN_REDIRECT_DELAY);
        assert_eq!(
            navigator.history(),
            vec![Navigation::Replace(Destination::Dashboard)]
        );
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
        assert_eq!(store.get(USER_ROLE_KEY).as_deref(), Some("admin"));
    }

    #[test]
    fn logout_button_clears_session() {
        let store = MemoryStore::with_session("tok", Some("admin"));
        let (page, navigator) = page(&store);

        page.logout();

        assert!(store.is_empty());
        assert_eq!(navigator.history(), vec![Navigation::Push(Destination::Login)]);
    }
}
