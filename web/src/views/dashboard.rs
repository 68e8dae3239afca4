use dioxus::prelude::*;
use ui::{DashboardContent, DashboardPage, PageState};

use super::components::{Loading, LogoutButton};
use crate::navigation::RouterNavigator;
use crate::storage::BrowserStore;
use crate::{Route, use_portal};

#[component]
pub fn Dashboard() -> Element {
    let portal = use_portal();
    let nav = navigator();
    let mut state = use_signal(|| PageState::<DashboardContent>::Loading);

    // Runs once per mount. The task belongs to this scope, so leaving the page
    // drops the request instead of acting on a stale page.
    use_effect(move || {
        let client = portal.client.clone();
        spawn(async move {
            let page = DashboardPage::new(BrowserStore, RouterNavigator::new(nav));
            state.set(page.mount(&client).await);
        });
    });

    match &*state.read() {
        PageState::Loading => rsx! {
            Loading { label: "Loading..." }
        },
        PageState::Redirecting | PageState::Failed { .. } => rsx! {
            Loading { label: "Redirecting to login..." }
        },
        PageState::Ready(content) => rsx! {
            div { class: "page",
                div { class: "page-header",
                    h1 { class: "page-title", "Protected Dashboard" }
                }
                p { class: "message message-secret", "{content.secret_message}" }
                div { class: "page-actions",
                    if content.is_admin {
                        Link { to: Route::Admin {}, class: "btn btn-admin", "Admin panel" }
                    }
                    LogoutButton {}
                }
            }
        },
    }
}
