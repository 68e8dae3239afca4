use std::{cell::Cell, rc::Rc};

use dioxus::core::Task;
use dioxus::prelude::*;
use ui::{AdminContent, AdminPage, PageState};

use super::components::{Loading, LogoutButton};
use crate::navigation::RouterNavigator;
use crate::storage::BrowserStore;
use crate::use_portal;

#[component]
pub fn Admin() -> Element {
    let portal = use_portal();
    let nav = navigator();
    let mut state = use_signal(|| PageState::<AdminContent>::Loading);
    let pending_redirect = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    use_effect({
        let pending_redirect = pending_redirect.clone();
        move || {
            let client = portal.client.clone();
            let pending_redirect = pending_redirect.clone();
            spawn(async move {
                let page = AdminPage::new(BrowserStore, RouterNavigator::new(nav));
                let mount = page.mount(&client).await;
                state.set(mount.state);

                if let Some(redirect) = mount.redirect {
                    let task = spawn(async move {
                        redirect
                            .fire(page.navigator(), gloo_timers::future::sleep)
                            .await;
                    });
                    pending_redirect.set(Some(task));
                }
            });
        }
    });

    use_drop(move || {
        if let Some(task) = pending_redirect.take() {
            tracing::debug!("admin page unmounted, cancelling redirect");
            task.cancel();
        }
    });

    match &*state.read() {
        PageState::Loading => rsx! {
            Loading { label: "Loading..." }
        },
        PageState::Redirecting => rsx! {
            Loading { label: "Redirecting..." }
        },
        PageState::Failed { error } => rsx! {
            div { class: "page",
                div { class: "page-header",
                    h1 { class: "page-title page-title-admin", "Admin Panel" }
                }
                div { class: "alert alert-error", "{error}" }
                div { class: "page-actions",
                    LogoutButton {}
                }
            }
        },
        PageState::Ready(content) => rsx! {
            div { class: "page",
                div { class: "page-header",
                    h1 { class: "page-title page-title-admin", "Admin Panel" }
                }
                p { class: "message message-admin", "{content.admin_message}" }
                div { class: "page-actions",
                    LogoutButton {}
                }
            }
        },
    }
}
