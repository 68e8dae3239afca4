use dioxus::prelude::*;

use crate::navigation::RouterNavigator;
use crate::storage::BrowserStore;

/// Clears the stored session and pushes the login page.
#[component]
pub fn LogoutButton() -> Element {
    let nav = navigator();

    rsx! {
        button {
            class: "btn btn-danger",
            onclick: move |_| ui::logout(&BrowserStore, &RouterNavigator::new(nav)),
            "Sign out"
        }
    }
}

#[component]
pub fn Loading(label: &'static str) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}
