use dioxus::prelude::*;
use types::Credentials;
use ui::LoginPage;

use crate::navigation::RouterNavigator;
use crate::storage::BrowserStore;
use crate::use_portal;

#[component]
pub fn Login() -> Element {
    let portal = use_portal();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        LoginPage::new(BrowserStore, RouterNavigator::new(nav)).mount();
    });

    let can_submit = !username.read().is_empty() && !password.read().is_empty();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Sign in" }
                }
                if let Some(err) = error.read().as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }
                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        let client = portal.client.clone();
                        let credentials = Credentials {
                            username: username.read().clone(),
                            password: password.read().clone(),
                        };
                        spawn(async move {
                            submitting.set(true);
                            error.set(None);
                            let page = LoginPage::new(BrowserStore, RouterNavigator::new(nav));
                            if let Err(e) = page.submit(&client, credentials).await {
                                error.set(Some(e.to_string()));
                            }
                            submitting.set(false);
                        });
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "form-input",
                            r#type: "text",
                            autocomplete: "username",
                            disabled: *submitting.read(),
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            disabled: *submitting.read(),
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: !can_submit || *submitting.read(),
                        if *submitting.read() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
