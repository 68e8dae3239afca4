use api::{Config, PortalClient};
use dioxus::prelude::*;

mod navigation;
mod storage;
mod views;

use views::{Admin, Dashboard, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
}

/// Shared handles for every page, provided at the root.
#[derive(Clone)]
pub struct Portal {
    pub client: PortalClient,
}

impl Portal {
    fn from_env() -> Self {
        let config = Config::from_env().unwrap_or_else(|error| {
            tracing::error!(%error, "invalid PORTAL_API_URL, using the default");
            Config::default()
        });
        let client = PortalClient::new(config);
        tracing::info!(api_url = %client.base_url(), "portal client ready");

        Self { client }
    }
}

pub fn use_portal() -> Portal {
    use_context::<Portal>()
}

fn main() {
    #[cfg(feature = "web")]
    {
        dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    use_context_provider(Portal::from_env);

    rsx! {
        document::Title { "Portal" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
