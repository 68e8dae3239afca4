use dioxus::router::Navigator;
use ui::{Destination, Navigate};

use crate::Route;

/// Bridges page logic to the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(Navigator);

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self(navigator)
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Admin => Route::Admin {},
        }
    }
}

impl Navigate for RouterNavigator {
    fn push(&self, to: Destination) {
        tracing::debug!(path = to.path(), "push");
        self.0.push(Route::from(to));
    }

    fn replace(&self, to: Destination) {
        tracing::debug!(path = to.path(), "replace");
        self.0.replace(Route::from(to));
    }
}
