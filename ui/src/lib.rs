//! Page logic for the portal, independent of any renderer.
//!
//! Each page is a small state machine driven by a [`SessionStore`], a
//! [`Navigate`] implementation and an [`api::PortalApi`]. The `web` crate
//! plugs in `localStorage`, the Dioxus router and the HTTP client; tests plug
//! in in-memory fakes.

mod admin;
mod dashboard;
mod login;
mod navigation;
mod page;
mod store;

#[cfg(test)]
mod testing;

pub use admin::{ADMIN_ERROR_MESSAGE, ADMIN_REDIRECT_DELAY, AdminContent, AdminMount, AdminPage};
pub use dashboard::{DashboardContent, DashboardPage};
pub use login::{LOGIN_ERROR_MESSAGE, LoginPage};
pub use navigation::{DelayedRedirect, Destination, Navigate, Navigation};
pub use page::PageState;
pub use store::{MemoryStore, SessionStore, clear_session, logout, read_session};
