use std::{cell::RefCell, collections::HashMap, rc::Rc};

use types::{AUTH_TOKEN_KEY, Session, USER_ROLE_KEY};

use crate::navigation::{Destination, Navigate};

/// Client-side persisted key-value storage for session fields.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: &str, role: Option<&str>) -> Self {
        let store = Self::new();
        store.set(AUTH_TOKEN_KEY, token);
        if let Some(role) = role {
            store.set(USER_ROLE_KEY, role);
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn read_session(store: &impl SessionStore) -> Option<Session> {
    Session::new(store.get(AUTH_TOKEN_KEY), store.get(USER_ROLE_KEY))
}

pub fn clear_session(store: &impl SessionStore) {
    store.remove(AUTH_TOKEN_KEY);
    store.remove(USER_ROLE_KEY);
}

/// Drop the stored session and go to the login page, keeping history.
pub fn logout(store: &impl SessionStore, navigator: &impl Navigate) {
    tracing::info!("logging out");
    clear_session(store);
    navigator.push(Destination::Login);
}
