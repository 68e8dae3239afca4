use ui::SessionStore;
use web_sys::Storage;

/// Session fields kept in the browser's `localStorage`.
///
/// Survives reloads. When storage is unavailable (private mode, blocked
/// cookies) reads return nothing and writes are dropped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable, dropping write");
            return;
        };
        if let Err(error) = storage.set_item(key, value) {
            tracing::warn!(key, ?error, "failed to write localStorage");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(error) = storage.remove_item(key) {
            tracing::warn!(key, ?error, "failed to remove localStorage entry");
        }
    }
}
