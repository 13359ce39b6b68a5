//! `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only read/write glue lives here so the rest of the client only
//! sees [`tracker::Storage`]. Outside the browser every call reports
//! [`StorageError::Unavailable`], which the store treats as "signed out".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "csr")]
use leptos::prelude::window_event_listener;
use tracker::store::{TOKEN_KEY, USER_KEY};
use tracker::{Storage, StorageError};

use crate::state::auth::AuthHandle;

/// The origin's `localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{e:?}"))
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Whether a `storage` event for `key` can change the session.
/// `None` is what the browser sends for `localStorage.clear()`.
pub fn affects_session(key: Option<&str>) -> bool {
    key.is_none_or(|k| k == TOKEN_KEY || k == USER_KEY)
}

/// Re-read the session whenever another tab writes the session keys.
pub fn install_cross_tab_sync(auth: AuthHandle) {
    #[cfg(feature = "csr")]
    {
        let _listener = window_event_listener(leptos::ev::storage, move |ev| {
            if affects_session(ev.key().as_deref()) && auth.reload() {
                log::info!("session changed in another tab");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
    }
}
