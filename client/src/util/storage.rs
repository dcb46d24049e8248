//! Browser localStorage helpers for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme and language choices are the only client-side persisted state. These
//! helpers keep the hydrate-only web-sys glue in one place; outside the browser
//! reads return `None` and writes are dropped.

/// Load the raw string stored under `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Failures (private mode, quota) are ignored.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("could not persist preference {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
