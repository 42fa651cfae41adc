//! Browser-backed history store.
//!
//! [`BrowserLocation`] implements the core's
//! [`LocationStore`](lodestone_core::sync::LocationStore) over
//! `window.history`. Everything degrades to a no-op when no browsing
//! context exists, so the same code path runs during pre-rendering.
//! Native builds use the core's in-memory store instead.

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;

#[cfg(target_arch = "wasm32")]
pub type PlatformLocation = BrowserLocation;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformLocation = lodestone_core::sync::MemoryLocation;

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::logger::tracing::warn;
    use lodestone_core::error::SyncError;
    use lodestone_core::sync::{HistoryMode, LocationStore, Subscription};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::PopStateEvent;

    /// A [`LocationStore`] over the window's location and history.
    ///
    /// The struct carries no state of its own; every clone reads and
    /// writes the same process-wide browser history, which is exactly
    /// the shared-resource model bindings expect.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserLocation;

    impl BrowserLocation {
        pub fn new() -> Self {
            BrowserLocation
        }

        fn js_error(context: &str, err: JsValue) -> SyncError {
            SyncError::NavigationFailed(format!("{context}: {err:?}"))
        }
    }

    impl LocationStore for BrowserLocation {
        fn search(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().search().ok())
                .map(|search| search.trim_start_matches('?').to_string())
                .unwrap_or_default()
        }

        fn navigate(&self, search: &str, mode: HistoryMode) -> Result<(), SyncError> {
            let window = web_sys::window().ok_or(SyncError::BrowserUnavailable)?;
            let history = window
                .history()
                .map_err(|err| Self::js_error("history unavailable", err))?;
            let href = window
                .location()
                .href()
                .map_err(|err| Self::js_error("location unreadable", err))?;
            let url = web_sys::Url::new(&href)
                .map_err(|err| Self::js_error("current URL unparseable", err))?;
            url.set_search(search);

            let result = match mode {
                HistoryMode::Push => {
                    history.push_state_with_url(&JsValue::NULL, "", Some(&url.href()))
                }
                HistoryMode::Replace => {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
                }
            };
            result.map_err(|err| Self::js_error("history write rejected", err))
        }

        fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
            let Some(window) = web_sys::window() else {
                return Subscription::new(|| {});
            };
            let closure = Closure::wrap(Box::new(move |_: PopStateEvent| listener())
                as Box<dyn FnMut(PopStateEvent)>);
            if window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("popstate listener could not be installed");
                return Subscription::new(|| {});
            }
            Subscription::new(move || {
                let _ = window
                    .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            })
        }
    }
}
