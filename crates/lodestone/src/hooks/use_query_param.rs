//! Debounced URL parameter binding as a hook.
//!
//! `use_query_param` wraps a core
//! [`QueryParamBinding`](lodestone_core::sync::QueryParamBinding) in a
//! coroutine that applies the debounce window before writing. The
//! coroutine and the binding's popstate subscription are both owned by
//! the component, so unmounting cancels any pending write and removes
//! the listener in one sweep.

use std::rc::Rc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use lodestone_core::sync::debounce;
use lodestone_core::sync::{BindingOptions, ParamValue, QueryParamBinding};

use crate::location::PlatformLocation;

/// Debounce applied to keystroke-driven parameters like the query text.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Options for [`use_query_param`]. Mirrors the core's
/// [`BindingOptions`] with component-level additions.
#[derive(Clone, Default)]
pub struct QueryParamOptions {
    /// Values equal to this are removed from the URL instead of set.
    pub default_value: Option<ParamValue>,
    pub debounce_ms: u64,
    /// Overwrite the current history entry instead of pushing.
    pub replace: bool,
    /// Disabled params never write and never subscribe; used when the
    /// widget's `syncURL` mode is `none` so hook order stays fixed.
    pub disabled: bool,
    /// Invoked with the fresh value after back/forward traversal.
    pub on_change: Option<Callback<String>>,
}

/// The location store shared by every binding under this component
/// tree. A host may provide its own via context (tests do); otherwise
/// the platform default applies: browser history on wasm32, an
/// in-memory stack elsewhere.
pub fn use_location() -> PlatformLocation {
    use_hook(|| try_consume_context::<PlatformLocation>().unwrap_or_default())
}

/// Handle returned by [`use_query_param`].
#[derive(Clone, Copy)]
pub struct QueryParam {
    binding: Signal<Rc<QueryParamBinding<PlatformLocation>>>,
    updates: Coroutine<ParamValue>,
    disabled: bool,
}

impl QueryParam {
    /// The parameter's current on-URL value, empty when absent.
    pub fn read(&self) -> String {
        self.binding.peek().read()
    }

    /// Queues a write. The value lands on the URL once its debounce
    /// window closes; values superseded inside the window are dropped.
    pub fn set(&self, value: impl Into<ParamValue>) {
        if self.disabled {
            return;
        }
        self.updates.send(value.into());
    }
}

/// Binds one query parameter key for the lifetime of the component.
pub fn use_query_param(key: &str, options: QueryParamOptions) -> QueryParam {
    let location = use_location();
    let disabled = options.disabled;

    let binding = use_signal({
        let key = key.to_string();
        move || {
            let on_change = if disabled {
                None
            } else {
                options.on_change.map(|callback| {
                    Rc::new(move |value: String| callback.call(value)) as Rc<dyn Fn(String)>
                })
            };
            Rc::new(QueryParamBinding::new(
                location,
                key,
                BindingOptions {
                    default_value: options.default_value,
                    debounce_ms: options.debounce_ms,
                    replace: options.replace,
                    on_change,
                },
            ))
        }
    });

    let updates = use_coroutine(move |updates: UnboundedReceiver<ParamValue>| {
        let binding = Rc::clone(&binding.peek());
        async move {
            let window = binding.debounce_ms();
            debounce::drive(updates, window, move |value| {
                if let Err(err) = binding.write(&value) {
                    error!(key = %binding.key(), %err, "query parameter write failed");
                }
            })
            .await;
        }
    });

    QueryParam {
        binding,
        updates,
        disabled,
    }
}
