//! One query parameter bound to a history store.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::SyncError;
use crate::sync::location::{HistoryMode, LocationStore, Subscription};
use crate::sync::query_string;
use crate::sync::value::ParamValue;

/// Callback invoked with the fresh parameter value after external
/// history movement.
pub type ChangeListener = Rc<dyn Fn(String)>;

/// Construction options for a [`QueryParamBinding`].
#[derive(Clone, Default)]
pub struct BindingOptions {
    /// Value treated as "not worth putting on the URL". Writing a value
    /// equal to this removes the parameter instead of setting it.
    pub default_value: Option<ParamValue>,
    /// Debounce window applied by [`debounce::drive`](crate::sync::debounce::drive);
    /// zero writes synchronously. The binding itself never sleeps.
    pub debounce_ms: u64,
    /// Overwrite the current history entry instead of pushing new ones.
    pub replace: bool,
    /// Fires when back/forward traversal changes this parameter's
    /// context. The listener lives exactly as long as the binding.
    pub on_change: Option<ChangeListener>,
}

impl fmt::Debug for BindingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingOptions")
            .field("default_value", &self.default_value)
            .field("debounce_ms", &self.debounce_ms)
            .field("replace", &self.replace)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// What a write did to the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The parameter was set or changed.
    Updated,
    /// The parameter was removed (empty, default, or empty list).
    Removed,
    /// The query string already had this exact shape; no navigation
    /// happened and no history entry was spent.
    Unchanged,
}

/// Binds a single query parameter key to a [`LocationStore`].
///
/// Writes rewrite only this binding's parameter and leave every other
/// parameter untouched, so multiple bindings share one URL without
/// coordination. Repeated writes of the same value are suppressed
/// before touching history, which keeps the back stack free of
/// duplicate entries.
pub struct QueryParamBinding<S: LocationStore> {
    store: S,
    key: String,
    default_value: Option<ParamValue>,
    replace: bool,
    debounce_ms: u64,
    _subscription: Option<Subscription>,
}

impl<S: LocationStore + Clone + 'static> QueryParamBinding<S> {
    pub fn new(store: S, key: impl Into<String>, options: BindingOptions) -> Self {
        let key = key.into();
        let subscription = options.on_change.map(|listener| {
            let reader = store.clone();
            let key = key.clone();
            store.subscribe(Box::new(move || {
                let value = query_string::get(&reader.search(), &key).unwrap_or_default();
                listener(value);
            }))
        });
        QueryParamBinding {
            store,
            key,
            default_value: options.default_value,
            replace: options.replace,
            debounce_ms: options.debounce_ms,
            _subscription: subscription,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    /// Reads the parameter's current value, decoded. Absent parameters
    /// read as an empty string; reads never fail, even without a
    /// browsing context.
    pub fn read(&self) -> String {
        query_string::get(&self.store.search(), &self.key).unwrap_or_default()
    }

    /// Writes `value` to the URL, or removes the parameter when the
    /// value is empty, equal to the configured default, or an empty
    /// list. Returns without navigating when the resulting query
    /// string is byte-identical to the current one.
    pub fn write(&self, value: &ParamValue) -> Result<WriteOutcome, SyncError> {
        let current = self.store.search();
        let encoded = self.encode(value);
        let next = query_string::with_param(&current, &self.key, encoded.as_deref());
        if next == current {
            trace!(key = %self.key, "query param unchanged, skipping navigation");
            return Ok(WriteOutcome::Unchanged);
        }
        let mode = if self.replace {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        self.store.navigate(&next, mode)?;
        Ok(if encoded.is_some() {
            WriteOutcome::Updated
        } else {
            WriteOutcome::Removed
        })
    }

    /// Decides the on-URL form of a value, `None` meaning "remove".
    /// Lists never compare against the default; emptiness alone decides
    /// their fate.
    fn encode(&self, value: &ParamValue) -> Option<String> {
        match value {
            ParamValue::List(items) => {
                if items.is_empty() {
                    None
                } else {
                    Some(items.join(","))
                }
            }
            scalar => {
                if Some(scalar) == self.default_value.as_ref() {
                    return None;
                }
                let text = scalar.to_param_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }
}

impl<S: LocationStore + fmt::Debug> fmt::Debug for QueryParamBinding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParamBinding")
            .field("store", &self.store)
            .field("key", &self.key)
            .field("default_value", &self.default_value)
            .field("replace", &self.replace)
            .field("debounce_ms", &self.debounce_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::sync::location::MemoryLocation;

    fn binding(location: &MemoryLocation, key: &str, options: BindingOptions) -> QueryParamBinding<MemoryLocation> {
        QueryParamBinding::new(location.clone(), key, options)
    }

    #[test]
    fn write_sets_the_parameter() {
        let location = MemoryLocation::new();
        let q = binding(&location, "q", BindingOptions::default());

        let outcome = q.write(&"boots".into()).unwrap();
        assert_eq!(outcome, WriteOutcome::Updated);
        assert_eq!(location.search(), "q=boots");
        assert_eq!(q.read(), "boots");
    }

    #[test]
    fn absent_parameter_reads_as_empty() {
        let location = MemoryLocation::new();
        let q = binding(&location, "q", BindingOptions::default());
        assert_eq!(q.read(), "");
    }

    #[test]
    fn empty_text_removes_the_parameter() {
        let location = MemoryLocation::with_search("q=boots&page=2");
        let q = binding(&location, "q", BindingOptions::default());

        let outcome = q.write(&"".into()).unwrap();
        assert_eq!(outcome, WriteOutcome::Removed);
        assert_eq!(location.search(), "page=2");
    }

    #[test]
    fn default_valued_writes_remove_the_parameter() {
        let location = MemoryLocation::with_search("page=2");
        let page = binding(
            &location,
            "page",
            BindingOptions {
                default_value: Some(1.into()),
                ..BindingOptions::default()
            },
        );

        assert_eq!(page.write(&1.into()).unwrap(), WriteOutcome::Removed);
        assert_eq!(location.search(), "");
    }

    #[test]
    fn non_default_numbers_are_set() {
        let location = MemoryLocation::new();
        let page = binding(
            &location,
            "page",
            BindingOptions {
                default_value: Some(1.into()),
                ..BindingOptions::default()
            },
        );

        page.write(&3.into()).unwrap();
        assert_eq!(location.search(), "page=3");
    }

    #[test]
    fn empty_lists_remove_and_full_lists_join() {
        let location = MemoryLocation::new();
        let brands = binding(&location, "brands", BindingOptions::default());

        brands
            .write(&vec!["alpha".to_string(), "beta".to_string()].into())
            .unwrap();
        assert_eq!(location.search(), "brands=alpha%2Cbeta");

        assert_eq!(
            brands.write(&ParamValue::List(Vec::new())).unwrap(),
            WriteOutcome::Removed
        );
        assert_eq!(location.search(), "");
    }

    #[test]
    fn repeated_writes_spend_no_history_entries() {
        let location = MemoryLocation::new();
        let q = binding(&location, "q", BindingOptions::default());

        q.write(&"boots".into()).unwrap();
        let entries = location.entry_count();
        assert_eq!(q.write(&"boots".into()).unwrap(), WriteOutcome::Unchanged);
        assert_eq!(q.write(&"boots".into()).unwrap(), WriteOutcome::Unchanged);
        assert_eq!(location.entry_count(), entries);
    }

    #[test]
    fn removing_an_absent_parameter_is_a_no_op() {
        let location = MemoryLocation::with_search("page=2");
        let q = binding(&location, "q", BindingOptions::default());

        assert_eq!(q.write(&"".into()).unwrap(), WriteOutcome::Unchanged);
        assert_eq!(location.entry_count(), 1);
    }

    #[test]
    fn push_grows_history_and_replace_does_not() {
        let location = MemoryLocation::new();
        let pushed = binding(&location, "q", BindingOptions::default());
        pushed.write(&"a".into()).unwrap();
        pushed.write(&"b".into()).unwrap();
        assert_eq!(location.entry_count(), 3);

        let location = MemoryLocation::new();
        let replaced = binding(
            &location,
            "q",
            BindingOptions {
                replace: true,
                ..BindingOptions::default()
            },
        );
        replaced.write(&"a".into()).unwrap();
        replaced.write(&"b".into()).unwrap();
        assert_eq!(location.entry_count(), 1);
        assert_eq!(location.search(), "q=b");
    }

    #[test]
    fn writes_leave_unrelated_parameters_alone() {
        let location = MemoryLocation::with_search("sort=price&page=4");
        let q = binding(&location, "q", BindingOptions::default());

        q.write(&"socks".into()).unwrap();
        assert_eq!(location.search(), "sort=price&page=4&q=socks");
    }

    #[test]
    fn external_traversal_fires_the_listener_with_the_fresh_value() {
        let location = MemoryLocation::new();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let q = binding(
            &location,
            "q",
            BindingOptions {
                on_change: Some(Rc::new({
                    let seen = seen.clone();
                    move |value| seen.borrow_mut().push(value)
                })),
                ..BindingOptions::default()
            },
        );

        q.write(&"first".into()).unwrap();
        q.write(&"second".into()).unwrap();
        assert!(seen.borrow().is_empty(), "own writes must not notify");

        location.back();
        assert_eq!(seen.borrow().as_slice(), ["first".to_string()]);
        location.back();
        assert_eq!(
            seen.borrow().as_slice(),
            ["first".to_string(), String::new()]
        );
    }

    #[test]
    fn dropping_the_binding_tears_down_its_listener() {
        let location = MemoryLocation::new();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let q = binding(
            &location,
            "q",
            BindingOptions {
                on_change: Some(Rc::new({
                    let seen = seen.clone();
                    move |value| seen.borrow_mut().push(value)
                })),
                ..BindingOptions::default()
            },
        );

        q.write(&"first".into()).unwrap();
        drop(q);
        location.back();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn bindings_on_different_keys_coexist() {
        let location = MemoryLocation::new();
        let q = binding(&location, "q", BindingOptions::default());
        let sort = binding(&location, "sort", BindingOptions::default());

        q.write(&"boots".into()).unwrap();
        sort.write(&"-price".into()).unwrap();
        q.write(&"sandals".into()).unwrap();

        assert_eq!(location.search(), "q=sandals&sort=-price");
        assert_eq!(sort.read(), "-price");
    }
}
