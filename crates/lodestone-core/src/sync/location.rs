//! History store abstraction.
//!
//! [`LocationStore`] is the seam between parameter bindings and the
//! environment's history stack. The widget crate implements it over
//! `window.history` on wasm32; [`MemoryLocation`] backs native targets
//! and tests with a simulated stack that supports back/forward
//! traversal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::SyncError;

/// How a navigation lands on the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add a new entry, making the previous state reachable via Back.
    Push,
    /// Overwrite the current entry in place.
    Replace,
}

/// A store holding the current query string and its history.
///
/// Implementations are single-threaded handles; cloning one yields
/// another view of the same underlying history. Reads never fail, and
/// a store must not notify subscribers for navigations performed
/// through [`navigate`](LocationStore::navigate), only for external
/// movement such as back/forward traversal.
pub trait LocationStore {
    /// Current query string without the leading `?`, empty when none.
    fn search(&self) -> String;

    /// Replaces the query string, preserving the rest of the URL.
    fn navigate(&self, search: &str, mode: HistoryMode) -> Result<(), SyncError>;

    /// Registers a listener fired after external history movement.
    /// Dropping the returned [`Subscription`] removes the listener.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;
}

/// RAII guard for a [`LocationStore`] listener.
///
/// The listener stays installed for the guard's lifetime and is removed
/// on drop, so a binding tears its listener down with itself.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// An in-memory history stack.
///
/// Mirrors the browser contract closely enough for bindings not to
/// know the difference: pushes truncate the forward tail, replaces
/// overwrite in place, and [`back`](MemoryLocation::back) and
/// [`forward`](MemoryLocation::forward) notify subscribers the way a
/// `popstate` event would.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryHistory>>,
}

struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    listeners: HashMap<u64, Rc<dyn Fn()>>,
    next_listener_id: u64,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        MemoryHistory {
            entries: vec![String::new()],
            index: 0,
            listeners: HashMap::new(),
            next_listener_id: 0,
        }
    }
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the history with a single entry holding `search`.
    pub fn with_search(search: &str) -> Self {
        let location = Self::new();
        location.inner.borrow_mut().entries[0] = search.trim_start_matches('?').to_string();
        location
    }

    /// Number of entries on the stack, including the forward tail.
    pub fn entry_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Moves one entry back and notifies subscribers. No-op at the
    /// oldest entry.
    pub fn back(&self) {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.index == 0 {
                false
            } else {
                inner.index -= 1;
                true
            }
        };
        if moved {
            self.notify();
        }
    }

    /// Moves one entry forward and notifies subscribers. No-op at the
    /// newest entry.
    pub fn forward(&self) {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.index + 1 >= inner.entries.len() {
                false
            } else {
                inner.index += 1;
                true
            }
        };
        if moved {
            self.notify();
        }
    }

    fn notify(&self) {
        // Collect first: a listener may re-enter the store to read the
        // fresh search string.
        let listeners: Vec<Rc<dyn Fn()>> = self.inner.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener();
        }
    }
}

impl LocationStore for MemoryLocation {
    fn search(&self) -> String {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    fn navigate(&self, search: &str, mode: HistoryMode) -> Result<(), SyncError> {
        let mut inner = self.inner.borrow_mut();
        let search = search.trim_start_matches('?').to_string();
        match mode {
            HistoryMode::Push => {
                let index = inner.index;
                inner.entries.truncate(index + 1);
                inner.entries.push(search);
                inner.index += 1;
            }
            HistoryMode::Replace => {
                let index = inner.index;
                inner.entries[index] = search;
            }
        }
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.insert(id, Rc::from(listener));
            id
        };
        let weak: Weak<RefCell<MemoryHistory>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(&id);
            }
        })
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryLocation")
            .field("entries", &inner.entries)
            .field("index", &inner.index)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn starts_with_one_empty_entry() {
        let location = MemoryLocation::new();
        assert_eq!(location.search(), "");
        assert_eq!(location.entry_count(), 1);
    }

    #[test]
    fn with_search_strips_a_leading_question_mark() {
        let location = MemoryLocation::with_search("?q=boots");
        assert_eq!(location.search(), "q=boots");
    }

    #[test]
    fn push_adds_entries_and_replace_overwrites() {
        let location = MemoryLocation::new();
        location.navigate("q=a", HistoryMode::Push).unwrap();
        location.navigate("q=b", HistoryMode::Replace).unwrap();
        assert_eq!(location.search(), "q=b");
        assert_eq!(location.entry_count(), 2);
    }

    #[test]
    fn back_and_forward_traverse_the_stack() {
        let location = MemoryLocation::new();
        location.navigate("q=a", HistoryMode::Push).unwrap();
        location.navigate("q=b", HistoryMode::Push).unwrap();

        location.back();
        assert_eq!(location.search(), "q=a");
        location.back();
        assert_eq!(location.search(), "");
        location.back();
        assert_eq!(location.search(), "");

        location.forward();
        assert_eq!(location.search(), "q=a");
    }

    #[test]
    fn push_truncates_the_forward_tail() {
        let location = MemoryLocation::new();
        location.navigate("q=a", HistoryMode::Push).unwrap();
        location.navigate("q=b", HistoryMode::Push).unwrap();
        location.back();
        location.navigate("q=c", HistoryMode::Push).unwrap();

        assert_eq!(location.entry_count(), 3);
        location.forward();
        assert_eq!(location.search(), "q=c");
    }

    #[test]
    fn traversal_notifies_subscribers_but_navigation_does_not() {
        let location = MemoryLocation::new();
        let fired = Rc::new(Cell::new(0));
        let _subscription = location.subscribe({
            let fired = fired.clone();
            Box::new(move || fired.set(fired.get() + 1))
        });

        location.navigate("q=a", HistoryMode::Push).unwrap();
        assert_eq!(fired.get(), 0);

        location.back();
        assert_eq!(fired.get(), 1);
        location.forward();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn dropping_the_subscription_removes_the_listener() {
        let location = MemoryLocation::new();
        location.navigate("q=a", HistoryMode::Push).unwrap();
        let fired = Rc::new(Cell::new(0));
        let subscription = location.subscribe({
            let fired = fired.clone();
            Box::new(move || fired.set(fired.get() + 1))
        });

        location.back();
        assert_eq!(fired.get(), 1);

        drop(subscription);
        location.forward();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn clones_share_one_history() {
        let location = MemoryLocation::new();
        let view = location.clone();
        location.navigate("q=a", HistoryMode::Push).unwrap();
        assert_eq!(view.search(), "q=a");
        assert_eq!(view.entry_count(), 2);
    }
}
