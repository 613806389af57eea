//! The location store.
//!
//! A [`RouterContext`] owns the history backend and the registry of
//! location subscribers. Clones are cheap handles onto the same store, so
//! every component of one application shares a single context while tests
//! can build as many isolated ones as they like.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::RouterConfig;
use crate::history::{DetachedHistory, History, MemoryHistory};
use crate::hook::Navigator;
use crate::resolve::{resolve, Resolved};

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

struct Inner {
    history: Box<dyn History>,
    registry: RefCell<Registry>,
    /// Bumped at the start of every notification round
    generation: Cell<u64>,
}

/// Options for [`RouterContext::navigate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

/// Shared location store
///
/// # Examples
///
/// ```
/// use wayfinder::{MemoryHistory, NavigateOptions, RouterContext};
///
/// let ctx = RouterContext::new(MemoryHistory::new("/"));
/// ctx.navigate("/providers/42", NavigateOptions::default());
/// assert_eq!(ctx.location(), "/providers/42");
/// ```
#[derive(Clone)]
pub struct RouterContext {
    inner: Rc<Inner>,
}

impl RouterContext {
    /// Creates a context over a history backend
    pub fn new(history: impl History + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                history: Box::new(history),
                registry: RefCell::new(Registry::default()),
                generation: Cell::new(0),
            }),
        }
    }

    /// Creates a context with no environment attached
    pub fn detached() -> Self {
        Self::new(DetachedHistory)
    }

    /// Creates a memory-backed context from configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(MemoryHistory::from_config(config))
    }

    /// The history backend
    pub fn history(&self) -> &dyn History {
        self.inner.history.as_ref()
    }

    /// Whether an environment is attached
    pub fn is_attached(&self) -> bool {
        self.inner.history.location().is_some()
    }

    /// Current location (pathname + search + hash)
    ///
    /// Returns `"/"` when the backend reports an empty location or none at all.
    pub fn location(&self) -> String {
        self.inner
            .history
            .location()
            .filter(|location| !location.is_empty())
            .unwrap_or_else(|| "/".to_string())
    }

    /// Registers a callback run with the new location after every change
    ///
    /// The callback stays registered until the returned guard is dropped or
    /// [`Subscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&str) + 'static,
    {
        let mut registry = self.inner.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));

        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.borrow().listeners.len()
    }

    /// Calls every subscriber with the current location
    ///
    /// Listeners run in registration order from a snapshot taken up front, so
    /// they may subscribe, unsubscribe or navigate while being notified. A
    /// listener removed mid-round is skipped. When a listener navigates, the
    /// nested round delivers the newer location to everyone and the outer
    /// round stops, so no subscriber ends on a superseded location.
    pub fn notify_subscribers(&self) {
        let round = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(round);

        let location = self.location();
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        tracing::trace!(%location, subscribers = snapshot.len(), "notifying subscribers");

        for (id, listener) in snapshot {
            if self.inner.generation.get() != round {
                tracing::trace!(%location, "notification superseded by a nested round");
                break;
            }
            let registered = self.inner.registry.borrow().listeners.contains_key(&id);
            if registered {
                listener(&location);
            }
        }
    }

    /// Moves to `to`, resolved against the current location
    ///
    /// Same-origin targets write exactly one history entry and notify
    /// subscribers. Targets with a scheme, or relative targets that resolve
    /// to another origin, leave the application through [`History::assign`]
    /// without notifying anyone. Without an environment this does nothing.
    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        let history = self.inner.history.as_ref();

        let Some(origin) = history.origin() else {
            tracing::trace!(to, "navigation ignored: no environment attached");
            return;
        };

        let current = self.location();
        match resolve(&origin, &current, to) {
            Ok(Resolved::External(url)) => {
                tracing::info!(%url, "leaving application");
                history.assign(&url);
            }
            Ok(Resolved::Internal(location)) => {
                tracing::debug!(from = %current, to = %location, replace = options.replace, "navigating");
                if options.replace {
                    history.replace(&location);
                } else {
                    history.push(&location);
                }
                self.notify_subscribers();
            }
            Err(error) => {
                tracing::warn!(%origin, to, %error, "cannot resolve navigation target");
            }
        }
    }

    /// Pushes a new entry for `to`
    pub fn push(&self, to: &str) {
        self.navigate(to, NavigateOptions { replace: false });
    }

    /// Replaces the current entry with `to`
    pub fn replace(&self, to: &str) {
        self.navigate(to, NavigateOptions { replace: true });
    }

    /// Reacts to a back/forward traversal by the environment
    pub fn pop_state(&self) {
        tracing::trace!("history traversal");
        self.notify_subscribers();
    }

    /// A cloneable navigation handle bound to this context
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.clone())
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for RouterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterContext")
            .field("location", &self.location())
            .field("attached", &self.is_attached())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Registration guard returned by [`RouterContext::subscribe`]
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Subscription {
    /// Removes the listener; calling it again is a no-op
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
