use std::cell::RefCell;
use std::rc::Rc;

use super::History;
use crate::config::RouterConfig;
use crate::path::canonical_location;

#[derive(Debug)]
struct MemoryState {
    origin: String,
    entries: Vec<String>,
    index: usize,
    assigned: Vec<String>,
}

/// In-memory session history with browser semantics
///
/// Pushing discards forward entries, and `back`/`forward`/`go` move a cursor
/// without notifying anyone, exactly like the browser: call
/// [`RouterContext::pop_state`](crate::RouterContext::pop_state) afterwards
/// to play the role of the `popstate` event.
///
/// Cloning yields another handle to the same history, so a host or test can
/// keep one while the router owns the other.
///
/// # Examples
///
/// ```
/// use wayfinder::history::{History, MemoryHistory};
///
/// let history = MemoryHistory::new("/start");
/// history.push("/next");
/// assert_eq!(history.length(), 2);
///
/// assert!(history.back());
/// assert_eq!(history.location().as_deref(), Some("/start"));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    state: Rc<RefCell<MemoryState>>,
}

/// Origin used when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost";

impl MemoryHistory {
    /// Creates a history with a single entry at `initial`
    pub fn new(initial: &str) -> Self {
        Self::with_origin(DEFAULT_ORIGIN, initial)
    }

    /// Creates a history with a custom origin for relative resolution
    pub fn with_origin(origin: impl Into<String>, initial: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                origin: origin.into(),
                entries: vec![canonical_location(initial).to_string()],
                index: 0,
                assigned: Vec::new(),
            })),
        }
    }

    /// Creates a history from router configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::with_origin(config.origin.clone(), &config.initial_location)
    }

    /// All entries, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.state.borrow().entries.clone()
    }

    /// Position of the current entry
    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    /// URLs passed to [`History::assign`], oldest first
    pub fn assigned(&self) -> Vec<String> {
        self.state.borrow().assigned.clone()
    }

    /// Moves the cursor by `delta` entries
    ///
    /// Returns `false` and stays put when the target is out of range.
    pub fn go(&self, delta: isize) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(target) = (state.index as isize).checked_add(delta) else {
            return false;
        };

        if delta == 0 || target < 0 || target >= state.entries.len() as isize {
            return false;
        }

        state.index = target as usize;
        true
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Option<String> {
        let state = self.state.borrow();
        state.entries.get(state.index).cloned()
    }

    fn origin(&self) -> Option<String> {
        Some(self.state.borrow().origin.clone())
    }

    fn push(&self, location: &str) {
        let mut state = self.state.borrow_mut();
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(location.to_string());
        state.index = keep;
    }

    fn replace(&self, location: &str) {
        let mut state = self.state.borrow_mut();
        let index = state.index;
        state.entries[index] = location.to_string();
    }

    fn assign(&self, url: &str) {
        self.state.borrow_mut().assigned.push(url.to_string());
    }

    fn length(&self) -> usize {
        self.state.borrow().entries.len()
    }
}
