//! History backends.
//!
//! [`History`] is the seam between the router and its environment. The
//! browser implementation lives in the `wayfinder-web` crate; this module
//! provides [`MemoryHistory`] for tests and headless hosts and
//! [`DetachedHistory`] for contexts with no environment at all.

mod detached;
mod memory;

pub use detached::DetachedHistory;
pub use memory::MemoryHistory;

/// Access to the environment's location and session history
///
/// Methods take `&self`; implementations use interior mutability since the
/// backend is shared by every handle to a [`RouterContext`](crate::RouterContext).
/// Writes never fail from the caller's point of view: a backend that hits an
/// environment error logs it and carries on.
pub trait History {
    /// Current pathname + search + hash, or `None` when no environment is attached
    fn location(&self) -> Option<String>;

    /// Origin that relative targets resolve against (`scheme://host[:port]`),
    /// or `None` when no environment is attached
    fn origin(&self) -> Option<String>;

    /// Adds a session history entry for `location`
    fn push(&self, location: &str);

    /// Replaces the current session history entry with `location`
    fn replace(&self, location: &str);

    /// Leaves the application with a full navigation to an absolute URL
    fn assign(&self, url: &str);

    /// Number of session history entries
    fn length(&self) -> usize;
}
