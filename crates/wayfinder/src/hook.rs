//! Per-consumer location binding.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::context::{NavigateOptions, RouterContext, Subscription};

/// Cloneable navigation handle
#[derive(Debug, Clone)]
pub struct Navigator {
    ctx: RouterContext,
}

impl Navigator {
    pub(crate) fn new(ctx: RouterContext) -> Self {
        Self { ctx }
    }

    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        self.ctx.navigate(to, options);
    }

    pub fn push(&self, to: &str) {
        self.ctx.push(to);
    }

    pub fn replace(&self, to: &str) {
        self.ctx.replace(to);
    }
}

/// A mounted consumer of the location store
///
/// Holds the location as last delivered by the store. It is updated only by
/// notifications, including for navigations this consumer started itself.
/// Dropping the hook unmounts it.
pub struct LocationHook {
    location: Rc<RefCell<String>>,
    navigator: Navigator,
    _subscription: Subscription,
}

impl LocationHook {
    /// Location as last seen by this consumer
    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        self.navigator.navigate(to, options);
    }

    /// The `(location, navigate)` pair
    pub fn split(&self) -> (String, Navigator) {
        (self.location(), self.navigator())
    }
}

impl fmt::Debug for LocationHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationHook")
            .field("location", &*self.location.borrow())
            .finish()
    }
}

/// Mounts a location consumer on `ctx`
///
/// # Examples
///
/// ```
/// use wayfinder::{use_location, MemoryHistory, RouterContext};
///
/// let ctx = RouterContext::new(MemoryHistory::new("/"));
/// let hook = use_location(&ctx);
///
/// let (location, navigate) = hook.split();
/// assert_eq!(location, "/");
///
/// navigate.push("/settings");
/// assert_eq!(hook.location(), "/settings");
/// ```
pub fn use_location(ctx: &RouterContext) -> LocationHook {
    use_location_with(ctx, |_| {})
}

/// Mounts a location consumer that also runs `on_change` after each update
///
/// `on_change` is where a view layer schedules its re-render.
pub fn use_location_with<F>(ctx: &RouterContext, on_change: F) -> LocationHook
where
    F: Fn(&str) + 'static,
{
    let location = Rc::new(RefCell::new(ctx.location()));

    let seen = Rc::clone(&location);
    let subscription = ctx.subscribe(move |next| {
        *seen.borrow_mut() = next.to_string();
        on_change(next);
    });

    LocationHook {
        location,
        navigator: ctx.navigator(),
        _subscription: subscription,
    }
}
