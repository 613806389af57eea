//! # Wayfinder
//!
//! Client-side routing for single-page applications:
//! - Path patterns with named parameters (`/users/:id`) and wildcards (`/docs/*`)
//! - A location store synchronized with session history
//! - `use_location` for per-consumer `(location, navigate)` bindings
//! - `Route`, `Switch` and `Link` components, generic over the host view type
//!
//! ## Matching
//!
//! Patterns are compiled once per distinct text and cached for the life of
//! the process. Only the pathname takes part in matching; query string and
//! fragment are ignored. Parameter values are percent-decoded.
//!
//! ## Navigation
//!
//! Every navigation goes through a [`RouterContext`]. Relative targets
//! (`../x`, `?q=1`, `#top`) resolve against the current location the way a
//! browser resolves them, write exactly one history entry, then notify every
//! subscriber once. Absolute URLs leave the application with a full page load.
//!
//! ## Example
//!
//! ```
//! use wayfinder::prelude::*;
//!
//! let ctx = RouterContext::new(MemoryHistory::new("/"));
//! let hook = use_location(&ctx);
//!
//! let app = Switch::new()
//!     .with_route(Route::new("/").children("home".to_string()))
//!     .with_route(Route::new("/providers/:id").component(|props| {
//!         format!("provider {}", props.params.get("id").unwrap_or("?"))
//!     }))
//!     .with_route(Route::always().children("not found".to_string()));
//!
//! assert_eq!(app.render(&hook.location()).as_deref(), Some("home"));
//!
//! hook.navigate("/providers/42", NavigateOptions::default());
//! assert_eq!(app.render(&hook.location()).as_deref(), Some("provider 42"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod hook;
pub mod path;
pub mod pattern;
pub mod resolve;

pub use components::{
    Children, ClickEvent, ClickOutcome, Link, LinkClick, Route, RouteProps, Switch,
};
pub use config::RouterConfig;
pub use context::{NavigateOptions, RouterContext, Subscription};
pub use error::PatternError;
pub use history::{DetachedHistory, History, MemoryHistory};
pub use hook::{use_location, use_location_with, LocationHook, Navigator};
pub use pattern::{compile, match_location, MatchResult, Params, Pattern, Segment};

#[cfg(feature = "html")]
pub use maud;

/// Everything an application needs to declare routes and navigate
pub mod prelude {
    pub use crate::components::{Link, Route, Switch};
    pub use crate::context::{NavigateOptions, RouterContext};
    pub use crate::history::{History, MemoryHistory};
    pub use crate::hook::{use_location, LocationHook, Navigator};
}
