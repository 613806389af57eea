//! Declarative routing components.
//!
//! Components are generic over the host's view type `V`: anything from a
//! `String` to a `maud::Markup` or a framework's node type.

#[cfg(feature = "html")]
mod html;
mod link;
mod route;
mod switch;

pub use link::{ClickEvent, ClickOutcome, Link, LinkClick};
pub use route::{Children, Route, RouteProps};
pub use switch::Switch;
