use std::fmt;

use super::route::Route;
use crate::pattern::MatchResult;

/// Renders only the first route that matches, in declaration order
///
/// There is no implicit fallback: end the list with [`Route::always`] or
/// `Route::new("*")` to render something on unmatched locations.
///
/// # Examples
///
/// ```
/// use wayfinder::{Route, Switch};
///
/// let switch = Switch::new()
///     .with_route(Route::new("/a").children("a"))
///     .with_route(Route::new("/:id").children("id"))
///     .with_route(Route::always().children("not found"));
///
/// assert_eq!(switch.render("/a"), Some("a"));
/// assert_eq!(switch.render("/b"), Some("id"));
/// assert_eq!(switch.render("/b/c"), Some("not found"));
/// ```
pub struct Switch<V> {
    routes: Vec<Route<V>>,
}

impl<V> Switch<V> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route
    ///
    /// Logs a warning when an earlier route already matches every location,
    /// since the new one can then never render.
    pub fn with_route(mut self, route: Route<V>) -> Self {
        if let Some(index) = self.routes.iter().position(Route::is_unconditional) {
            tracing::warn!(
                path = route.path().unwrap_or(""),
                position = self.routes.len(),
                shadowed_by = index,
                "route is unreachable: an earlier route matches every location"
            );
        }
        self.routes.push(route);
        self
    }

    pub fn with_routes(self, routes: impl IntoIterator<Item = Route<V>>) -> Self {
        routes.into_iter().fold(self, Self::with_route)
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Index and match of the first route matching `location`
    pub fn find(&self, location: &str) -> Option<(usize, MatchResult)> {
        self.routes
            .iter()
            .map(|route| route.matches(location))
            .enumerate()
            .find(|(_, matched)| matched.matches)
    }

    /// Indices of routes that follow an unconditional route
    pub fn shadowed(&self) -> Vec<usize> {
        match self.routes.iter().position(Route::is_unconditional) {
            Some(first) => (first + 1..self.routes.len()).collect(),
            None => Vec::new(),
        }
    }

    /// Reorders routes from most to least specific
    ///
    /// Sorting is stable, so routes of equal priority keep their declared
    /// order. Path-less routes go last.
    pub fn ranked(mut self) -> Self {
        self.routes.sort_by_key(|route| {
            route
                .pattern()
                .map_or(usize::MAX, |pattern| pattern.priority())
        });
        self
    }
}

impl<V: Clone> Switch<V> {
    /// Renders the first matching route, or nothing
    pub fn render(&self, location: &str) -> Option<V> {
        let (index, matched) = self.find(location)?;
        self.routes[index].render_matched(&matched)
    }
}

impl<V> Default for Switch<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Switch<V> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<V> FromIterator<Route<V>> for Switch<V> {
    fn from_iter<I: IntoIterator<Item = Route<V>>>(iter: I) -> Self {
        Self::new().with_routes(iter)
    }
}

impl<V> fmt::Debug for Switch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch").field("routes", &self.routes).finish()
    }
}
