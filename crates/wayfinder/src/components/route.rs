use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

use crate::error::PatternError;
use crate::pattern::{compile, MatchResult, Params, Pattern};

/// Props handed to a route component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteProps {
    pub params: Params,
}

/// What a route renders when it has no component
pub enum Children<V> {
    /// Rendered as-is; params are ignored
    Static(V),
    /// Called with the captured params
    Render(Rc<dyn Fn(&Params) -> V>),
}

impl<V: Clone> Clone for Children<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(view) => Self::Static(view.clone()),
            Self::Render(render) => Self::Render(Rc::clone(render)),
        }
    }
}

/// Renders its content only when its pattern matches the location
///
/// Content is chosen in this order: the component, then render-function
/// children, then static children. A route with no content renders nothing.
///
/// # Examples
///
/// ```
/// use wayfinder::Route;
///
/// let route = Route::new("/providers/:id")
///     .component(|props| format!("provider {}", props.params.get("id").unwrap_or("?")));
///
/// assert_eq!(route.render("/providers/42").as_deref(), Some("provider 42"));
/// assert_eq!(route.render("/about"), None);
/// ```
pub struct Route<V> {
    pattern: Option<Arc<Pattern>>,
    component: Option<Rc<dyn Fn(RouteProps) -> V>>,
    children: Option<Children<V>>,
}

impl<V> Route<V> {
    /// Creates a route for `path`
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid pattern. Use [`Route::try_new`] for
    /// patterns that are not known at build time.
    pub fn new(path: &str) -> Self {
        Self::try_new(path).unwrap_or_else(|err| panic!("invalid route pattern: {err}"))
    }

    /// Creates a route for `path`, reporting an invalid pattern
    ///
    /// An empty path yields an unconditional route, like [`Route::always`].
    pub fn try_new(path: &str) -> Result<Self, PatternError> {
        let pattern = if path.is_empty() {
            None
        } else {
            Some(compile(path)?)
        };

        Ok(Self {
            pattern,
            component: None,
            children: None,
        })
    }

    /// Creates a route without a path, which renders on every location
    pub fn always() -> Self {
        Self {
            pattern: None,
            component: None,
            children: None,
        }
    }

    pub fn component<F>(mut self, component: F) -> Self
    where
        F: Fn(RouteProps) -> V + 'static,
    {
        self.component = Some(Rc::new(component));
        self
    }

    pub fn render_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&Params) -> V + 'static,
    {
        self.children = Some(Children::Render(Rc::new(render)));
        self
    }

    pub fn children(mut self, children: V) -> Self {
        self.children = Some(Children::Static(children));
        self
    }

    pub fn pattern(&self) -> Option<&Arc<Pattern>> {
        self.pattern.as_ref()
    }

    /// Pattern text, or `None` for a path-less route
    pub fn path(&self) -> Option<&str> {
        self.pattern.as_deref().map(Pattern::source)
    }

    /// Whether this route matches every location (no path, or `*`)
    pub fn is_unconditional(&self) -> bool {
        self.pattern
            .as_deref()
            .map_or(true, Pattern::is_catch_all)
    }

    /// Matches this route against a location
    pub fn matches(&self, location: &str) -> MatchResult {
        match &self.pattern {
            Some(pattern) => pattern.matches(location),
            None => MatchResult::always(),
        }
    }
}

impl<V: Clone> Route<V> {
    /// Matches `location` and renders on success
    pub fn render(&self, location: &str) -> Option<V> {
        self.render_matched(&self.matches(location))
    }

    /// Renders with a match computed elsewhere
    ///
    /// Used by [`Switch`](crate::Switch), which has already matched.
    pub fn render_matched(&self, matched: &MatchResult) -> Option<V> {
        if !matched.matches {
            return None;
        }

        if let Some(component) = &self.component {
            return Some(component(RouteProps {
                params: matched.params.clone(),
            }));
        }

        match &self.children {
            Some(Children::Render(render)) => Some(render(&matched.params)),
            Some(Children::Static(view)) => Some(view.clone()),
            None => None,
        }
    }
}

impl<V: Clone> Clone for Route<V> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            component: self.component.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V> fmt::Debug for Route<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path())
            .field("component", &self.component.is_some())
            .field(
                "children",
                &match self.children {
                    Some(Children::Static(_)) => "static",
                    Some(Children::Render(_)) => "render",
                    None => "none",
                },
            )
            .finish()
    }
}
