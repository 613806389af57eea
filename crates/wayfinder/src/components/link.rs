use std::fmt;
use std::rc::Rc;

use crate::context::{NavigateOptions, RouterContext};
use crate::history::History;
use crate::resolve::{resolve, Resolved};

/// The parts of a click event a [`Link`] inspects
///
/// `wayfinder-web` implements this for DOM mouse events; [`ClickEvent`]
/// serves hosts and tests without a DOM.
pub trait LinkClick {
    /// Mouse button, `0` for primary
    fn button(&self) -> i16;
    fn meta_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    fn alt_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    fn default_prevented(&self) -> bool;
    fn prevent_default(&mut self);

    /// Whether any modifier key is held
    fn is_modified(&self) -> bool {
        self.meta_key() || self.ctrl_key() || self.alt_key() || self.shift_key()
    }
}

/// Plain click event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: i16,
    pub meta_key: bool,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub default_prevented: bool,
}

impl ClickEvent {
    /// An unmodified primary-button click
    pub fn primary() -> Self {
        Self::default()
    }
}

impl LinkClick for ClickEvent {
    fn button(&self) -> i16 {
        self.button
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn alt_key(&self) -> bool {
        self.alt_key
    }

    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// What [`Link::handle_click`] did with a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default prevented and navigated in-app
    Navigated,
    /// The default was already prevented, by `on_click` or earlier
    Vetoed,
    /// Left to the browser (new tab, download, external target, ...)
    Passthrough,
}

type ClickHandler = Rc<dyn Fn(&mut dyn LinkClick)>;

/// Anchor that turns plain primary clicks into in-app navigation
///
/// # Examples
///
/// ```
/// use wayfinder::{ClickEvent, ClickOutcome, Link, MemoryHistory, RouterContext};
///
/// let ctx = RouterContext::new(MemoryHistory::new("/"));
/// let link = Link::new("Settings").to("/settings");
///
/// let mut click = ClickEvent::primary();
/// assert_eq!(link.handle_click(&ctx, &mut click), ClickOutcome::Navigated);
/// assert!(click.default_prevented);
/// assert_eq!(ctx.location(), "/settings");
/// ```
pub struct Link<V> {
    href: Option<String>,
    to: Option<String>,
    replace: bool,
    attributes: Vec<(String, String)>,
    on_click: Option<ClickHandler>,
    children: V,
}

impl<V> Link<V> {
    pub fn new(children: V) -> Self {
        Self {
            href: None,
            to: None,
            replace: false,
            attributes: Vec::new(),
            on_click: None,
            children,
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Sets the target; takes precedence over [`Link::to`]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Replace the current history entry instead of pushing
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Adds an anchor attribute; `href` is routed to [`Link::href`]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name.eq_ignore_ascii_case("href") {
            return self.href(value);
        }
        self.attributes.push((name, value.into()));
        self
    }

    /// Runs before the link decides whether to navigate
    ///
    /// Calling `prevent_default` on the event vetoes the navigation.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut dyn LinkClick) + 'static,
    {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Where the link points: `href` if set, otherwise `to`
    pub fn target(&self) -> Option<&str> {
        self.href.as_deref().or(self.to.as_deref())
    }

    /// The target resolved against the context's current location
    ///
    /// Same-origin targets come back as a location, others as a full URL.
    /// Without an environment, or when resolution fails, the raw target is
    /// returned.
    pub fn resolved_target(&self, ctx: &RouterContext) -> Option<String> {
        let target = self.target()?;
        let Some(origin) = ctx.history().origin() else {
            return Some(target.to_string());
        };

        match resolve(&origin, &ctx.location(), target) {
            Ok(Resolved::Internal(location)) => Some(location),
            Ok(Resolved::External(url)) => Some(url),
            Err(_) => Some(target.to_string()),
        }
    }

    pub fn is_replace(&self) -> bool {
        self.replace
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn children(&self) -> &V {
        &self.children
    }

    /// Whether the anchor opens somewhere other than the current browsing context
    fn opens_elsewhere(&self) -> bool {
        self.attribute_value("target")
            .is_some_and(|target| !target.is_empty() && !target.eq_ignore_ascii_case("_self"))
    }

    /// Handles a click on the rendered anchor
    pub fn handle_click(&self, ctx: &RouterContext, event: &mut dyn LinkClick) -> ClickOutcome {
        if let Some(on_click) = &self.on_click {
            on_click(&mut *event);
        }

        if event.default_prevented() {
            return ClickOutcome::Vetoed;
        }

        if event.button() != 0 || event.is_modified() || self.opens_elsewhere() {
            return ClickOutcome::Passthrough;
        }

        let Some(target) = self.target() else {
            return ClickOutcome::Passthrough;
        };

        event.prevent_default();
        ctx.navigate(
            target,
            NavigateOptions {
                replace: self.replace,
            },
        );
        ClickOutcome::Navigated
    }
}

impl<V: Clone> Clone for Link<V> {
    fn clone(&self) -> Self {
        Self {
            href: self.href.clone(),
            to: self.to.clone(),
            replace: self.replace,
            attributes: self.attributes.clone(),
            on_click: self.on_click.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Link<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("href", &self.href)
            .field("to", &self.to)
            .field("replace", &self.replace)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
