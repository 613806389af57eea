//! Wayfinder Web
//!
//! Browser bindings for wayfinder.
//! Backs a [`RouterContext`] with `window.history`, forwards back/forward
//! traversal to it and intercepts clicks on rendered links.
//!
//! ```no_run
//! use wayfinder::{Link, Route, Switch};
//!
//! let router = wayfinder_web::mount().expect("running in a browser");
//! let ctx = router.context();
//!
//! let app = Switch::new()
//!     .with_route(Route::new("/").children("home"))
//!     .with_route(Route::always().children("not found"));
//! let page = app.render(&ctx.location());
//! ```

mod history;
mod link;
mod listeners;

use wasm_bindgen::prelude::*;
use wayfinder::{NavigateOptions, RouterConfig, RouterContext};

pub use history::BrowserHistory;
pub use link::{bind_link, DomClick};
pub use listeners::{EventListener, LocationListeners};

/// Set panic hook for better error messages in the browser
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A context over the browser's history
///
/// Outside a browser (no global `window`) this is a detached context, on
/// which navigation does nothing.
pub fn browser_context() -> RouterContext {
    match BrowserHistory::new() {
        Some(history) => RouterContext::new(history),
        None => {
            tracing::debug!("no window available, using a detached router");
            RouterContext::detached()
        }
    }
}

/// A mounted router: a browser-backed context plus its DOM listeners
///
/// Dropping it stops reacting to back/forward traversal.
#[wasm_bindgen]
pub struct BrowserRouter {
    ctx: RouterContext,
    listeners: Option<LocationListeners>,
}

impl BrowserRouter {
    pub fn context(&self) -> &RouterContext {
        &self.ctx
    }

    /// Whether `popstate`/`hashchange` are being listened to
    pub fn is_listening(&self) -> bool {
        self.listeners.is_some()
    }
}

#[wasm_bindgen]
impl BrowserRouter {
    /// Current location (pathname + search + hash)
    pub fn location(&self) -> String {
        self.ctx.location()
    }

    pub fn navigate(&self, to: &str, replace: bool) {
        self.ctx.navigate(to, NavigateOptions { replace });
    }
}

/// Mounts a router on the global window
#[wasm_bindgen]
pub fn mount() -> Result<BrowserRouter, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let ctx = RouterContext::new(BrowserHistory::from_window(window.clone()));
    let listeners = LocationListeners::attach(&window, &ctx)?;

    tracing::debug!(location = %ctx.location(), "router mounted");
    Ok(BrowserRouter {
        ctx,
        listeners: Some(listeners),
    })
}

/// Mounts a router with configuration passed from JavaScript
///
/// `config` may be `undefined` for the defaults. Without a global window
/// the router runs on an in-memory history built from `config`.
///
/// # Example (JavaScript)
/// ```javascript
/// const router = mountWith({ origin: 'http://localhost', initialLocation: '/login' });
/// router.navigate('/dashboard', false);
/// ```
#[wasm_bindgen(js_name = mountWith)]
pub fn mount_with(config: JsValue) -> Result<BrowserRouter, JsValue> {
    let config: RouterConfig = if config.is_undefined() || config.is_null() {
        RouterConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse router config: {}", e)))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;

    if web_sys::window().is_some() {
        return mount();
    }

    tracing::debug!(initial = %config.initial_location, "no window available, using in-memory history");
    Ok(BrowserRouter {
        ctx: RouterContext::from_config(&config),
        listeners: None,
    })
}
