//! `History` backend over `window.location` and `window.history`.

use wasm_bindgen::JsValue;
use wayfinder::History;
use web_sys::Window;

/// Session history of a browser window
///
/// Failing DOM calls (a `SecurityError` from `pushState`, say) are logged and
/// swallowed so that navigation never fails from the router's side.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    /// Binds to the global window, if there is one
    pub fn new() -> Option<Self> {
        web_sys::window().map(Self::from_window)
    }

    pub fn from_window(window: Window) -> Self {
        Self { window }
    }

    fn session(&self) -> Option<web_sys::History> {
        self.window
            .history()
            .map_err(|error| tracing::error!(?error, "window.history unavailable"))
            .ok()
    }
}

fn log_failure(operation: &str, destination: &str, result: Result<(), JsValue>) {
    if let Err(error) = result {
        tracing::error!(operation, destination, ?error, "history update failed");
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Option<String> {
        let location = self.window.location();
        let pathname = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        Some(format!("{pathname}{search}{hash}"))
    }

    fn origin(&self) -> Option<String> {
        self.window.location().origin().ok()
    }

    fn push(&self, location: &str) {
        if let Some(session) = self.session() {
            log_failure(
                "pushState",
                location,
                session.push_state_with_url(&JsValue::NULL, "", Some(location)),
            );
        }
    }

    fn replace(&self, location: &str) {
        if let Some(session) = self.session() {
            log_failure(
                "replaceState",
                location,
                session.replace_state_with_url(&JsValue::NULL, "", Some(location)),
            );
        }
    }

    fn assign(&self, url: &str) {
        log_failure("assign", url, self.window.location().assign(url));
    }

    fn length(&self) -> usize {
        self.session()
            .and_then(|session| session.length().ok())
            .map_or(0, |length| length as usize)
    }
}
