//! DOM event listener guards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wayfinder::RouterContext;
use web_sys::{Event, EventTarget, Window};

/// An event listener that is removed when dropped
pub struct EventListener {
    target: EventTarget,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Adds `callback` as a listener for `event` on `target`
    pub fn new<F>(target: &EventTarget, event: &str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event: event.to_string(),
            callback,
        })
    }

    pub fn event(&self) -> &str {
        &self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            &self.event,
            self.callback.as_ref().unchecked_ref(),
        );
        if let Err(error) = removed {
            tracing::error!(event = %self.event, ?error, "failed to remove event listener");
        }
    }
}

/// Forwards `popstate` and `hashchange` to [`RouterContext::pop_state`]
///
/// Listening stops when the guard is dropped.
pub struct LocationListeners {
    _popstate: EventListener,
    _hashchange: EventListener,
}

impl LocationListeners {
    pub fn attach(window: &Window, ctx: &RouterContext) -> Result<Self, JsValue> {
        let on_popstate = ctx.clone();
        let popstate = EventListener::new(window, "popstate", move |_| on_popstate.pop_state())?;

        let on_hashchange = ctx.clone();
        let hashchange =
            EventListener::new(window, "hashchange", move |_| on_hashchange.pop_state())?;

        Ok(Self {
            _popstate: popstate,
            _hashchange: hashchange,
        })
    }
}
