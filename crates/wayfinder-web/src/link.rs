//! Click interception for rendered links.

use wasm_bindgen::{JsCast, JsValue};
use wayfinder::{Link, LinkClick, RouterContext};
use web_sys::{EventTarget, MouseEvent};

use crate::listeners::EventListener;

/// A DOM mouse event seen through [`LinkClick`]
#[derive(Debug, Clone)]
pub struct DomClick(MouseEvent);

impl DomClick {
    pub fn new(event: MouseEvent) -> Self {
        Self(event)
    }

    pub fn into_inner(self) -> MouseEvent {
        self.0
    }
}

impl LinkClick for DomClick {
    fn button(&self) -> i16 {
        self.0.button()
    }

    fn meta_key(&self) -> bool {
        self.0.meta_key()
    }

    fn ctrl_key(&self) -> bool {
        self.0.ctrl_key()
    }

    fn alt_key(&self) -> bool {
        self.0.alt_key()
    }

    fn shift_key(&self) -> bool {
        self.0.shift_key()
    }

    fn default_prevented(&self) -> bool {
        self.0.default_prevented()
    }

    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

/// Routes clicks on `element` through [`Link::handle_click`]
///
/// `element` is normally the anchor the link rendered to. The returned
/// guard keeps the handler attached.
pub fn bind_link<V: 'static>(
    element: &EventTarget,
    link: Link<V>,
    ctx: &RouterContext,
) -> Result<EventListener, JsValue> {
    let ctx = ctx.clone();
    EventListener::new(element, "click", move |event| {
        let Ok(mouse) = event.dyn_into::<MouseEvent>() else {
            return;
        };
        let outcome = link.handle_click(&ctx, &mut DomClick::new(mouse));
        tracing::trace!(?outcome, href = ?link.target(), "link click");
    })
}
