//! Event listener handles. Dropping a [`Listener`] unregisters it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::core::error::FolioResult;

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &impl AsRef<EventTarget>, event: &'static str, handler: F) -> FolioResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let target: EventTarget = target.as_ref().clone();
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target, event, callback })
    }

    /// Like [`Listener::new`] but hands the handler the concrete event type.
    pub fn typed<E, F>(target: &impl AsRef<EventTarget>, event: &'static str, mut handler: F) -> FolioResult<Self>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        Self::new(target, event, move |e: Event| {
            if let Ok(typed) = e.dyn_into::<E>() {
                handler(typed);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
