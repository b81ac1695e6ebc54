//! Timers and the animation-frame loop.
//!
//! All three own their closure and cancel on drop. None of them may be
//! dropped from inside their own callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::window;
use crate::core::error::FolioResult;

/// One-shot `setTimeout`
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(ms: u32, f: F) -> FolioResult<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut f = Some(f);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        });
        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms as i32)?;
        Ok(Self { handle, _callback: callback })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Ok(w) = window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Repeating `setInterval`; stops itself when the callback returns false.
pub struct Interval {
    handle: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(ms: u32, mut f: F) -> FolioResult<Self>
    where
        F: FnMut() -> bool + 'static,
    {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let own = handle.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !f() {
                clear_interval(&own);
            }
        });
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), ms as i32)?;
        handle.set(Some(id));
        Ok(Self { handle, _callback: callback })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

fn clear_interval(handle: &Cell<Option<i32>>) {
    if let (Some(id), Ok(w)) = (handle.take(), window()) {
        w.clear_interval_with_handle(id);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(&self.handle);
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that runs until dropped
pub struct AnimationLoop {
    slot: FrameSlot,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start<F>(mut frame: F) -> FolioResult<Self>
    where
        F: FnMut() + 'static,
    {
        // The closure re-requests itself through the slot it lives in.
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let inner_slot = slot.clone();
        let inner_handle = handle.clone();
        *slot.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            frame();
            inner_handle.set(request_frame(&inner_slot));
        }));

        handle.set(request_frame(&slot));
        Ok(Self { slot, handle })
    }
}

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let slot = slot.borrow();
    let callback = slot.as_ref()?;
    window().ok()?.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Ok(w)) = (self.handle.take(), window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}
