//! WASM module: the coordinator running in the browser
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           FolioPage (JS API)            │
//! │  start, dispose, snapshot               │
//! └─────────────────┬───────────────────────┘
//!                   │ Listener / Timeout / Interval / AnimationLoop
//! ┌─────────────────▼───────────────────────┐
//! │        Coordinator (core, pure)         │
//! │  header, nav, reveal, cursor, typing    │
//! └─────────────────┬───────────────────────┘
//!                   │ Layout queries
//! ┌─────────────────▼───────────────────────┐
//! │        DomLayout / Overlay (dom)        │
//! │  live geometry, injected elements       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { FolioPage, animateCounter } from './pkg/folio.js';
//!
//! await init();
//! const page = new FolioPage();   // or FolioPage.withConfig('{"typing_interval_ms": 60}')
//! page.start();
//!
//! console.log(page.snapshot());   // { scroll_y, header, active_section, ... }
//! page.dispose();                 // unregisters everything
//! ```

mod dom;
mod listener;
mod page;
mod timer;

pub use dom::DomLayout;
pub use listener::Listener;
pub use page::{animate_counter, CounterAnimation, FolioPage};
pub use timer::{AnimationLoop, Interval, Timeout};

use wasm_bindgen::prelude::*;

use crate::core::error::FolioError;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

pub(crate) use log;

impl From<JsValue> for FolioError {
    fn from(value: JsValue) -> Self {
        FolioError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FolioError> for JsValue {
    fn from(e: FolioError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
