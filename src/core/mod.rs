//! Core: platform-independent behavior state machines.
//!
//! Everything here compiles natively and in the browser. The `wasm`
//! layer feeds DOM events in and writes the returned values back out.

pub mod config;
pub mod coordinator;
pub mod counter;
pub mod cursor;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod header;
pub mod layout;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod selectors;
pub mod theme;
pub mod typing;
