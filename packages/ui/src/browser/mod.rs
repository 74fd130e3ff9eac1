//! Thin bindings to the browser APIs the components need. Off wasm32 (server
//! rendering, native tests) every call is a no-op and every read is empty.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
mod headless;
#[cfg(not(target_arch = "wasm32"))]
pub use headless::*;

/// `localStorage`-backed preference store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;
