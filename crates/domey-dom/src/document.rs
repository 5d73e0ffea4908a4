//! Access to the global window and document.

use crate::error::{DomError, Result};

/// The global `window`.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window> {
	web_sys::window().ok_or(DomError::NoWindow)
}

/// The global `window`. Native targets never have one.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<web_sys::Window> {
	Err(DomError::NoWindow)
}

/// The document attached to the global window.
pub fn document() -> Result<web_sys::Document> {
	window()?.document().ok_or(DomError::NoDocument)
}

/// Checks that a document is reachable before any element is touched.
///
/// Outside a browser (or a worker without a document) this returns the error
/// explaining why the wrapper cannot be used.
pub fn ensure_dom() -> Result<()> {
	document().map(|_| ())
}

/// Installs `console_error_panic_hook` so panics show up readable in the
/// browser console.
#[cfg(feature = "console_error_panic_hook")]
pub fn init_panic_hook() {
	console_error_panic_hook::set_once();
}
