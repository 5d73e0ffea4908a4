//! Event listeners and global (window) event registration.
//!
//! A [`Listener`] owns the JS closure that the browser calls. The same
//! listener must be passed to `off` to unregister it, and it must outlive its
//! registration: a dropped listener that is still registered throws when the
//! event fires.
//!
//! ## Example
//!
//! ```ignore
//! use domey_dom::{Dom, Listener, Phase};
//!
//! let clicked = Listener::new(|_event| info_log!("clicked"));
//!
//! let button = Dom::tag_new("button")?;
//! button.on("click", &clicked, Phase::Bubble)?.set_text("Save")?;
//!
//! Dom::window()?.on("resize", &clicked)?;
//! ```

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::debug_log;
use crate::error::{JsResultExt, Result};

/// Propagation phase a listener is registered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
	/// Called while the event bubbles up from the target.
	#[default]
	Bubble,
	/// Called while the event travels down to the target.
	Capture,
}

impl Phase {
	/// The `useCapture` flag passed to `addEventListener`.
	pub fn use_capture(self) -> bool {
		matches!(self, Self::Capture)
	}
}

impl From<bool> for Phase {
	fn from(capture: bool) -> Self {
		if capture { Self::Capture } else { Self::Bubble }
	}
}

/// Caller-owned event callback.
pub struct Listener {
	closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
	/// Wraps a callback receiving the dispatched event.
	pub fn new<F>(callback: F) -> Self
	where
		F: FnMut(Event) + 'static,
	{
		Self {
			closure: Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>),
		}
	}

	/// Leaks the closure so it stays callable for the rest of the page's life.
	///
	/// The listener can no longer be passed to `off` afterwards.
	pub fn forget(self) {
		self.closure.forget();
	}

	pub(crate) fn as_function(&self) -> &js_sys::Function {
		self.closure.as_ref().unchecked_ref()
	}
}

impl std::fmt::Debug for Listener {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Listener")
			.field("closure", &"<function>")
			.finish()
	}
}

pub(crate) fn add_listener(
	target: &EventTarget,
	name: &str,
	listener: &Listener,
	phase: Phase,
) -> Result<()> {
	debug_log!("addEventListener {} ({:?})", name, phase);
	target
		.add_event_listener_with_callback_and_bool(name, listener.as_function(), phase.use_capture())
		.or_platform("addEventListener")
}

pub(crate) fn remove_listener(
	target: &EventTarget,
	name: &str,
	listener: &Listener,
	phase: Phase,
) -> Result<()> {
	debug_log!("removeEventListener {} ({:?})", name, phase);
	target
		.remove_event_listener_with_callback_and_bool(
			name,
			listener.as_function(),
			phase.use_capture(),
		)
		.or_platform("removeEventListener")
}

/// Handle on the global `window` for listeners that are not tied to an element.
///
/// Obtained from [`Dom::window`](crate::Dom::window).
#[derive(Debug, Clone)]
pub struct GlobalScope {
	window: web_sys::Window,
}

impl GlobalScope {
	pub(crate) fn new(window: web_sys::Window) -> Self {
		Self { window }
	}

	/// Registers `listener` for `name` on the window (bubble phase).
	pub fn on(&self, name: &str, listener: &Listener) -> Result<&Self> {
		add_listener(&self.window, name, listener, Phase::Bubble)?;
		Ok(self)
	}

	/// Unregisters a listener previously added with [`GlobalScope::on`].
	pub fn off(&self, name: &str, listener: &Listener) -> Result<&Self> {
		remove_listener(&self.window, name, listener, Phase::Bubble)?;
		Ok(self)
	}

	/// The wrapped window.
	pub fn window(&self) -> &web_sys::Window {
		&self.window
	}
}
