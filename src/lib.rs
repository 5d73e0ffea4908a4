//! # domey
//!
//! A chainable wrapper over the browser DOM for Rust compiled to WebAssembly.
//!
//! One wrapper type, [`Dom`], holds one document element. Setters return the
//! wrapper so calls chain; getters return values. Lookups by id, class and
//! CSS selector return wrappers.
//!
//! ## Feature Flags
//!
//! - `debug-log` - per-operation debug logging (console on wasm32)
//! - `console_error_panic_hook` - readable panics in the browser console
//!
//! ## Example
//!
//! ```rust,ignore
//! use domey::prelude::*;
//!
//! fn mount_greeting() -> Result<()> {
//!     let greeting = Dom::tag_new("p")?;
//!     greeting.set_attr("id", "greeting")?.set_text("Hello")?;
//!
//!     match Dom::by_id("app")? {
//!         Some(app) => {
//!             app.clean()?.append(&greeting)?;
//!         }
//!         None => warn_log!("no #app element"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod dom;

pub use domey_dom::{
	AttrOp, Dom, DomElement, DomError, ElementSource, GlobalScope, Listener, Phase, Result,
	StyleMap, document, ensure_dom, window,
};
#[cfg(feature = "console_error_panic_hook")]
pub use domey_dom::init_panic_hook;
pub use domey_dom::{debug_log, error_log, info_log, warn_log};

/// Common imports.
pub mod prelude {
	pub use domey_dom::prelude::*;
}
