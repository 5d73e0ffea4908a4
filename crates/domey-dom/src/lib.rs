//! domey-dom - chainable wrapper over the browser DOM
//!
//! One wrapper type, [`Dom`], holds one document element and forwards every
//! operation to the platform API through `web-sys`. Mutating operations
//! return `&Self` so calls chain; reads return values.
//!
//! ## Modules
//!
//! - [`contract`]: the [`DomElement`] trait listing every operation, with
//!   guard defaults that name the missing operation
//! - [`element`]: [`Dom`], the `web-sys` implementation
//! - [`event`]: [`Listener`], [`Phase`] and [`GlobalScope`] (window events)
//! - [`attr`]: [`AttrOp`], the compact get/set/remove attribute form
//! - [`style`]: [`StyleMap`] and CSS property name normalization
//! - [`document`]: global window/document access
//! - [`logging`]: `debug_log!` and friends
//!
//! ## Example
//!
//! ```ignore
//! use domey_dom::prelude::*;
//!
//! let saved = Listener::new(|_| info_log!("saved"));
//!
//! let button = Dom::tag_new("button")?;
//! button
//!     .set_attr("type", "submit")?
//!     .add_class("primary")?
//!     .set_style(&StyleMap::from([("padding", "4px 8px")]))?
//!     .set_text("Save")?
//!     .on("click", &saved, Phase::Bubble)?;
//!
//! if let Some(form) = Dom::by_query("form#settings")? {
//!     form.append(&button)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `debug-log`: per-operation debug logging (with `debug_assertions`)
//! - `console_error_panic_hook`: enables [`init_panic_hook`]

#![warn(missing_docs)]

pub mod attr;
pub mod contract;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod logging;
pub mod prelude;
pub mod style;

#[doc(hidden)]
pub use web_sys;

pub use attr::{AttrOp, REMOVE_MARKER};
pub use contract::{DomElement, ElementSource};
#[cfg(feature = "console_error_panic_hook")]
pub use document::init_panic_hook;
pub use document::{document, ensure_dom, window};
pub use element::Dom;
pub use error::{DomError, Result};
pub use event::{GlobalScope, Listener, Phase};
pub use style::{StyleMap, css_property_name};
