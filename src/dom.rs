//! Chainable element wrapper
//!
//! This module provides access to domey-dom: the [`DomElement`] contract and
//! its `web-sys` implementation [`Dom`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use domey::dom::prelude::*;
//!
//! let banner = Dom::tag_new("div")?;
//! banner
//!     .add_class("banner")?
//!     .set_style(&StyleMap::from([("backgroundColor", "gold")]))?
//!     .set_text("Saved")?;
//!
//! for card in Dom::by_class("card")? {
//!     card.display(false)?;
//! }
//! ```

// Re-export all domey-dom functionality
pub use domey_dom::*;
