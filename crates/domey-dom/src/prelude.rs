//! Common imports.
//!
//! ```ignore
//! use domey_dom::prelude::*;
//! ```

pub use crate::attr::AttrOp;
pub use crate::contract::{DomElement, ElementSource};
pub use crate::element::Dom;
pub use crate::error::{DomError, Result};
pub use crate::event::{GlobalScope, Listener, Phase};
pub use crate::style::StyleMap;
pub use crate::{debug_log, error_log, info_log, warn_log};
