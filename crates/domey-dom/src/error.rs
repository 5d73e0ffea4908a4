//! Error types for element operations.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result alias used by every element operation.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors produced by the element contract and the [`Dom`](crate::Dom) wrapper.
///
/// `Instantiation` and `NotImplemented` signal programmer misuse of the
/// [`DomElement`](crate::DomElement) contract and are not meant to be retried.
/// `Platform` carries an exception thrown by the browser unchanged in meaning.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
	/// The contract constructor was reached without an implementation, or a
	/// wrapper was requested without any element to wrap.
	#[error("Cannot instantiate {type_name} directly. Use the right implementation.")]
	Instantiation {
		/// Name of the type that could not be instantiated.
		type_name: &'static str,
	},

	/// A contract operation was invoked on a type that does not provide it.
	#[error("{method} must be implemented by the element type")]
	NotImplemented {
		/// Name of the missing operation.
		method: &'static str,
	},

	/// No global `window` object (not running in a browser context).
	#[error("This library needs to exist on context where DOM exists: window not available")]
	NoWindow,

	/// The global window has no document attached.
	#[error("This library needs to exist on context where DOM exists: document not available")]
	NoDocument,

	/// A DOM API call threw.
	#[error("{operation} failed: {message}")]
	Platform {
		/// DOM API that threw (e.g. `querySelector`).
		operation: &'static str,
		/// Message extracted from the thrown value.
		message: String,
	},
}

impl DomError {
	/// Builds a [`DomError::NotImplemented`] for `method`.
	pub fn not_implemented(method: &'static str) -> Self {
		Self::NotImplemented { method }
	}

	/// Builds a [`DomError::Instantiation`] naming `T`.
	pub fn instantiation<T: ?Sized>() -> Self {
		Self::Instantiation {
			type_name: short_type_name(std::any::type_name::<T>()),
		}
	}

	/// Converts a thrown JS value into a [`DomError::Platform`].
	pub fn platform(operation: &'static str, thrown: &JsValue) -> Self {
		let message = js_message(thrown);
		crate::warn_log!("{} failed: {}", operation, message);
		Self::Platform { operation, message }
	}

	/// Renames a [`DomError::NotImplemented`] to `method`, leaving every other
	/// variant untouched.
	///
	/// Provided operations use this so a missing primitive is reported under
	/// the operation the caller invoked.
	pub fn within(self, method: &'static str) -> Self {
		match self {
			Self::NotImplemented { .. } => Self::NotImplemented { method },
			other => other,
		}
	}

	/// Returns `true` for the two contract-misuse variants.
	pub fn is_contract_violation(&self) -> bool {
		matches!(
			self,
			Self::Instantiation { .. } | Self::NotImplemented { .. }
		)
	}
}

/// Strips the module path from a type name (`domey_dom::element::Dom` -> `Dom`).
///
/// Generic arguments are kept as-is.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
	let head_end = full.find('<').unwrap_or(full.len());
	match full[..head_end].rfind("::") {
		Some(idx) => &full[idx + 2..],
		None => full,
	}
}

fn js_message(thrown: &JsValue) -> String {
	if let Some(error) = thrown.dyn_ref::<js_sys::Error>() {
		return String::from(error.message());
	}
	thrown
		.as_string()
		.unwrap_or_else(|| format!("{:?}", thrown))
}

/// Maps `Result<T, JsValue>` from `web-sys` into [`Result<T>`].
pub(crate) trait JsResultExt<T> {
	fn or_platform(self, operation: &'static str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
	fn or_platform(self, operation: &'static str) -> Result<T> {
		self.map_err(|thrown| DomError::platform(operation, &thrown))
	}
}
