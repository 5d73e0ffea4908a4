//! Attribute operations.
//!
//! [`Dom`](crate::Dom) exposes explicit `attr` / `set_attr` / `remove_attr`
//! methods. [`AttrOp`] keeps the compact three-way form where a single
//! `(name, value)` pair selects the operation:
//!
//! | name | value | operation |
//! |------|-------|-----------|
//! | `"id"` | `Some("x")` | set `id` to `x` |
//! | `"-id"` | `None` | remove `id` |
//! | `"id"` | `None` | read `id` |

/// Prefix marking an attribute name for removal.
pub const REMOVE_MARKER: char = '-';

/// One attribute operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOp {
	/// Read the attribute.
	Get(String),
	/// Set the attribute to a value.
	Set(String, String),
	/// Remove the attribute.
	Remove(String),
}

impl AttrOp {
	/// Parses the compact form.
	///
	/// A value always selects [`AttrOp::Set`], even when the name carries the
	/// removal marker; the name is then used verbatim.
	///
	/// ```
	/// use domey_dom::AttrOp;
	///
	/// assert_eq!(AttrOp::parse("-hidden", None), AttrOp::Remove("hidden".into()));
	/// assert_eq!(AttrOp::parse("id", Some("x")), AttrOp::Set("id".into(), "x".into()));
	/// ```
	pub fn parse(name: &str, value: Option<&str>) -> Self {
		match value {
			Some(value) => Self::Set(name.to_string(), value.to_string()),
			None => match name.strip_prefix(REMOVE_MARKER) {
				Some(stripped) => Self::Remove(stripped.to_string()),
				None => Self::Get(name.to_string()),
			},
		}
	}

	/// Attribute name this operation targets.
	pub fn name(&self) -> &str {
		match self {
			Self::Get(name) | Self::Set(name, _) | Self::Remove(name) => name,
		}
	}

	/// Whether executing this operation mutates the element.
	pub fn is_mutation(&self) -> bool {
		!matches!(self, Self::Get(_))
	}
}
