//! Inline style maps and property name normalization.
//!
//! The platform's `style.setProperty` only understands hyphenated names, while
//! code written against `element.style.fontSize` uses camelCase. Both spellings
//! are accepted here and normalized by [`css_property_name`].

use std::borrow::Cow;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// `visibility` values written by [`Dom::visible`](crate::Dom).
pub(crate) fn visibility_value(visible: bool) -> &'static str {
	if visible { "visible" } else { "hidden" }
}

/// `display` values written by [`Dom::display`](crate::Dom). An empty value
/// hands display back to the stylesheet.
pub(crate) fn display_value(displayed: bool) -> &'static str {
	if displayed { "" } else { "none" }
}

/// Converts a property name to the hyphenated form expected by
/// `CSSStyleDeclaration.setProperty`.
///
/// - `fontSize` -> `font-size`
/// - `webkitTransform` / `WebkitTransform` -> `-webkit-transform`
/// - `cssFloat` -> `float`
/// - already hyphenated names and custom properties (`--gap`) are unchanged
///
/// ```
/// use domey_dom::css_property_name;
///
/// assert_eq!(css_property_name("backgroundColor"), "background-color");
/// assert_eq!(css_property_name("--main-gap"), "--main-gap");
/// ```
pub fn css_property_name(name: &str) -> Cow<'_, str> {
	if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
		return Cow::Borrowed(name);
	}
	if name == "cssFloat" {
		return Cow::Borrowed("float");
	}

	let mut out = String::with_capacity(name.len() + 4);
	let vendor = ["webkit", "moz", "ms", "o"]
		.iter()
		.find(|prefix| {
			name.get(..prefix.len())
				.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
				&& name[prefix.len()..].starts_with(|c: char| c.is_ascii_uppercase())
		});
	let rest = match vendor {
		Some(prefix) => {
			out.push('-');
			out.push_str(prefix);
			&name[prefix.len()..]
		}
		None => name,
	};

	for (i, c) in rest.chars().enumerate() {
		if c.is_ascii_uppercase() {
			if i > 0 || vendor.is_some() {
				out.push('-');
			}
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}

/// Ordered set of inline style declarations.
///
/// Declarations are applied in insertion order; a later entry for the same
/// property wins.
///
/// ```
/// use domey_dom::StyleMap;
///
/// let style = StyleMap::from([("color", "red"), ("width", "10px")]);
/// assert_eq!(style.get("color"), Some("red"));
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
	entries: Vec<(String, String)>,
}

impl StyleMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a declaration, builder style.
	pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(property, value);
		self
	}

	/// Adds a declaration.
	pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
		self.entries.push((property.into(), value.into()));
	}

	/// Last value given for `property`, matching either spelling.
	pub fn get(&self, property: &str) -> Option<&str> {
		let wanted = css_property_name(property);
		self.entries
			.iter()
			.rev()
			.find(|(name, _)| css_property_name(name) == wanted)
			.map(|(_, value)| value.as_str())
	}

	/// Number of declarations, duplicates included.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no declaration was added.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Declarations as `(css-name, value)` in application order.
	pub fn declarations(&self) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
		self.entries
			.iter()
			.map(|(name, value)| (css_property_name(name), value.as_str()))
	}
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

/// Accepts a JSON-like object whose values are strings or numbers, keeping
/// the document order of the keys.
impl<'de> Deserialize<'de> for StyleMap {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(StyleMapVisitor)
	}
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum StyleValue {
	Text(String),
	Integer(i64),
	Float(f64),
}

impl From<StyleValue> for String {
	fn from(value: StyleValue) -> Self {
		match value {
			StyleValue::Text(text) => text,
			StyleValue::Integer(n) => n.to_string(),
			StyleValue::Float(n) => n.to_string(),
		}
	}
}

struct StyleMapVisitor;

impl<'de> Visitor<'de> for StyleMapVisitor {
	type Value = StyleMap;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a map of CSS property names to string or number values")
	}

	fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut map = StyleMap::new();
		while let Some((name, value)) = access.next_entry::<String, StyleValue>()? {
			map.insert(name, value);
		}
		Ok(map)
	}
}
