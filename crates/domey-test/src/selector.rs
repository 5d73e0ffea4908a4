//! Escaping of values embedded in CSS attribute selectors.

/// Escapes `value` for use inside a double-quoted CSS string, e.g.
/// `[data-testid="..."]`.
///
/// Backslashes and double quotes are backslash-escaped; control characters
/// and newlines become hex escapes followed by a space.
pub fn escape_css_string(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'"' | '\\' => {
				out.push('\\');
				out.push(c);
			}
			c if c.is_control() => {
				out.push_str(&format!("\\{:x} ", c as u32));
			}
			c => out.push(c),
		}
	}
	out
}

/// `[name="value"]` with the value escaped.
pub fn attribute_selector(name: &str, value: &str) -> String {
	format!("[{}=\"{}\"]", name, escape_css_string(value))
}
