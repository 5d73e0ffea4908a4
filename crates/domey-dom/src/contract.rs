//! The element contract.
//!
//! [`DomElement`] lists every operation an element wrapper supports. The
//! primitive operations have guard bodies that fail with
//! [`DomError::NotImplemented`] naming the operation, so a partial
//! implementation fails loudly instead of silently doing nothing. The
//! constructor [`DomElement::create`] fails with [`DomError::Instantiation`]
//! naming the implementing type unless it is overridden.
//!
//! The remaining operations (`apply_attr`, `append_all`, `visible`,
//! `display`, the geometry accessors, `enable`/`disable`, `clean_events`,
//! `map_children`) are provided in terms of the primitives. When a primitive
//! is missing they report [`DomError::NotImplemented`] under their own name.
//!
//! [`Dom`](crate::Dom) implements the full contract on top of `web-sys`.

use crate::attr::AttrOp;
use crate::error::{DomError, Result};
use crate::event::{GlobalScope, Listener, Phase};
use crate::style::{StyleMap, display_value, visibility_value};

/// What a wrapper is constructed from.
#[derive(Debug, Clone, Default)]
pub enum ElementSource {
	/// Create a new element with this tag name.
	Tag(String),
	/// Wrap an existing element.
	Element(web_sys::Element),
	/// Nothing to wrap. Constructing from this always fails.
	#[default]
	Empty,
}

impl From<&str> for ElementSource {
	fn from(tag: &str) -> Self {
		if tag.is_empty() {
			Self::Empty
		} else {
			Self::Tag(tag.to_string())
		}
	}
}

impl From<String> for ElementSource {
	fn from(tag: String) -> Self {
		if tag.is_empty() {
			Self::Empty
		} else {
			Self::Tag(tag)
		}
	}
}

impl From<web_sys::Element> for ElementSource {
	fn from(element: web_sys::Element) -> Self {
		Self::Element(element)
	}
}

impl From<Option<web_sys::Element>> for ElementSource {
	fn from(element: Option<web_sys::Element>) -> Self {
		element.map_or(Self::Empty, Self::Element)
	}
}

/// Operation surface of a document element wrapper.
///
/// Mutating operations return `&Self` so calls chain:
///
/// ```ignore
/// use domey_dom::prelude::*;
///
/// let card = Dom::create("section".into())?;
/// card.set_attr("id", "card")?
///     .add_class("card")?
///     .set_style(&StyleMap::from([("padding", "1rem")]))?
///     .set_text("Hello")?;
/// ```
pub trait DomElement {
	// ---- construction and lookup -------------------------------------------

	/// Builds a wrapper from a tag name or an existing element.
	fn create(source: ElementSource) -> Result<Self>
	where
		Self: Sized,
	{
		let _ = source;
		Err(DomError::instantiation::<Self>())
	}

	/// Element with the given id, if any.
	fn by_id(id: &str) -> Result<Option<Self>>
	where
		Self: Sized,
	{
		let _ = id;
		Err(DomError::not_implemented("by_id"))
	}

	/// Every element carrying the class, in document order.
	fn by_class(class_name: &str) -> Result<Vec<Self>>
	where
		Self: Sized,
	{
		let _ = class_name;
		Err(DomError::not_implemented("by_class"))
	}

	/// First element matching a CSS selector.
	fn by_query(selector: &str) -> Result<Option<Self>>
	where
		Self: Sized,
	{
		let _ = selector;
		Err(DomError::not_implemented("by_query"))
	}

	/// Every element matching a CSS selector, in document order.
	fn by_query_all(selector: &str) -> Result<Vec<Self>>
	where
		Self: Sized,
	{
		let _ = selector;
		Err(DomError::not_implemented("by_query_all"))
	}

	/// Handle for registering listeners on the global scope.
	fn window() -> Result<GlobalScope>
	where
		Self: Sized,
	{
		Err(DomError::not_implemented("window"))
	}

	// ---- attributes --------------------------------------------------------

	/// Attribute value, `None` when absent.
	fn attr(&self, name: &str) -> Result<Option<String>> {
		let _ = name;
		Err(DomError::not_implemented("attr"))
	}

	/// Sets an attribute.
	fn set_attr(&self, name: &str, value: &str) -> Result<&Self> {
		let _ = (name, value);
		Err(DomError::not_implemented("set_attr"))
	}

	/// Removes an attribute. Removing an absent attribute is not an error.
	fn remove_attr(&self, name: &str) -> Result<&Self> {
		let _ = name;
		Err(DomError::not_implemented("remove_attr"))
	}

	/// Runs a parsed [`AttrOp`]. Only [`AttrOp::Get`] yields a value.
	fn apply_attr(&self, op: AttrOp) -> Result<Option<String>> {
		let result = match op {
			AttrOp::Get(name) => self.attr(&name),
			AttrOp::Set(name, value) => self.set_attr(&name, &value).map(|_| None),
			AttrOp::Remove(name) => self.remove_attr(&name).map(|_| None),
		};
		result.map_err(|err| err.within("apply_attr"))
	}

	// ---- events ------------------------------------------------------------

	/// Registers `listener` for the named event.
	fn on(&self, name: &str, listener: &Listener, phase: Phase) -> Result<&Self> {
		let _ = (name, listener, phase);
		Err(DomError::not_implemented("on"))
	}

	/// Unregisters a listener added with the same name and phase.
	fn off(&self, name: &str, listener: &Listener, phase: Phase) -> Result<&Self> {
		let _ = (name, listener, phase);
		Err(DomError::not_implemented("off"))
	}

	// ---- children ----------------------------------------------------------

	/// Appends one child.
	fn append(&self, child: &Self) -> Result<&Self> {
		let _ = child;
		Err(DomError::not_implemented("append"))
	}

	/// Appends children in iteration order.
	fn append_all<'a, I>(&self, children: I) -> Result<&Self>
	where
		I: IntoIterator<Item = &'a Self>,
		Self: 'a,
	{
		for child in children {
			self.append(child).map_err(|err| err.within("append_all"))?;
		}
		Ok(self)
	}

	/// Element children, in document order.
	fn children(&self) -> Result<Vec<Self>>
	where
		Self: Sized,
	{
		Err(DomError::not_implemented("children"))
	}

	/// Applies `f` to each element child and collects the results in order.
	fn map_children<T, F>(&self, f: F) -> Result<Vec<T>>
	where
		Self: Sized,
		F: FnMut(Self) -> T,
	{
		let children = self.children().map_err(|err| err.within("map_children"))?;
		Ok(children.into_iter().map(f).collect())
	}

	// ---- content -----------------------------------------------------------

	/// Clears the inner markup.
	fn clean(&self) -> Result<&Self> {
		Err(DomError::not_implemented("clean"))
	}

	/// Replaces the content with plain text.
	fn set_text(&self, text: &str) -> Result<&Self> {
		let _ = text;
		Err(DomError::not_implemented("set_text"))
	}

	/// The `value` property, `None` when the element has none.
	fn value(&self) -> Result<Option<String>> {
		Err(DomError::not_implemented("value"))
	}

	/// Sets the `value` property.
	fn set_value(&self, value: &str) -> Result<&Self> {
		let _ = value;
		Err(DomError::not_implemented("set_value"))
	}

	/// Adds one class to the class list.
	fn add_class(&self, class_name: &str) -> Result<&Self> {
		let _ = class_name;
		Err(DomError::not_implemented("add_class"))
	}

	/// Inline style value of one property, empty when unset.
	fn style(&self, property: &str) -> Result<String> {
		let _ = property;
		Err(DomError::not_implemented("style"))
	}

	/// Applies every declaration of `style` to the inline style.
	fn set_style(&self, style: &StyleMap) -> Result<&Self> {
		let _ = style;
		Err(DomError::not_implemented("set_style"))
	}

	/// Inner markup.
	fn inner_html(&self) -> Result<String> {
		Err(DomError::not_implemented("inner_html"))
	}

	/// Replaces the inner markup.
	fn set_inner_html(&self, html: &str) -> Result<&Self> {
		let _ = html;
		Err(DomError::not_implemented("set_inner_html"))
	}

	/// Markup of the element itself.
	fn outer_html(&self) -> Result<String> {
		Err(DomError::not_implemented("outer_html"))
	}

	/// Replaces the element in its parent with the parsed markup.
	///
	/// The wrapper keeps pointing at the detached original element.
	fn set_outer_html(&self, html: &str) -> Result<&Self> {
		let _ = html;
		Err(DomError::not_implemented("set_outer_html"))
	}

	// ---- visibility and geometry -------------------------------------------

	/// `visibility: visible` or `visibility: hidden`.
	fn visible(&self, visible: bool) -> Result<&Self> {
		self.set_style(&StyleMap::new().with("visibility", visibility_value(visible)))
			.map_err(|err| err.within("visible"))
	}

	/// Restores stylesheet display, or `display: none`.
	fn display(&self, displayed: bool) -> Result<&Self> {
		self.set_style(&StyleMap::new().with("display", display_value(displayed)))
			.map_err(|err| err.within("display"))
	}

	/// Inline `width`.
	fn width(&self) -> Result<String> {
		self.style("width").map_err(|err| err.within("width"))
	}

	/// Sets inline `width` (any CSS length, e.g. `"10px"`).
	fn set_width(&self, width: &str) -> Result<&Self> {
		self.set_style(&StyleMap::new().with("width", width))
			.map_err(|err| err.within("set_width"))
	}

	/// Inline `height`.
	fn height(&self) -> Result<String> {
		self.style("height").map_err(|err| err.within("height"))
	}

	/// Sets inline `height`.
	fn set_height(&self, height: &str) -> Result<&Self> {
		self.set_style(&StyleMap::new().with("height", height))
			.map_err(|err| err.within("set_height"))
	}

	// ---- structure ---------------------------------------------------------

	/// Removes a direct child.
	fn remove_child(&self, child: &Self) -> Result<&Self> {
		let _ = child;
		Err(DomError::not_implemented("remove_child"))
	}

	/// Puts `node` where this element is. This element is detached.
	fn replace_with(&self, node: &Self) -> Result<&Self> {
		let _ = node;
		Err(DomError::not_implemented("replace_with"))
	}

	/// Deep clone. Listeners are not carried over.
	fn clone_node(&self) -> Result<Self>
	where
		Self: Sized,
	{
		Err(DomError::not_implemented("clone_node"))
	}

	/// Swaps this element for a listener-free clone of itself and returns
	/// the clone, which is the node now in the document.
	fn clean_events(&self) -> Result<Self>
	where
		Self: Sized,
	{
		let fresh = self.clone_node().map_err(|err| err.within("clean_events"))?;
		self.replace_with(&fresh)
			.map_err(|err| err.within("clean_events"))?;
		Ok(fresh)
	}

	/// Detaches the element from the document and drops the wrapper.
	fn destroy(self) -> Result<()>
	where
		Self: Sized,
	{
		Err(DomError::not_implemented("destroy"))
	}

	/// Parent element, `None` for detached or root elements.
	fn parent(&self) -> Result<Option<Self>>
	where
		Self: Sized,
	{
		Err(DomError::not_implemented("parent"))
	}

	/// Tag name as reported by the platform (upper case for HTML).
	fn tag(&self) -> Result<String> {
		Err(DomError::not_implemented("tag"))
	}

	// ---- state -------------------------------------------------------------

	/// Sets the `disabled` property.
	fn set_disabled(&self, disabled: bool) -> Result<&Self> {
		let _ = disabled;
		Err(DomError::not_implemented("set_disabled"))
	}

	/// The `disabled` property; `false` for elements without one.
	fn is_disabled(&self) -> Result<bool> {
		Err(DomError::not_implemented("is_disabled"))
	}

	/// `disabled = false`.
	fn enable(&self) -> Result<&Self> {
		self.set_disabled(false).map_err(|err| err.within("enable"))
	}

	/// `disabled = true`.
	fn disable(&self) -> Result<&Self> {
		self.set_disabled(true).map_err(|err| err.within("disable"))
	}
}
