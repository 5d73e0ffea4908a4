//! The element wrapper.
//!
//! [`Dom`] holds one `web_sys::Element` and implements [`DomElement`] by
//! forwarding each operation to the matching DOM API. Exceptions thrown by the
//! browser come back as [`DomError::Platform`]; nothing else is validated.
//!
//! ## Example
//!
//! ```ignore
//! use domey_dom::prelude::*;
//!
//! let list = Dom::tag_new("ul")?;
//! let items: Vec<Dom> = ["one", "two"]
//!     .iter()
//!     .map(|label| {
//!         let li = Dom::tag_new("li")?;
//!         li.set_text(label)?;
//!         Ok(li)
//!     })
//!     .collect::<Result<_>>()?;
//!
//! list.add_class("menu")?.append_all(&items)?;
//! Dom::by_id("sidebar")?.expect("sidebar").append(&list)?;
//! ```

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Element, HtmlCollection, NodeList};

use crate::contract::{DomElement, ElementSource};
use crate::debug_log;
use crate::document::{document, window};
use crate::error::{DomError, JsResultExt, Result};
use crate::event::{GlobalScope, Listener, Phase, add_listener, remove_listener};
use crate::style::{StyleMap, css_property_name};

/// Chainable wrapper around one document element.
///
/// The wrapped handle is fixed at construction. Equality compares node
/// identity, so two wrappers obtained from different lookups of the same
/// node are equal.
#[derive(Debug, PartialEq, Eq)]
pub struct Dom {
	element: Element,
}

impl Dom {
	/// Creates a new, detached element with the given tag.
	pub fn tag_new(tag: &str) -> Result<Self> {
		Self::create(ElementSource::from(tag))
	}

	/// The wrapped element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Unwraps the element.
	pub fn into_element(self) -> Element {
		self.element
	}

	/// Whether both wrappers point at the same node.
	pub fn is_same_node(&self, other: &Dom) -> bool {
		let node: &web_sys::Node = &other.element;
		self.element.is_same_node(Some(node))
	}

	fn inline_style(&self) -> Result<CssStyleDeclaration> {
		js_sys::Reflect::get(&self.element, &JsValue::from_str("style"))
			.or_platform("style")?
			.dyn_into::<CssStyleDeclaration>()
			.map_err(|_| DomError::Platform {
				operation: "style",
				message: format!("<{}> has no inline style", self.element.tag_name()),
			})
	}

	fn set_property(&self, name: &'static str, value: &JsValue) -> Result<()> {
		js_sys::Reflect::set(&self.element, &JsValue::from_str(name), value)
			.or_platform(name)
			.map(|_| ())
	}

	fn get_property(&self, name: &'static str) -> Result<JsValue> {
		js_sys::Reflect::get(&self.element, &JsValue::from_str(name)).or_platform(name)
	}
}

impl From<Element> for Dom {
	fn from(element: Element) -> Self {
		Self { element }
	}
}

impl AsRef<Element> for Dom {
	fn as_ref(&self) -> &Element {
		&self.element
	}
}

fn collect_collection(collection: HtmlCollection) -> Vec<Dom> {
	(0..collection.length())
		.filter_map(|i| collection.item(i))
		.map(Dom::from)
		.collect()
}

fn collect_node_list(nodes: NodeList) -> Vec<Dom> {
	(0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.map(Dom::from)
		.collect()
}

impl DomElement for Dom {
	fn create(source: ElementSource) -> Result<Self> {
		match source {
			ElementSource::Tag(tag) => {
				debug_log!("createElement <{}>", tag);
				let element = document()?.create_element(&tag).or_platform("createElement")?;
				Ok(Self { element })
			}
			ElementSource::Element(element) => Ok(Self { element }),
			ElementSource::Empty => Err(DomError::instantiation::<Self>()),
		}
	}

	fn by_id(id: &str) -> Result<Option<Self>> {
		let found = document()?.get_element_by_id(id).map(Self::from);
		if found.is_none() {
			debug_log!("getElementById: no element with id {:?}", id);
		}
		Ok(found)
	}

	fn by_class(class_name: &str) -> Result<Vec<Self>> {
		Ok(collect_collection(
			document()?.get_elements_by_class_name(class_name),
		))
	}

	fn by_query(selector: &str) -> Result<Option<Self>> {
		let found = document()?
			.query_selector(selector)
			.or_platform("querySelector")?;
		Ok(found.map(Self::from))
	}

	fn by_query_all(selector: &str) -> Result<Vec<Self>> {
		let nodes = document()?
			.query_selector_all(selector)
			.or_platform("querySelectorAll")?;
		Ok(collect_node_list(nodes))
	}

	fn window() -> Result<GlobalScope> {
		Ok(GlobalScope::new(window()?))
	}

	fn attr(&self, name: &str) -> Result<Option<String>> {
		Ok(self.element.get_attribute(name))
	}

	fn set_attr(&self, name: &str, value: &str) -> Result<&Self> {
		debug_log!("setAttribute {}={:?}", name, value);
		self.element
			.set_attribute(name, value)
			.or_platform("setAttribute")?;
		Ok(self)
	}

	fn remove_attr(&self, name: &str) -> Result<&Self> {
		debug_log!("removeAttribute {}", name);
		self.element
			.remove_attribute(name)
			.or_platform("removeAttribute")?;
		Ok(self)
	}

	fn on(&self, name: &str, listener: &Listener, phase: Phase) -> Result<&Self> {
		add_listener(&self.element, name, listener, phase)?;
		Ok(self)
	}

	fn off(&self, name: &str, listener: &Listener, phase: Phase) -> Result<&Self> {
		remove_listener(&self.element, name, listener, phase)?;
		Ok(self)
	}

	fn append(&self, child: &Self) -> Result<&Self> {
		self.element
			.append_child(&child.element)
			.or_platform("appendChild")?;
		Ok(self)
	}

	fn children(&self) -> Result<Vec<Self>> {
		Ok(collect_collection(self.element.children()))
	}

	fn clean(&self) -> Result<&Self> {
		self.element.set_inner_html("");
		Ok(self)
	}

	fn set_text(&self, text: &str) -> Result<&Self> {
		self.element.set_text_content(Some(text));
		Ok(self)
	}

	fn value(&self) -> Result<Option<String>> {
		// `<li>`, `<progress>` and `<meter>` expose a numeric `value`.
		let value = self.get_property("value")?;
		Ok(value
			.as_string()
			.or_else(|| value.as_f64().map(|number| number.to_string())))
	}

	fn set_value(&self, value: &str) -> Result<&Self> {
		self.set_property("value", &JsValue::from_str(value))?;
		Ok(self)
	}

	fn add_class(&self, class_name: &str) -> Result<&Self> {
		self.element
			.class_list()
			.add_1(class_name)
			.or_platform("classList.add")?;
		Ok(self)
	}

	fn style(&self, property: &str) -> Result<String> {
		self.inline_style()?
			.get_property_value(&css_property_name(property))
			.or_platform("getPropertyValue")
	}

	fn set_style(&self, style: &StyleMap) -> Result<&Self> {
		let declaration = self.inline_style()?;
		for (name, value) in style.declarations() {
			debug_log!("style {}: {}", name, value);
			declaration
				.set_property(&name, value)
				.or_platform("setProperty")?;
		}
		Ok(self)
	}

	fn inner_html(&self) -> Result<String> {
		Ok(self.element.inner_html())
	}

	fn set_inner_html(&self, html: &str) -> Result<&Self> {
		self.element.set_inner_html(html);
		Ok(self)
	}

	fn outer_html(&self) -> Result<String> {
		Ok(self.element.outer_html())
	}

	fn set_outer_html(&self, html: &str) -> Result<&Self> {
		// The setter throws for the document element; go through Reflect so
		// that surfaces as an error.
		self.set_property("outerHTML", &JsValue::from_str(html))?;
		Ok(self)
	}

	fn remove_child(&self, child: &Self) -> Result<&Self> {
		self.element
			.remove_child(&child.element)
			.or_platform("removeChild")?;
		Ok(self)
	}

	fn replace_with(&self, node: &Self) -> Result<&Self> {
		self.element
			.replace_with_with_node_1(&node.element)
			.or_platform("replaceWith")?;
		Ok(self)
	}

	fn clone_node(&self) -> Result<Self> {
		let node = self
			.element
			.clone_node_with_deep(true)
			.or_platform("cloneNode")?;
		node.dyn_into::<Element>()
			.map(Self::from)
			.map_err(|_| DomError::Platform {
				operation: "cloneNode",
				message: "clone is not an element".to_string(),
			})
	}

	fn destroy(self) -> Result<()> {
		debug_log!("remove <{}>", self.element.tag_name());
		self.element.remove();
		Ok(())
	}

	fn parent(&self) -> Result<Option<Self>> {
		Ok(self.element.parent_element().map(Self::from))
	}

	fn tag(&self) -> Result<String> {
		Ok(self.element.tag_name())
	}

	fn set_disabled(&self, disabled: bool) -> Result<&Self> {
		self.set_property("disabled", &JsValue::from_bool(disabled))?;
		Ok(self)
	}

	fn is_disabled(&self) -> Result<bool> {
		Ok(self.get_property("disabled")?.as_bool().unwrap_or(false))
	}
}
