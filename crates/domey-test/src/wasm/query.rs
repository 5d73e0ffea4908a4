//! DOM queries for browser tests.
//!
//! Queries return [`QueryResult`], which hands out [`Dom`] wrappers and makes
//! assertions with messages naming the query.
//!
//! # Example
//!
//! ```rust,ignore
//! use domey_test::wasm::Screen;
//!
//! let screen = Screen::new();
//! let save = screen.get_by_text("Save").get_only();
//! screen.get_by_test_id("spinner").should_not_exist();
//! ```

use domey_dom::Dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList, window};

use crate::selector::attribute_selector;

/// Result of a DOM query.
#[derive(Debug, Clone)]
pub struct QueryResult {
	elements: Vec<Element>,
	query_description: String,
}

impl QueryResult {
	fn new(elements: Vec<Element>, description: impl Into<String>) -> Self {
		Self {
			elements,
			query_description: description.into(),
		}
	}

	/// Wrapper of the single match.
	///
	/// # Panics
	///
	/// Panics if zero or more than one element matched.
	pub fn get_only(&self) -> Dom {
		match self.elements.as_slice() {
			[] => panic!("No element found for query: {}", self.query_description),
			[only] => Dom::from(only.clone()),
			many => panic!(
				"Expected exactly one element for query '{}', but found {}",
				self.query_description,
				many.len()
			),
		}
	}

	/// Assert that the element exists.
	///
	/// # Panics
	///
	/// Panics if no elements match.
	pub fn should_exist(&self) {
		if self.elements.is_empty() {
			panic!(
				"Expected element to exist for query: {}",
				self.query_description
			);
		}
	}

	/// Assert that no elements match.
	///
	/// # Panics
	///
	/// Panics if any elements match.
	pub fn should_not_exist(&self) {
		if !self.elements.is_empty() {
			panic!(
				"Expected no elements for query '{}', but found {}",
				self.query_description,
				self.elements.len()
			);
		}
	}
}

/// Entry point for queries, over the whole document or one subtree.
#[derive(Debug, Clone, Default)]
pub struct Screen {
	root: Option<Element>,
}

impl Screen {
	/// Queries the document body.
	pub fn new() -> Self {
		Self { root: None }
	}

	/// Queries only inside `root` and its descendants.
	pub fn within(root: &Dom) -> Self {
		Self {
			root: Some(root.element().clone()),
		}
	}

	fn query_root(&self) -> Option<Element> {
		match self.root {
			Some(ref root) => Some(root.clone()),
			None => window()
				.and_then(|w| w.document())
				.and_then(|d| d.body())
				.map(Element::from),
		}
	}

	fn query_selector_all(&self, selector: &str) -> Vec<Element> {
		let Some(root) = self.query_root() else {
			return Vec::new();
		};

		root.query_selector_all(selector)
			.ok()
			.map(|list| node_list_to_elements(&list))
			.unwrap_or_default()
	}

	/// Elements with the given `data-testid`.
	pub fn get_by_test_id(&self, test_id: &str) -> QueryResult {
		let elements = self.query_selector_all(&attribute_selector("data-testid", test_id));
		QueryResult::new(elements, format!("data-testid=\"{}\"", test_id))
	}

	/// Innermost elements whose text contains `text` (case-insensitive).
	pub fn get_by_text(&self, text: &str) -> QueryResult {
		let mut results = Vec::new();
		if let Some(root) = self.query_root() {
			find_text_recursive(&root, &text.to_lowercase(), &mut results);
		}
		QueryResult::new(results, format!("text=\"{}\"", text))
	}
}

fn node_list_to_elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Collects the most specific elements containing the text.
fn find_text_recursive(element: &Element, text_lower: &str, results: &mut Vec<Element>) {
	let element_text = element.text_content().unwrap_or_default().to_lowercase();
	if !element_text.contains(text_lower) {
		return;
	}

	let children = element.children();
	let mut child_has_text = false;
	for i in 0..children.length() {
		if let Some(child) = children.get_with_index(i) {
			let child_text = child.text_content().unwrap_or_default().to_lowercase();
			if child_text.contains(text_lower) {
				child_has_text = true;
				find_text_recursive(&child, text_lower, results);
			}
		}
	}
	if !child_has_text {
		results.push(element.clone());
	}
}
