//! Browser tests for the element wrapper.
//!
//! Run with:
//!   wasm-pack test --headless --chrome crates/domey-dom

#![cfg(target_arch = "wasm32")]

use domey_dom::prelude::*;
use domey_test::wasm::{Sandbox, Screen};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn div() -> Dom {
	Dom::tag_new("div").unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[wasm_bindgen_test]
fn test_ensure_dom_in_browser() {
	assert_eq!(domey_dom::ensure_dom(), Ok(()));
	assert!(domey_dom::document().unwrap().body().is_some());
}

#[wasm_bindgen_test]
fn test_create_from_tag_uses_platform_tag_name() {
	for tag in ["div", "span", "section", "button"] {
		let dom = Dom::tag_new(tag).unwrap();
		assert_eq!(dom.tag().unwrap(), tag.to_uppercase());
	}
}

#[wasm_bindgen_test]
fn test_create_from_existing_element_wraps_same_node() {
	let sandbox = Sandbox::new();
	let raw = sandbox.root().element().clone();

	let wrapped = Dom::create(ElementSource::from(raw)).unwrap();

	assert!(wrapped.is_same_node(sandbox.root()));
	assert_eq!(&wrapped, sandbox.root());
}

#[wasm_bindgen_test]
fn test_create_from_empty_source_is_instantiation_error() {
	let err = Dom::create(ElementSource::Empty).unwrap_err();
	assert_eq!(err, DomError::Instantiation { type_name: "Dom" });

	let err = Dom::tag_new("").unwrap_err();
	assert!(err.is_contract_violation());
}

#[wasm_bindgen_test]
fn test_create_with_invalid_tag_is_platform_error() {
	let err = Dom::tag_new("not a tag").unwrap_err();
	assert!(matches!(
		err,
		DomError::Platform {
			operation: "createElement",
			..
		}
	));
}

// ============================================================================
// Lookups
// ============================================================================

#[wasm_bindgen_test]
fn test_by_id_finds_mounted_element() {
	let sandbox = Sandbox::new();
	let el = div();
	el.set_attr("id", "lookup-x").unwrap();
	sandbox.mount(&el);

	let found = Dom::by_id("lookup-x").unwrap().expect("element by id");

	assert!(found.is_same_node(&el));
}

#[wasm_bindgen_test]
fn test_by_id_missing_is_none() {
	assert!(Dom::by_id("definitely-not-mounted").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_by_class_returns_each_match_in_order() {
	let sandbox = Sandbox::new();
	let first = div();
	let second = div();
	first.add_class("lookup-card").unwrap().set_text("1").unwrap();
	second.add_class("lookup-card").unwrap().set_text("2").unwrap();
	sandbox.root().append_all([&first, &second]).unwrap();

	let found = Dom::by_class("lookup-card").unwrap();

	assert_eq!(found.len(), 2);
	assert!(found[0].is_same_node(&first));
	assert!(found[1].is_same_node(&second));
	assert!(Dom::by_class("lookup-none").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_by_query_first_match_and_all_matches() {
	let sandbox = Sandbox::new();
	sandbox
		.root()
		.set_inner_html(r#"<p class="q">a</p><p class="q">b</p><p class="q">c</p>"#)
		.unwrap();
	let scope = format!("#{} p.q", sandbox.id());

	let first = Dom::by_query(&scope).unwrap().expect("first match");
	assert_eq!(first.inner_html().unwrap(), "a");

	let all = Dom::by_query_all(&scope).unwrap();
	let texts: Vec<String> = all.iter().map(|p| p.inner_html().unwrap()).collect();
	assert_eq!(texts, vec!["a", "b", "c"]);

	assert!(Dom::by_query("#nowhere > .nothing").unwrap().is_none());
	assert!(Dom::by_query_all("#nowhere > .nothing").unwrap().is_empty());
}

#[wasm_bindgen_test]
fn test_by_query_invalid_selector_propagates_platform_error() {
	let err = Dom::by_query("div >").unwrap_err();
	assert!(matches!(
		err,
		DomError::Platform {
			operation: "querySelector",
			..
		}
	));

	let err = Dom::by_query_all("[[").unwrap_err();
	assert!(matches!(
		err,
		DomError::Platform {
			operation: "querySelectorAll",
			..
		}
	));
}

// ============================================================================
// Attributes
// ============================================================================

#[wasm_bindgen_test]
fn test_attribute_set_get_remove() {
	let el = div();

	el.set_attr("data-state", "open").unwrap();
	assert_eq!(el.attr("data-state").unwrap().as_deref(), Some("open"));

	el.remove_attr("data-state").unwrap();
	assert_eq!(el.attr("data-state").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_attribute_compact_form() {
	let el = div();

	el.apply_attr(AttrOp::parse("title", Some("Tip"))).unwrap();
	assert_eq!(
		el.apply_attr(AttrOp::parse("title", None)).unwrap().as_deref(),
		Some("Tip")
	);

	el.apply_attr(AttrOp::parse("-title", None)).unwrap();
	assert_eq!(el.attr("title").unwrap(), None);
}

// ============================================================================
// Chaining
// ============================================================================

#[wasm_bindgen_test]
fn test_chainable_operations_return_same_wrapper() {
	let el = Dom::tag_new("button").unwrap();
	let child = div();

	let returned = el
		.set_attr("type", "button")
		.and_then(|d| d.add_class("primary"))
		.and_then(|d| d.set_style(&StyleMap::from([("color", "red")])))
		.and_then(|d| d.set_text("Save"))
		.and_then(|d| d.append(&child))
		.and_then(|d| d.disable())
		.and_then(|d| d.enable())
		.and_then(|d| d.visible(false))
		.and_then(|d| d.display(false))
		.unwrap();

	assert!(std::ptr::eq(returned, &el));
}

// ============================================================================
// Children
// ============================================================================

#[wasm_bindgen_test]
fn test_children_in_insertion_order() {
	let parent = div();
	let a = Dom::tag_new("a").unwrap();
	let b = Dom::tag_new("b").unwrap();

	parent.append_all([&a, &b]).unwrap();

	let children = parent.children().unwrap();
	assert_eq!(children.len(), 2);
	assert!(children[0].is_same_node(&a));
	assert!(children[1].is_same_node(&b));
}

#[wasm_bindgen_test]
fn test_map_children_collects_in_order() {
	let list = Dom::tag_new("ul").unwrap();
	list.set_inner_html("<li>one</li><li>two</li><li>three</li>")
		.unwrap();

	let labels = list
		.map_children(|li| li.inner_html().unwrap())
		.unwrap();

	assert_eq!(labels, vec!["one", "two", "three"]);
}

#[wasm_bindgen_test]
fn test_remove_child_and_parent() {
	let parent = div();
	let child = Dom::tag_new("span").unwrap();
	parent.append(&child).unwrap();

	assert!(child.parent().unwrap().expect("parent").is_same_node(&parent));

	parent.remove_child(&child).unwrap();
	assert!(parent.children().unwrap().is_empty());
	assert!(child.parent().unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_remove_child_of_stranger_is_platform_error() {
	let parent = div();
	let stranger = div();

	let err = parent.remove_child(&stranger).unwrap_err();
	assert!(matches!(
		err,
		DomError::Platform {
			operation: "removeChild",
			..
		}
	));
}

// ============================================================================
// Content
// ============================================================================

#[wasm_bindgen_test]
fn test_text_and_clean() {
	let el = div();

	el.set_text("<b>not markup</b>").unwrap();
	assert_eq!(el.inner_html().unwrap(), "&lt;b&gt;not markup&lt;/b&gt;");

	el.clean().unwrap();
	assert_eq!(el.inner_html().unwrap(), "");
}

#[wasm_bindgen_test]
fn test_inner_and_outer_html() {
	let sandbox = Sandbox::new();
	let el = div();
	sandbox.mount(&el);

	el.set_inner_html("<em>hi</em>").unwrap();
	assert_eq!(el.inner_html().unwrap(), "<em>hi</em>");
	assert_eq!(el.outer_html().unwrap(), "<div><em>hi</em></div>");

	el.set_outer_html(r#"<section data-testid="swapped"></section>"#)
		.unwrap();
	sandbox.screen().get_by_test_id("swapped").should_exist();
	assert!(el.parent().unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_value_roundtrip() {
	let input = Dom::tag_new("input").unwrap();

	assert_eq!(input.value().unwrap().as_deref(), Some(""));
	input.set_value("typed").unwrap();
	assert_eq!(input.value().unwrap().as_deref(), Some("typed"));
}

#[wasm_bindgen_test]
fn test_numeric_value_is_formatted() {
	let item = Dom::tag_new("li").unwrap();
	assert_eq!(item.value().unwrap().as_deref(), Some("0"));
	item.set_attr("value", "3").unwrap();
	assert_eq!(item.value().unwrap().as_deref(), Some("3"));

	let progress = Dom::tag_new("progress").unwrap();
	progress.set_attr("max", "1").unwrap().set_value("0.5").unwrap();
	assert_eq!(progress.value().unwrap().as_deref(), Some("0.5"));
}

#[wasm_bindgen_test]
fn test_set_outer_html_on_document_element_is_platform_error() {
	let root = domey_dom::document().unwrap().document_element().unwrap();
	let result = Dom::from(root).set_outer_html("<html></html>");

	assert!(matches!(
		result,
		Err(DomError::Platform { operation: "outerHTML", .. })
	));
}

#[wasm_bindgen_test]
fn test_value_on_plain_element_is_none() {
	assert_eq!(div().value().unwrap(), None);
}

#[wasm_bindgen_test]
fn test_add_class() {
	let el = div();
	el.add_class("a").unwrap().add_class("b").unwrap();

	assert_eq!(el.attr("class").unwrap().as_deref(), Some("a b"));
}

// ============================================================================
// Style, visibility, geometry
// ============================================================================

#[wasm_bindgen_test]
fn test_style_map_then_get() {
	let el = div();

	el.set_style(&StyleMap::from([("color", "red"), ("width", "10px")]))
		.unwrap();

	assert_eq!(el.style("color").unwrap(), "red");
	assert_eq!(el.style("width").unwrap(), "10px");
	assert_eq!(el.style("background-color").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_style_camel_case_names() {
	let el = div();

	el.set_style(&StyleMap::from([("backgroundColor", "blue")]))
		.unwrap();

	assert_eq!(el.style("background-color").unwrap(), "blue");
	assert_eq!(el.style("backgroundColor").unwrap(), "blue");
}

#[wasm_bindgen_test]
fn test_visible_and_display() {
	let el = div();

	el.visible(false).unwrap().display(false).unwrap();
	assert_eq!(el.style("visibility").unwrap(), "hidden");
	assert_eq!(el.style("display").unwrap(), "none");

	el.visible(true).unwrap().display(true).unwrap();
	assert_eq!(el.style("visibility").unwrap(), "visible");
	assert_eq!(el.style("display").unwrap(), "");
}

#[wasm_bindgen_test]
fn test_width_and_height() {
	let el = div();

	el.set_width("120px").unwrap().set_height("3em").unwrap();

	assert_eq!(el.width().unwrap(), "120px");
	assert_eq!(el.height().unwrap(), "3em");
}

// ============================================================================
// Structure
// ============================================================================

#[wasm_bindgen_test]
fn test_clone_node_is_distinct_with_same_markup() {
	let el = div();
	el.set_attr("id", "clone-src")
		.unwrap()
		.set_inner_html("<span>x</span>")
		.unwrap();

	let copy = el.clone_node().unwrap();

	assert!(!copy.is_same_node(&el));
	assert_ne!(copy, el);
	assert_eq!(copy.outer_html().unwrap(), el.outer_html().unwrap());
}

#[wasm_bindgen_test]
fn test_replace_with_swaps_node_in_parent() {
	let parent = div();
	let old = Dom::tag_new("span").unwrap();
	let new = Dom::tag_new("em").unwrap();
	parent.append(&old).unwrap();

	old.replace_with(&new).unwrap();

	let children = parent.children().unwrap();
	assert_eq!(children.len(), 1);
	assert!(children[0].is_same_node(&new));
	assert!(old.parent().unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_destroy_detaches_element() {
	let sandbox = Sandbox::new();
	let el = div();
	el.set_attr("data-testid", "doomed").unwrap();
	sandbox.mount(&el);
	sandbox.screen().get_by_test_id("doomed").should_exist();

	el.destroy().unwrap();

	sandbox.screen().get_by_test_id("doomed").should_not_exist();
}

#[wasm_bindgen_test]
fn test_disable_enable() {
	let button = Dom::tag_new("button").unwrap();

	button.disable().unwrap();
	assert!(button.is_disabled().unwrap());
	assert!(button.attr("disabled").unwrap().is_some());

	button.enable().unwrap();
	assert!(!button.is_disabled().unwrap());
	assert_eq!(button.attr("disabled").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_screen_over_whole_document_sees_sandbox() {
	let sandbox = Sandbox::new();
	let el = Dom::tag_new("p").unwrap();
	el.set_text("screen sees me").unwrap();
	sandbox.mount(&el);

	let found = Screen::new().get_by_text("SCREEN SEES ME").get_only();
	assert!(found.is_same_node(&el));
}
