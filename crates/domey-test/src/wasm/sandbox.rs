//! Per-test container mounted under `<body>`.

use std::sync::atomic::{AtomicUsize, Ordering};

use domey_dom::{Dom, DomElement};

use super::query::Screen;

static NEXT_SANDBOX: AtomicUsize = AtomicUsize::new(0);

/// A `<div>` appended to `<body>` for one test and removed on drop.
///
/// Each sandbox gets a unique `id` and `data-testid` so tests running in the
/// same page do not see each other's nodes through scoped queries.
#[derive(Debug)]
pub struct Sandbox {
	root: Dom,
	id: String,
}

impl Sandbox {
	/// Mounts a new sandbox.
	///
	/// # Panics
	///
	/// Panics when no document body is available.
	pub fn new() -> Self {
		let id = format!("domey-sandbox-{}", NEXT_SANDBOX.fetch_add(1, Ordering::Relaxed));
		let body = domey_dom::document()
			.ok()
			.and_then(|doc| doc.body())
			.expect("sandbox needs a document body");

		let root = Dom::tag_new("div").expect("failed to create sandbox root");
		root.set_attr("id", &id)
			.and_then(|r| r.set_attr("data-testid", &id))
			.expect("failed to label sandbox root");
		body.append_child(root.element())
			.expect("failed to mount sandbox");

		Self { root, id }
	}

	/// The sandbox container.
	pub fn root(&self) -> &Dom {
		&self.root
	}

	/// The `id` given to the container.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Appends `node` to the container and returns the container.
	///
	/// # Panics
	///
	/// Panics if the platform rejects the insertion.
	pub fn mount(&self, node: &Dom) -> &Dom {
		self.root.append(node).expect("failed to mount into sandbox")
	}

	/// Queries scoped to this sandbox.
	pub fn screen(&self) -> Screen {
		Screen::within(&self.root)
	}
}

impl Default for Sandbox {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for Sandbox {
	fn drop(&mut self) {
		self.root.element().remove();
	}
}
