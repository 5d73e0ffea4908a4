//! Test helpers for domey.
//!
//! - [`selector`]: CSS string escaping for attribute selectors (all targets)
//! - `wasm`: a [`Sandbox`](wasm::Sandbox) mounted under `<body>` per test and
//!   a Testing Library-style [`Screen`](wasm::Screen) (wasm32 only)
//!
//! # Example
//!
//! ```rust,ignore
//! use domey_test::wasm::Sandbox;
//! use wasm_bindgen_test::*;
//!
//! wasm_bindgen_test_configure!(run_in_browser);
//!
//! #[wasm_bindgen_test]
//! fn renders_title() {
//!     let sandbox = Sandbox::new();
//!     sandbox.root().set_inner_html("<h1>Hello</h1>").unwrap();
//!     sandbox.screen().get_by_text("hello").should_exist();
//! }
//! ```

pub mod selector;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
