//! Browser-only helpers: per-test sandbox and DOM queries.

pub mod query;
pub mod sandbox;

pub use query::{QueryResult, Screen};
pub use sandbox::Sandbox;
