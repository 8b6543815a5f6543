//! Typed view tree produced by components
//!
//! Components are plain functions that return a [`Node`]. The tree is
//! serialised to HTML with `Display` and can be inspected with the query
//! helpers, which is how the component tests assert on structure.

mod node;
mod query;

pub use node::{Element, Node};
