//! Helper functions shared by components and the content pipeline
//!
//! Pure string transforms: URL building, kebab-casing, date formatting
//! and HTML text utilities.

mod date;
mod html;
mod kebab;
mod url;

pub use date::*;
pub use html::*;
pub use kebab::*;
pub use url::*;
