//! Content module - loads posts, parses front-matter and renders Markdown

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{page_contexts, Neighbor, PageContext, Post};
