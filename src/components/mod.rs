//! Presentational components
//!
//! Each component is a plain function from typed data to a [`Node`] tree.
//! Components do no I/O; the current date comes from an injected
//! [`Clock`](crate::clock::Clock).
//!
//! [`Node`]: crate::view::Node

mod blog_post;
mod footer;
mod layout;
mod link;
mod nav;
mod post_list;
mod seo;

pub use blog_post::render_blog_post;
pub use footer::render_footer;
pub use layout::{render_document, LayoutOptions};
pub use link::{internal_link, internal_link_right};
pub use nav::{logo, nav_links};
pub use post_list::render_post_list;
pub use seo::Seo;
