//! Internal link wrappers

use crate::view::{Element, Node};

/// Link to a page of this site
pub fn internal_link(href: &str, title: Option<&str>, content: impl Into<Node>) -> Element {
    Element::new("a")
        .class("internalLink")
        .attr("href", href)
        .attr_opt("title", title)
        .child(content)
}

/// Internal link aligned to the right edge of its container
pub fn internal_link_right(href: &str, title: Option<&str>, content: impl Into<Node>) -> Element {
    internal_link(href, title, content).class("internalLinkRight")
}
