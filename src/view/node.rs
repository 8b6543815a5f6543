//! View nodes and HTML serialisation

use std::fmt;

use crate::helpers::html_escape;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An HTML element
    Element(Element),
    /// Text, escaped on output
    Text(String),
    /// Pre-rendered markup, emitted verbatim
    Raw(String),
    /// A sequence of sibling nodes without a wrapper
    Fragment(Vec<Node>),
}

impl Node {
    /// Create an escaped text node
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Create a node that embeds pre-rendered markup verbatim
    pub fn raw(s: impl Into<String>) -> Self {
        Node::Raw(s.into())
    }

    /// Serialise the tree to an HTML string
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// An HTML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing value
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    /// Set an attribute only when a value is present
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Append space-separated classes
    pub fn class(self, class: &str) -> Self {
        let merged = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.attr("class", merged)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(s) => f.write_str(&html_escape(s)),
            Node::Raw(s) => f.write_str(s),
            Node::Fragment(nodes) => nodes.iter().try_for_each(|n| n.fmt(f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, r#" {}="{}""#, name, html_escape(value))?;
        }
        f.write_str(">")?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node: Node = Element::new("div")
            .class("a")
            .class("b")
            .child(Element::new("span").child("x < y"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="a b"><span>x &lt; y</span></div>"#
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node: Node = Element::new("div").child(Node::raw("<p>hi</p>")).into();
        assert_eq!(node.to_html(), "<div><p>hi</p></div>");
    }

    #[test]
    fn test_void_and_attr_escaping() {
        let node: Node = Element::new("img")
            .attr("src", "/a.png")
            .attr("alt", r#"say "hi""#)
            .into();
        assert_eq!(node.to_html(), r#"<img src="/a.png" alt="say &quot;hi&quot;">"#);
    }

    #[test]
    fn test_attr_replaces_and_optional() {
        let el = Element::new("a")
            .attr("href", "/a")
            .attr("href", "/b")
            .attr_opt("title", None::<String>);
        assert_eq!(el.get_attr("href"), Some("/b"));
        assert_eq!(el.get_attr("title"), None);
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn test_fragment_has_no_wrapper() {
        let node = Node::Fragment(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(node.to_html(), "ab");
    }
}
