//! Read-only traversal of a view tree

use super::node::{Element, Node};

impl Node {
    /// All elements of the tree in document order, this node included
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            let children = match node {
                Node::Element(el) => {
                    out.push(el);
                    &el.children
                }
                Node::Fragment(nodes) => nodes,
                Node::Text(_) | Node::Raw(_) => continue,
            };
            stack.extend(children.iter().rev());
        }

        out
    }

    /// First element carrying the class
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.elements().into_iter().find(|el| el.has_class(class))
    }

    /// Every element carrying the class
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    /// Every element with the tag name
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// Concatenated unescaped text of the subtree, raw markup excluded
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(s) => s.clone(),
            Node::Raw(_) => String::new(),
            Node::Element(el) => el.text_content(),
            Node::Fragment(nodes) => nodes.iter().map(Node::text_content).collect(),
        }
    }
}

impl Element {
    /// Descendant elements, this element included
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.elements());
        }
        out
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.elements().into_iter().find(|el| el.has_class(class))
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// `href` of every link in the subtree, in document order
    pub fn link_targets(&self) -> Vec<&str> {
        self.find_all_by_tag("a")
            .into_iter()
            .filter_map(|a| a.get_attr("href"))
            .collect()
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .class("root")
            .child(
                Element::new("ul")
                    .child(Element::new("li").child(Element::new("a").attr("href", "/one").child("One")))
                    .child(Element::new("li").child(Element::new("a").attr("href", "/two").child("Two"))),
            )
            .child(Node::Fragment(vec![Element::new("p").class("note").child("End").into()]))
            .into()
    }

    #[test]
    fn test_document_order() {
        let tree = sample();
        let tags: Vec<_> = tree.elements().iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "ul", "li", "a", "li", "a", "p"]);
    }

    #[test]
    fn test_find_helpers() {
        let tree = sample();
        assert!(tree.find_by_class("note").is_some());
        assert!(tree.find_by_class("missing").is_none());
        assert_eq!(tree.find_all_by_tag("li").len(), 2);
        let root = tree.as_element().unwrap();
        assert_eq!(root.link_targets(), vec!["/one", "/two"]);
    }

    #[test]
    fn test_text_content() {
        let tree = sample();
        assert_eq!(tree.text_content(), "OneTwoEnd");
        assert_eq!(Node::raw("<b>x</b>").text_content(), "");
    }
}
