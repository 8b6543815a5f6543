//! Site logo and primary navigation

use crate::config::SiteConfig;
use crate::helpers::{is_external, url_for};
use crate::view::{Element, Node};

/// Logo link to the site root
pub fn logo(site: &SiteConfig) -> Element {
    Element::new("a")
        .attr("href", url_for(site, "/"))
        .attr("title", site.author.as_str())
        .child(Element::new("span").class("logoText").child(site.title.as_str()))
}

/// Primary navigation list built from `nav_links`
pub fn nav_links(site: &SiteConfig) -> Element {
    Element::new("ul").class("navLinksList").children(
        site.nav_links
            .iter()
            .map(|link| Element::new("li").child(link_element(site, &link.label, &link.path))),
    )
}

/// Anchor for a configured link; external targets open in a new tab
pub(crate) fn link_element(site: &SiteConfig, label: &str, path: &str) -> Node {
    if is_external(path) {
        Element::new("a")
            .attr("href", path)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .child(label)
            .into()
    } else {
        Element::new("a")
            .attr("href", url_for(site, path))
            .child(label)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkConfig;

    #[test]
    fn test_logo_links_to_root() {
        let site = SiteConfig::default();
        let logo = logo(&site);
        assert_eq!(logo.get_attr("href"), Some("/"));
        assert_eq!(logo.get_attr("title"), Some("Raj Rajhans"));
        assert_eq!(logo.text_content(), site.title);
    }

    #[test]
    fn test_nav_links() {
        let mut site = SiteConfig::default();
        site.root = "/site/".to_string();
        site.nav_links = vec![
            LinkConfig::new("Blog", "/blog/"),
            LinkConfig::new("GitHub", "https://github.com/rajrajhans"),
        ];

        let nav = nav_links(&site);
        assert_eq!(
            nav.link_targets(),
            vec!["/site/blog/", "https://github.com/rajrajhans"]
        );
        let anchors = nav.find_all_by_tag("a");
        assert_eq!(anchors[0].get_attr("target"), None);
        assert_eq!(anchors[1].get_attr("target"), Some("_blank"));
    }
}
