//! Full HTML document shell

use super::footer::render_footer;
use super::nav::{logo, nav_links};
use super::seo::Seo;
use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::helpers::url_for;
use crate::view::{Element, Node};

/// Extra classes applied to the page wrapper and the header bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub custom_class: Option<String>,
    pub custom_nav_class: Option<String>,
}

impl LayoutOptions {
    /// Classes used by blog post pages
    pub fn blog_post() -> Self {
        Self {
            custom_class: Some("navBlogPost".to_string()),
            custom_nav_class: Some("navBlogPostBar".to_string()),
        }
    }
}

/// Wrap page content in header, main and footer, and render the document
pub fn render_document(
    site: &SiteConfig,
    seo: &Seo,
    content: Node,
    options: &LayoutOptions,
    clock: &dyn Clock,
) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .children(seo.head_nodes(site))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", url_for(site, "/css/style.css")),
        );

    let html: Node = Element::new("html")
        .attr("lang", site.language.as_str())
        .child(head)
        .child(Element::new("body").child(layout(site, content, options, clock)))
        .into();

    format!("<!DOCTYPE html>\n{}\n", html)
}

fn layout(site: &SiteConfig, content: Node, options: &LayoutOptions, clock: &dyn Clock) -> Element {
    let mut wrapper = Element::new("div").class("layout");
    if let Some(ref class) = options.custom_class {
        wrapper = wrapper.class(class);
    }

    let mut header = Element::new("header").class("navbar");
    if let Some(ref class) = options.custom_nav_class {
        header = header.class(class);
    }
    let header = header
        .child(Element::new("div").class("logo").child(logo(site)))
        .child(Element::new("nav").class("navlinks").child(nav_links(site)));

    wrapper
        .child(header)
        .child(Element::new("main").child(content))
        .child(render_footer(site, clock))
}
