//! Page footer

use super::nav::{link_element, logo, nav_links};
use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::view::{Element, Node};

/// Render the site footer
///
/// Layout: logo, primary navigation, secondary footer links, and a
/// copyright line whose year comes from `clock`.
pub fn render_footer(site: &SiteConfig, clock: &dyn Clock) -> Node {
    let footer_links = Element::new("ul").class("footerLinks").children(
        site.footer_links
            .iter()
            .map(|link| Element::new("li").child(link_element(site, &link.label, &link.path))),
    );

    let copyright = format!("Copyright © {} {}", site.author, clock.current_year());

    Element::new("footer")
        .class("footer")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("div").class("logo").child(logo(site)))
                .child(
                    Element::new("div")
                        .class("navlinks text-secondary")
                        .child(nav_links(site)),
                )
                .child(
                    Element::new("div")
                        .class("navlinks text-secondary footerSecondary")
                        .child(footer_links),
                )
                .child(Element::new("p").class("text-primary f-d").child(copyright)),
        )
        .into()
}
