//! Blog post page body

use super::link::{internal_link, internal_link_right};
use crate::config::SiteConfig;
use crate::content::{Neighbor, PageContext, Post};
use crate::helpers::tag_path;
use crate::view::{Element, Node};

const PREV_ARROW_SVG: &str = r##"<svg class="blogPrevSVG" stroke="#3355ff" fill="#3355ff" stroke-width="0" viewBox="0 0 448 512" height="1em" width="1em"><path d="M257.5 445.1l-22.2 22.2c-9.4 9.4-24.6 9.4-33.9 0L7 273c-9.4-9.4-9.4-24.6 0-33.9L201.4 44.7c9.4-9.4 24.6-9.4 33.9 0l22.2 22.2c9.5 9.5 9.3 25-.4 34.3L136.6 216H424c13.3 0 24 10.7 24 24v32c0 13.3-10.7 24-24 24H136.6l120.5 114.8c9.8 9.3 10 24.8.4 34.3z"></path></svg>"##;

const NEXT_ARROW_SVG: &str = r##"<svg class="blogNextSVG" stroke="#3355ff" fill="#3355ff" stroke-width="0" viewBox="0 0 448 512" height="1em" width="1em"><path d="M190.5 66.9l22.2-22.2c9.4-9.4 24.6-9.4 33.9 0L441 239c9.4 9.4 9.4 24.6 0 33.9L246.6 467.3c-9.4 9.4-24.6 9.4-33.9 0l-22.2-22.2c-9.5-9.5-9.3-25 .4-34.3L311.4 296H24c-13.3 0-24-10.7-24-24v-32c0-13.3 10.7-24 24-24h287.4L190.9 101.2c-9.8-9.3-10-24.8-.4-34.3z"></path></svg>"##;

/// Render the content of a blog post page
///
/// Produces the hero banner, the body, previous/next navigation and the
/// bottom author and tag block. The body is embedded verbatim.
pub fn render_blog_post(site: &SiteConfig, post: &Post, context: &PageContext) -> Node {
    Node::Fragment(vec![
        hero(site, post).into(),
        Element::new("div")
            .class("blogContentContainer")
            .child(
                Element::new("div")
                    .class("blogContent")
                    .child(
                        Element::new("div")
                            .class("blogText")
                            .child(Node::raw(post.body.as_str())),
                    )
                    .child(prev_next(context))
                    .child(bottom_row(site, post)),
            )
            .into(),
    ])
}

fn hero(site: &SiteConfig, post: &Post) -> Element {
    let hero_tags = post.hero_tags.iter().map(|tag| {
        internal_link(
            &tag_path(site, tag),
            Some(tag.as_str()),
            Element::new("span")
                .class("heroBlogTag heroBlogTag1")
                .child(tag.as_str()),
        )
    });

    Element::new("div").class("blogHeroContainer").child(
        Element::new("div")
            .class("blogHero")
            .child(Element::new("div").class("heroBlogTags").children(hero_tags))
            .child(
                Element::new("div")
                    .class("heroBlogTitle")
                    .child(post.title.as_str()),
            )
            .child(
                Element::new("div")
                    .class("heroAuthorRow")
                    .child(
                        Element::new("div")
                            .class("heroAuthorName")
                            .child(format!("By {}  -", site.author)),
                    )
                    .child(Element::new("div").class("heroDate").child(post.date.as_str())),
            )
            .child(
                Element::new("div")
                    .class("heroReadingTime")
                    .child(format!("{} minute read", post.reading_time)),
            ),
    )
}

fn prev_next(context: &PageContext) -> Element {
    let previous = context.previous.as_ref().map(|n| {
        internal_link(
            &n.slug,
            Some(n.title.as_str()),
            nav_label("blogPrevCntnr", PREV_ARROW_SVG, n),
        )
    });
    let next = context.next.as_ref().map(|n| {
        internal_link_right(
            &n.slug,
            Some(n.title.as_str()),
            nav_label("blogNextCntnr", NEXT_ARROW_SVG, n),
        )
    });

    Element::new("div")
        .class("blogprevnext")
        .child(Element::new("div").class("blogPrev").children(previous))
        .child(Element::new("div").class("blogNext").children(next))
}

fn nav_label(class: &str, arrow: &str, neighbor: &Neighbor) -> Element {
    Element::new("div")
        .class(class)
        .child(Node::raw(arrow))
        .child(neighbor.title.as_str())
}

fn bottom_row(site: &SiteConfig, post: &Post) -> Element {
    let author = Element::new("div")
        .class("blogBtmAthrRow")
        .child(
            Element::new("div").class("blogBtmAthrImg").child(
                Element::new("img")
                    .attr("src", site.author_picture.as_str())
                    .attr("alt", slug::slugify(&site.author)),
            ),
        )
        .child(
            Element::new("div")
                .class("blogBtmAthrTxt")
                .child(Element::new("span").class("blogBtmAthr").child("Author"))
                .child(
                    Element::new("div")
                        .class("blogBtmAthrTxtName")
                        .child(site.author.as_str()),
                )
                .child(
                    Element::new("div")
                        .class("blogBtmAthrBio")
                        .child(site.author_bio.as_str()),
                ),
        );

    let tags = post.tags.iter().map(|tag| {
        internal_link(
            &tag_path(site, tag),
            None,
            Element::new("span").class("heroBlogTag").child(tag.as_str()),
        )
    });

    Element::new("div")
        .class("blogBottomRow")
        .child(author)
        .child(
            Element::new("div")
                .class("blogBtmTags")
                .child(Element::new("div").class("blogBtmTagsTxt").child("Tags :"))
                .child(Element::new("div").class("blogBtmTagsCntnr").children(tags)),
        )
}
