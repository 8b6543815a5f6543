//! Post listing used by the home page and tag pages

use super::link::internal_link;
use crate::content::Post;
use crate::view::{Element, Node};

/// Render a heading followed by one summary per post
pub fn render_post_list(heading: &str, posts: &[&Post]) -> Node {
    let items = posts.iter().map(|post| {
        Element::new("article")
            .class("postListItem")
            .child(
                Element::new("h2")
                    .class("postListTitle")
                    .child(internal_link(&post.slug, Some(post.title.as_str()), post.title.as_str())),
            )
            .child(
                Element::new("div")
                    .class("postListMeta")
                    .child(format!("{} · {} minute read", post.date, post.reading_time)),
            )
            .child(Element::new("p").class("postListExcerpt").child(post.excerpt.as_str()))
    });

    Element::new("section")
        .class("postList")
        .child(Element::new("h1").child(heading))
        .children(items)
        .into()
}
