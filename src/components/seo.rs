//! Page metadata for the document head

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_xml, full_url_for, strip_root};
use crate::view::{Element, Node};

/// Title, description and canonical URL of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub url: String,
    /// `og:type`, `article` for posts
    pub kind: &'static str,
    pub published_time: Option<String>,
}

impl Seo {
    /// Metadata for a generic page
    pub fn for_page(site: &SiteConfig, title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            description: site.description.clone(),
            url: full_url_for(site, path),
            kind: "website",
            published_time: None,
        }
    }

    /// Metadata for a post; a missing description falls back to the excerpt
    pub fn for_post(site: &SiteConfig, post: &Post) -> Self {
        let description = post
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(&post.excerpt)
            .to_string();

        Self {
            title: post.title.clone(),
            description,
            url: full_url_for(site, strip_root(site, &post.slug)),
            kind: "article",
            published_time: Some(date_xml(&post.published)),
        }
    }

    /// Document title, `<page> | <site>`
    pub fn document_title(&self, site: &SiteConfig) -> String {
        if self.title.is_empty() || self.title == site.title {
            site.title.clone()
        } else {
            format!("{} | {}", self.title, site.title)
        }
    }

    /// `<head>` children: title and meta tags
    pub fn head_nodes(&self, site: &SiteConfig) -> Vec<Node> {
        let mut nodes: Vec<Node> = vec![
            Element::new("title").child(self.document_title(site)).into(),
            meta_name("description", &self.description),
            meta_property("og:title", &self.title),
            meta_property("og:description", &self.description),
            meta_property("og:type", self.kind),
            meta_property("og:url", &self.url),
            meta_name("twitter:card", "summary"),
            meta_name("twitter:creator", &site.author),
            meta_name("twitter:title", &self.title),
            meta_name("twitter:description", &self.description),
        ];

        if let Some(ref published) = self.published_time {
            nodes.push(meta_property("article:published_time", published));
        }

        nodes
    }
}

fn meta_name(name: &str, content: &str) -> Node {
    Element::new("meta")
        .attr("name", name)
        .attr("content", content)
        .into()
}

fn meta_property(property: &str, content: &str) -> Node {
    Element::new("meta")
        .attr("property", property)
        .attr("content", content)
        .into()
}
