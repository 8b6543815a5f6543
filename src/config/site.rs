//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_bio: String,
    pub author_picture: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    pub date_format: String,
    pub words_per_minute: usize,
    pub excerpt_length: usize,
    pub render_drafts: bool,

    // Navigation
    pub nav_links: Vec<LinkConfig>,
    pub footer_links: Vec<LinkConfig>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Raj Rajhans".to_string(),
            description: String::new(),
            author: "Raj Rajhans".to_string(),
            author_bio:
                "Ambivert. Perpetually audacious. Tech aficionado, and a striving nonconformist"
                    .to_string(),
            author_picture: "/raj-profile-pic-1.png".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            date_format: "MMMM Do, YYYY".to_string(),
            words_per_minute: 200,
            excerpt_length: 160,
            render_drafts: false,

            nav_links: vec![
                LinkConfig::new("Home", "/"),
                LinkConfig::new("Blog", "/blog/"),
                LinkConfig::new("About", "/about/"),
            ],
            footer_links: Vec::new(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// A static navigation or footer link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub path: String,
}

impl LinkConfig {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}
