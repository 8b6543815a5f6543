//! Site-relative and absolute link building

use super::kebab::to_kebab_case;
use crate::config::SiteConfig;

/// Prefix `path` with the configured site root
///
/// With `root: /blog/`, `"/css/style.css"` becomes `"/blog/css/style.css"`
/// and an empty path becomes the root itself.
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let mut url = String::from(config.root.trim_end_matches('/'));
    url.push('/');
    url.push_str(path.trim_start_matches('/'));
    url
}

/// Site-relative part of a root-prefixed link
///
/// With `root: /blog/`, `"/blog/hello/"` becomes `"/hello/"`. Links outside
/// the root are returned unchanged.
pub fn strip_root<'a>(config: &SiteConfig, url: &'a str) -> &'a str {
    let root = config.root.trim_end_matches('/');
    match url.strip_prefix(root) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => url,
    }
}

/// Absolute URL on the configured domain, used for canonical and og links
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.url.trim_end_matches('/'), url_for(config, path))
}

/// Internal link to the listing page of a tag
///
/// `"Rust Lang"` links to `/tags/rust-lang`.
pub fn tag_path(config: &SiteConfig, tag: &str) -> String {
    let dir = config.tag_dir.trim_matches('/');
    url_for(config, &format!("{}/{}", dir, to_kebab_case(tag)))
}

/// Whether a link leaves the site
pub fn is_external(path: &str) -> bool {
    ["http://", "https://", "//", "mailto:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_site() -> SiteConfig {
        SiteConfig {
            url: "https://rajrajhans.com/".to_string(),
            root: "/blog/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for_default_root() {
        let site = SiteConfig::default();
        assert_eq!(url_for(&site, "/"), "/");
        assert_eq!(url_for(&site, "about/"), "/about/");
    }

    #[test]
    fn test_url_for_nested_root() {
        let site = nested_site();
        assert_eq!(url_for(&site, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&site, ""), "/blog/");
    }

    #[test]
    fn test_full_url_for() {
        assert_eq!(
            full_url_for(&nested_site(), "/hello-world/"),
            "https://rajrajhans.com/blog/hello-world/"
        );
    }

    #[test]
    fn test_tag_path() {
        let site = SiteConfig::default();
        assert_eq!(tag_path(&site, "Go"), "/tags/go");
        assert_eq!(tag_path(&site, "Web Development"), "/tags/web-development");
        assert_eq!(tag_path(&site, "!!!"), "/tags/");
        assert_eq!(tag_path(&nested_site(), "Rust"), "/blog/tags/rust");
    }

    #[test]
    fn test_strip_root() {
        let site = nested_site();
        assert_eq!(strip_root(&site, "/blog/hello/"), "/hello/");
        assert_eq!(strip_root(&site, "/blog/"), "/");
        assert_eq!(strip_root(&site, "/blogroll/"), "/blogroll/");
        assert_eq!(strip_root(&SiteConfig::default(), "/hello/"), "/hello/");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/rajrajhans"));
        assert!(is_external("mailto:hi@example.com"));
        assert!(!is_external("/about/"));
    }
}
