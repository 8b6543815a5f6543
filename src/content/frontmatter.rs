//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept `tags: rust`, `tags: [rust, go]` and an empty `tags:`
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

/// Front-matter data from a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    #[serde(rename = "heroTags", deserialize_with = "string_or_vec", default)]
    pub hero_tags: Vec<String>,
    #[serde(rename = "readingTime")]
    pub reading_time: Option<u32>,
    pub excerpt: Option<String>,
    /// Posts are published unless marked otherwise
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            description: None,
            tags: Vec::new(),
            hero_tags: Vec::new(),
            reading_time: None,
            excerpt: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Split a document into its front-matter and body
    ///
    /// Supports a `---` fenced YAML block, a `;;;` fenced JSON block, and a
    /// bare JSON object at the top of the file. A `---` block that does not
    /// look like `key: value` pairs is a Markdown rule, not front-matter.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if let Some(rest) = content.strip_prefix("---") {
            return Self::parse_yaml(content, rest);
        }
        if let Some(rest) = content.strip_prefix(";;;") {
            let (json, body) = rest
                .split_once(";;;")
                .ok_or_else(|| anyhow!("Unterminated ;;; front-matter block"))?;
            return Ok((Self::from_json(json)?, trim_newlines(body)));
        }
        if content.starts_with('{') {
            let end = json_object_end(content)
                .ok_or_else(|| anyhow!("Unterminated JSON front-matter object"))?;
            return Ok((Self::from_json(&content[..end])?, trim_newlines(&content[end..])));
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml<'a>(content: &'a str, rest: &'a str) -> Result<(Self, &'a str)> {
        let rest = trim_newlines(rest);
        let Some(end) = rest.find("\n---") else {
            return Ok((FrontMatter::default(), content));
        };

        let yaml = &rest[..end];
        let body = trim_newlines(&rest[end + 4..]);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }
        if !yaml.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;
        Ok((fm, body))
    }

    fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

fn trim_newlines(s: &str) -> &str {
    s.trim_start_matches(['\n', '\r'])
}

/// `key:` followed by a space or end of line, where key is an identifier
fn looks_like_yaml_key(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return false;
    }
    let Some((key, value)) = line.split_once(':') else {
        return false;
    };
    let is_identifier = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    let is_scheme = matches!(key, "http" | "https" | "ftp" | "mailto");

    is_identifier && !is_scheme && (value.is_empty() || value.starts_with(' '))
}

/// Byte offset just past the brace closing the leading JSON object
fn json_object_end(content: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in content.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse a front-matter date in the common formats, as local time
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}
