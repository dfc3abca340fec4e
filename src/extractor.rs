//! Recipe page metadata extraction.
//!
//! Fetches a page and pulls out what the recipe list needs to display it:
//! - the text of the `<title>` element (placeholder when missing)
//! - the `og:image` meta tag (empty when missing)
//!
//! Extraction is best effort. Every failure comes back as an
//! [`ExtractionError`] and callers treat it as "nothing to save".

use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::models::{RecipeMetadata, UNTITLED_RECIPE};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeNotes/1.0)";

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

// ============================================================================
// Fetching
// ============================================================================

/// HTTP fetcher shared by all requests. Cloning is cheap; the underlying
/// client pools connections.
#[derive(Clone, Debug)]
pub struct MetadataExtractor {
    client: reqwest::Client,
}

impl MetadataExtractor {
    pub fn new(timeout: Duration, use_proxy: bool) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT);
        if !use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Fetch `url` and derive its display metadata.
    ///
    /// The response status is not inspected: whatever body the server sends
    /// back is parsed.
    pub async fn extract(&self, url: &str) -> Result<RecipeMetadata, ExtractionError> {
        let parsed = Url::parse(url.trim())?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(ExtractionError::Request)?;

        let html = response.text().await.map_err(ExtractionError::Body)?;

        Ok(parse_metadata(&html))
    }
}

// ============================================================================
// HTML Parsing
// ============================================================================

pub fn parse_metadata(html: &str) -> RecipeMetadata {
    RecipeMetadata {
        title: extract_html_title(html).unwrap_or_else(|| UNTITLED_RECIPE.to_string()),
        image_url: extract_og_image(html).unwrap_or_default(),
    }
}

fn extract_html_title(html: &str) -> Option<String> {
    let re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok()?;
    let caps = re.captures(html)?;
    let title = html_entity_decode(caps.get(1)?.as_str().trim());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn extract_og_image(html: &str) -> Option<String> {
    // property="og:image" content="..." in either attribute order
    let patterns = [
        r#"(?i)<meta[^>]*property\s*=\s*["']og:image["'][^>]*content\s*=\s*["']([^"']*)["']"#,
        r#"(?i)<meta[^>]*content\s*=\s*["']([^"']*)["'][^>]*property\s*=\s*["']og:image["']"#,
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(m) = re.captures(html).and_then(|caps| caps.get(1)) {
                return Some(html_entity_decode(m.as_str().trim()));
            }
        }
    }
    None
}

fn html_entity_decode(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
