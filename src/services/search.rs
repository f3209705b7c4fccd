//! Search-provider querying.
//!
//! Augments the fixed site table with result links from a web search for
//! the keyword, restricted to known palette-hosting domains. Failures here
//! are never fatal: a broken or blocked search simply contributes no links.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

use super::fetcher::PageFetcher;
use crate::models::SearchConfig;

/// Domains appended to the search query to bias results toward pages the
/// extractor understands.
const PALETTE_DOMAINS: &str =
    "site:coolors.co OR site:colorhunt.co OR site:colordesigner.io OR site:schemecolor.com";

/// Google wraps each organic result in this class.
const RESULT_BLOCK_SELECTOR: &str = ".tF2Cxc";

/// How many result links to even consider per query.
const MAX_PARSED_LINKS: usize = 5;

pub struct SearchProvider {
    config: SearchConfig,
}

impl SearchProvider {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Result links for a keyword, best-effort. Returns at most
    /// `max_links` absolute http(s) URLs; an error or disabled search
    /// yields an empty list.
    pub async fn palette_links(&self, fetcher: &dyn PageFetcher, keyword: &str) -> Vec<String> {
        if !self.config.enabled {
            return Vec::new();
        }

        let query = format!("{keyword} color palette {PALETTE_DOMAINS}");
        let url = format!(
            "{}?q={}",
            self.config.url,
            utf8_percent_encode(&query, NON_ALPHANUMERIC)
        );

        match fetcher.fetch_page(&url).await {
            Ok(body) => {
                let links = extract_result_links(&body, self.config.max_links);
                tracing::debug!(keyword = %keyword, links = links.len(), "Search results parsed");
                links
            }
            Err(e) => {
                tracing::warn!(keyword = %keyword, error = %e, "Search query failed");
                Vec::new()
            }
        }
    }
}

/// Pull result links out of a search result page.
fn extract_result_links(html: &str, max_links: usize) -> Vec<String> {
    let doc = Html::parse_document(html);
    let result_sel = Selector::parse(RESULT_BLOCK_SELECTOR).unwrap();
    let anchor_sel = Selector::parse("a").unwrap();

    doc.select(&result_sel)
        .take(MAX_PARSED_LINKS)
        .filter_map(|result| {
            result
                .select(&anchor_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
        })
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
        .take(max_links)
        .collect()
}
