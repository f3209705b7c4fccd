//! Crawl orchestration: site table to deduplicated palettes.
//!
//! Fetches each target sequentially, extracts palettes per document, and
//! merges the results. A failing site contributes zero documents and the
//! crawl moves on; the only "failure" a caller ever sees is an empty
//! result list.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use super::fetcher::PageFetcher;
use super::search::SearchProvider;
use crate::extract::{self, SiteKind};
use crate::models::{AppConfig, Palette};

pub struct CrawlService {
    config: Arc<AppConfig>,
    fetcher: Arc<dyn PageFetcher>,
    search: SearchProvider,
}

impl CrawlService {
    pub fn new(config: Arc<AppConfig>, fetcher: Arc<dyn PageFetcher>) -> Self {
        let search = SearchProvider::new(config.search.clone());
        Self {
            config,
            fetcher,
            search,
        }
    }

    /// Crawl every target for a keyword and return the deduplicated
    /// palettes, capped at the configured maximum. An empty result means
    /// "nothing found", never an internal fault.
    pub async fn crawl(&self, keyword: &str) -> Vec<Palette> {
        let mut targets: Vec<(String, SiteKind)> = self
            .config
            .sites
            .iter()
            .map(|site| (site.url_for(keyword), site.kind))
            .collect();

        for link in self
            .search
            .palette_links(self.fetcher.as_ref(), keyword)
            .await
        {
            targets.push((link, SiteKind::SearchResult));
        }

        tracing::info!(keyword = %keyword, targets = targets.len(), "Starting crawl");

        let mut all_palettes = Vec::new();
        for (url, kind) in targets {
            match self.fetcher.fetch_page(&url).await {
                Ok(body) => {
                    let palettes = extract::extract_document(&body, kind);
                    tracing::debug!(
                        url = %url,
                        kind = ?kind,
                        palettes = palettes.len(),
                        "Document extracted"
                    );
                    all_palettes.extend(palettes);
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Site fetch failed, skipping");
                }
            }
            self.pause_between_requests().await;
        }

        let unique = extract::dedup_palettes(all_palettes, self.config.max_palettes);
        tracing::info!(keyword = %keyword, palettes = unique.len(), "Crawl finished");
        unique
    }

    /// Random pause between site fetches, to stay polite.
    async fn pause_between_requests(&self) {
        let min = self.config.fetch.min_delay_ms;
        let max = self.config.fetch.max_delay_ms;
        if max == 0 {
            return;
        }
        let delay = if min >= max {
            min
        } else {
            rand::thread_rng().gen_range(min..=max)
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}
