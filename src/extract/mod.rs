//! The palette-extraction engine.
//!
//! Pure and synchronous: a fetched page goes in as text, palettes come out.
//! `scraper::Html` is not `Send`, so parsing and extraction always happen
//! inside one call that the async crawl layer never suspends across.

pub mod aggregate;
pub mod generic;
pub mod sites;
pub mod tokens;

pub use aggregate::dedup_palettes;
pub use sites::{strategy_for, SiteKind, SiteStrategy};
pub use tokens::extract_color_tokens;

use crate::models::Palette;
use scraper::Html;

/// Parse one fetched page and run both extraction paths over it.
///
/// The site strategy (when the kind has one) runs first, the generic
/// heuristic always runs after it; a document may contribute palettes from
/// both, with duplicates left for the aggregator to resolve.
pub fn extract_document(html: &str, kind: SiteKind) -> Vec<Palette> {
    let doc = Html::parse_document(html);

    let mut palettes = Vec::new();
    if let Some(strategy) = strategy_for(kind) {
        palettes.extend(strategy.extract(&doc));
    }
    palettes.extend(generic::extract_palettes(&doc));
    palettes
}
