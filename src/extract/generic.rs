//! Heuristic palette extraction for arbitrary pages.
//!
//! Finds candidate containers by class keyword, collects their swatch-like
//! descendants, and derives one color value per element from inline style,
//! a data attribute, or the element's text. A candidate only becomes a
//! palette when it carries between [`Palette::MIN_LEN`] and
//! [`Palette::MAX_LEN`] colors.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::OnceLock;

use super::tokens;
use crate::models::Palette;

/// Class keywords that mark an element as a likely palette container.
/// Matched case-insensitively as substrings of the class attribute, so a
/// class like `my-color-scheme-box` qualifies.
const CONTAINER_KEYWORDS: &[&str] = &[
    "palette",
    "color-group",
    "swatches",
    "colors",
    "scheme",
    "combination",
];

/// Class keywords that mark an element as a likely swatch.
const SWATCH_KEYWORDS: &[&str] = &["color", "swatch", "chip", "sample"];

fn keyword_pattern(keywords: &[&str]) -> Regex {
    Regex::new(&format!("(?i){}", keywords.join("|"))).unwrap()
}

fn container_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| keyword_pattern(CONTAINER_KEYWORDS))
}

fn swatch_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| keyword_pattern(SWATCH_KEYWORDS))
}

fn style_hint_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("background-color|color").unwrap())
}

fn background_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"background-color:\s*([^;]*);").unwrap())
}

fn color_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"color:\s*([^;]*);").unwrap())
}

/// The `background-color` value of an inline style, if declared.
/// Shared with the site strategies.
pub(crate) fn background_value(style: &str) -> Option<String> {
    capture_value(background_pattern(), style)
}

fn capture_value(re: &Regex, style: &str) -> Option<String> {
    re.captures(style).map(|c| c[1].trim().to_string())
}

/// Run the generic heuristic over a whole document.
pub fn extract_palettes(doc: &Html) -> Vec<Palette> {
    find_containers(doc)
        .into_iter()
        .filter_map(|container| {
            let colors = container_colors(&container);
            if Palette::accepts_len(colors.len()) {
                Some(Palette(colors))
            } else {
                None
            }
        })
        .collect()
}

/// Candidate containers in document order. Nested matches are each
/// returned in their own right.
fn find_containers(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| container_pattern().is_match(class))
        })
        .collect()
}

/// Derive the candidate color list for one container.
///
/// Primary tier: descendants with a swatch-like class. Fallback tier, used
/// only when the primary tier finds nothing: descendants whose inline style
/// mentions a color property.
fn container_colors(container: &ElementRef) -> Vec<String> {
    let mut elements: Vec<ElementRef> = descendants(container)
        .filter(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| swatch_pattern().is_match(class))
        })
        .collect();

    if elements.is_empty() {
        elements = descendants(container)
            .filter(|el| {
                el.value()
                    .attr("style")
                    .is_some_and(|style| style_hint_pattern().is_match(style))
            })
            .collect();
    }

    let mut colors = Vec::new();
    for element in elements {
        colors.extend(element_colors(&element));
    }
    colors
}

fn descendants<'a>(container: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    // descendants() yields the container itself first
    container.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Color values contributed by one swatch element, in derivation order:
/// inline background-color, inline color, data-color attribute, then any
/// tokens found in the element text. An element contributing nothing is
/// simply skipped by the caller.
fn element_colors(element: &ElementRef) -> Vec<String> {
    if let Some(style) = element.value().attr("style") {
        if let Some(value) = background_value(style) {
            return vec![value];
        }
        if let Some(value) = capture_value(color_pattern(), style) {
            return vec![value];
        }
    }

    if let Some(value) = element.value().attr("data-color") {
        return vec![value.to_string()];
    }

    let text: String = element.text().collect();
    tokens::extract_color_tokens(&text)
}
