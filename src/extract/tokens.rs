//! Color-token extraction from free text.
//!
//! Pulls hex codes, rgb()/rgba() expressions and recognized English color
//! names out of arbitrary text (prose, inline style text, element text).
//! Validation is purely syntactic: `rgb(999, 999, 999)` is a token.

use regex::Regex;
use std::sync::OnceLock;

/// Color names recognized in free text. Matched case-insensitively and
/// folded to lowercase in the output.
pub const COLOR_NAMES: &[&str] = &[
    "red",
    "green",
    "blue",
    "yellow",
    "orange",
    "purple",
    "pink",
    "brown",
    "black",
    "white",
    "gray",
    "grey",
    "cyan",
    "magenta",
    "violet",
    "gold",
    "silver",
    "lavender",
    "lime",
    "teal",
    "indigo",
    "maroon",
    "olive",
    "navy",
    "azure",
    "beige",
    "coral",
    "cream",
    "emerald",
    "fuchsia",
    "ivory",
    "khaki",
    "salmon",
    "tan",
    "turquoise",
];

fn hex_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}\b").unwrap())
}

fn rgb_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(?:,\s*[\d.]+\s*)?\)").unwrap()
    })
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = COLOR_NAMES.join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
    })
}

/// Extract every color token from `text`.
///
/// Tokens are returned grouped by form - all hex matches, then all
/// rgb()/rgba() matches, then all recognized names - each group in text
/// order. Nothing is deduplicated and no form is canonicalized into
/// another. An input without matches yields an empty list.
pub fn extract_color_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = hex_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    tokens.extend(rgb_pattern().find_iter(text).map(|m| m.as_str().to_string()));

    tokens.extend(
        name_pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase()),
    );

    tokens
}
