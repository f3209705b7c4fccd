//! Site-specific extraction strategies.
//!
//! A handful of palette-hosting sites have stable markup worth targeting
//! directly. Each gets a declarative [`SiteStrategy`] - selector rules plus
//! a value-derivation rule - looked up once per document through
//! [`strategy_for`]. Strategies run in addition to the generic heuristic,
//! never instead of it.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use super::generic;
use crate::models::Palette;

/// Which known host produced a document. Determines the extraction
/// strategy that applies on top of the generic pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Coolors,
    ColorHunt,
    ColorHexa,
    SchemeColor,
    ColorName,
    DesignSeeds,
    ColorCombos,
    /// A page reached through a search-engine result link.
    SearchResult,
    #[default]
    Generic,
}

/// How a strategy reads one color value out of a selected element.
#[derive(Debug)]
enum ValueRule {
    /// Hex digits in an attribute, stored without the leading `#`.
    HexAttr(&'static str),
    /// `background-color` declaration in the element's inline style.
    StyleBackground,
    /// Hex digits as the text of a nested element.
    HexText(&'static str),
}

impl ValueRule {
    fn apply(&self, element: &ElementRef) -> Option<String> {
        match self {
            ValueRule::HexAttr(name) => element
                .value()
                .attr(name)
                .map(|hex| format!("#{hex}")),
            ValueRule::StyleBackground => element
                .value()
                .attr("style")
                .and_then(generic::background_value),
            ValueRule::HexText(selector) => {
                let sel = Selector::parse(selector).unwrap();
                let text: String = element.select(&sel).next()?.text().collect();
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(format!("#{text}"))
                }
            }
        }
    }
}

/// One site's extraction rules.
#[derive(Debug)]
pub struct SiteStrategy {
    shape: Shape,
}

#[derive(Debug)]
enum Shape {
    /// Repeated swatch containers; one palette per container.
    Swatches {
        container: &'static str,
        swatch: &'static str,
        value: ValueRule,
    },
    /// A single color table; one palette from its first `max_rows` rows.
    Table {
        row: &'static str,
        cell: &'static str,
        max_rows: usize,
    },
}

static COOLORS: SiteStrategy = SiteStrategy {
    shape: Shape::Swatches {
        container: ".palette_container",
        swatch: ".palette_color",
        value: ValueRule::HexAttr("data-hex"),
    },
};

static COLORHUNT: SiteStrategy = SiteStrategy {
    shape: Shape::Swatches {
        container: ".palette",
        swatch: ".color",
        value: ValueRule::StyleBackground,
    },
};

static COLORHEXA: SiteStrategy = SiteStrategy {
    shape: Shape::Table {
        row: ".color-table tbody tr",
        cell: "td:nth-child(2)",
        max_rows: Palette::MAX_LEN,
    },
};

static SCHEMECOLOR: SiteStrategy = SiteStrategy {
    shape: Shape::Swatches {
        container: ".palette-container",
        swatch: ".palette-color",
        value: ValueRule::HexText(".hexcode"),
    },
};

/// Strategy lookup. Kinds without bespoke markup knowledge get `None` and
/// rely on the generic pipeline alone.
pub fn strategy_for(kind: SiteKind) -> Option<&'static SiteStrategy> {
    match kind {
        SiteKind::Coolors => Some(&COOLORS),
        SiteKind::ColorHunt => Some(&COLORHUNT),
        SiteKind::ColorHexa => Some(&COLORHEXA),
        SiteKind::SchemeColor => Some(&SCHEMECOLOR),
        _ => None,
    }
}

impl SiteStrategy {
    /// Run this strategy over a document.
    ///
    /// Elements missing the expected attribute or child are skipped, never
    /// fatal. A palette is kept when non-empty, capped at
    /// [`Palette::MAX_LEN`] colors.
    pub fn extract(&self, doc: &Html) -> Vec<Palette> {
        match &self.shape {
            Shape::Swatches {
                container,
                swatch,
                value,
            } => {
                let container_sel = Selector::parse(container).unwrap();
                let swatch_sel = Selector::parse(swatch).unwrap();

                let mut palettes = Vec::new();
                for cont in doc.select(&container_sel) {
                    let colors: Vec<String> = cont
                        .select(&swatch_sel)
                        .filter_map(|el| value.apply(&el))
                        .take(Palette::MAX_LEN)
                        .collect();
                    if !colors.is_empty() {
                        palettes.push(Palette(colors));
                    }
                }
                palettes
            }
            Shape::Table {
                row,
                cell,
                max_rows,
            } => {
                let row_sel = Selector::parse(row).unwrap();
                let cell_sel = Selector::parse(cell).unwrap();

                let colors: Vec<String> = doc
                    .select(&row_sel)
                    .take(*max_rows)
                    .filter_map(|r| {
                        let text: String = r.select(&cell_sel).next()?.text().collect();
                        let text = text.trim();
                        if text.is_empty() {
                            None
                        } else {
                            Some(format!("#{text}"))
                        }
                    })
                    .collect();

                if colors.is_empty() {
                    Vec::new()
                } else {
                    vec![Palette(colors)]
                }
            }
        }
    }
}
