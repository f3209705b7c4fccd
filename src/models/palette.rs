use serde::{Deserialize, Serialize};

/// An ordered list of color values considered to represent one coherent
/// color scheme from a single source location.
///
/// Order is significant throughout: it reflects the order in which color
/// elements were discovered in their container, and two palettes holding the
/// same colors in a different order are distinct for deduplication.
///
/// Color values are kept as found - a hex token and an equivalent named
/// token are different values, and no numeric validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<String>);

impl Palette {
    /// Fewest colors a heuristic candidate may carry and still count as a
    /// palette. Rejects incidental color mentions.
    pub const MIN_LEN: usize = 3;

    /// Most colors a palette may carry. Rejects large swatch-picker UIs.
    pub const MAX_LEN: usize = 8;

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a candidate of this length survives heuristic validation.
    pub fn accepts_len(len: usize) -> bool {
        (Self::MIN_LEN..=Self::MAX_LEN).contains(&len)
    }
}

impl From<Vec<String>> for Palette {
    fn from(colors: Vec<String>) -> Self {
        Self(colors)
    }
}

/// Final output of one keyword query: the normalized keyword plus the
/// deduplicated palettes found for it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub keyword: String,
    pub palettes: Vec<Palette>,
}
