//! Palette aggregation across documents.

use std::collections::HashSet;

use crate::models::Palette;

/// Drop exact duplicates and truncate to `cap` entries.
///
/// Two palettes are duplicates only when every color value matches
/// positionally - the same colors in a different order are two distinct
/// palettes. First occurrences win, so the result preserves the order in
/// which palettes were discovered across the source documents.
pub fn dedup_palettes(palettes: Vec<Palette>, cap: usize) -> Vec<Palette> {
    let mut seen: HashSet<Palette> = HashSet::new();
    let mut unique = Vec::new();

    for palette in palettes {
        if unique.len() == cap {
            break;
        }
        if seen.insert(palette.clone()) {
            unique.push(palette);
        }
    }

    unique
}
