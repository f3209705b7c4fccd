pub mod pages;
pub mod palettes;

pub use pages::handle_index;
pub use palettes::{handle_palettes, PaletteQuery, PalettesError, PalettesResponse};
pub use palettes::__path_handle_palettes;
