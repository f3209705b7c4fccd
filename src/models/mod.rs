pub mod config;
pub mod palette;

pub use config::{AppConfig, FetchConfig, SearchConfig, SiteTarget};
pub use palette::{ExtractionResult, Palette};
