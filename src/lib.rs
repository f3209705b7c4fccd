//! Huescout - keyword-driven color palette search.
//!
//! Crawls palette-hosting sites for a keyword, heuristically extracts color
//! palettes from the fetched HTML, and serves the deduplicated results.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod extract;
pub mod models;
pub mod server;
pub mod services;
