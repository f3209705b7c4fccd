use std::sync::Arc;
use tera::{Context, Tera};

use crate::assets::AssetLoader;

/// Error type for page rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the HTML pages served by the site
pub struct PageService {
    assets: Arc<AssetLoader>,
}

impl PageService {
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        Self { assets }
    }

    /// Render the search page
    /// Templates are always loaded fresh from assets to support live editing
    pub fn render_index(&self) -> Result<String, TemplateError> {
        let template = self.assets.read_template("index.html")?;

        let mut tera = Tera::default();
        tera.add_raw_template("index.html", &template)?;

        let mut context = Context::new();
        context.insert("version", env!("CARGO_PKG_VERSION"));

        Ok(tera.render("index.html", &context)?)
    }
}
