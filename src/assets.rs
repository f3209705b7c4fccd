//! Asset loading with embedded fallbacks
//!
//! The page templates and the default config ship inside the binary. If
//! `TEMPLATES_DIR` or `CONFIG_FILE` is set, the filesystem wins and the
//! embedded copy is the fallback; otherwise only embedded assets are used.

use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded page templates
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External templates directory (from TEMPLATES_DIR env var)
    templates_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(templates_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            templates_dir,
            config_file,
        }
    }

    /// Read a page template as a UTF-8 string
    ///
    /// If an external directory is configured, tries the filesystem first,
    /// then falls back to embedded.
    pub fn read_template(&self, name: &str) -> io::Result<String> {
        if let Some(ref dir) = self.templates_dir {
            let full_path = dir.join(name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading template from filesystem");
                return fs::read_to_string(&full_path);
            }
        }

        let file = EmbeddedTemplates::get(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("Template not found: {name}"))
        })?;
        tracing::trace!(name = name, "Loading template from embedded assets");
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the configuration file as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return fs::read_to_string(path);
            }
        }

        let file = EmbeddedConfig::get("config.yaml").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml missing")
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_template_available() {
        let loader = AssetLoader::new(None, None);
        let page = loader.read_template("index.html").unwrap();
        assert!(page.contains("Huescout"));
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let loader = AssetLoader::new(None, None);
        let err = loader.read_template("nope.html").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_embedded_config_parses() {
        let loader = AssetLoader::new(None, None);
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("sites:"));
    }

    #[test]
    fn test_external_config_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "max_palettes: 9").unwrap();

        let loader = AssetLoader::new(None, Some(path));
        assert_eq!(loader.read_config_string().unwrap(), "max_palettes: 9");
    }

    #[test]
    fn test_missing_external_config_falls_back_to_embedded() {
        let loader = AssetLoader::new(None, Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(loader.read_config_string().unwrap().contains("sites:"));
    }
}
