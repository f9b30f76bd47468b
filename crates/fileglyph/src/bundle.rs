//! Theme packs.
//!
//! A pack is a directory shipping one or more themes in a fixed layout:
//!
//! ```text
//! <base>/themes.json            [{ "id", "name", "root" }, ...]
//! <base>/iconThemes/<id>.json   minimized theme document
//! <base>/assets/<id>.css        folder icon stylesheet
//! <base>/<root>/...             icon images
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::registry::{ThemeDescriptor, ThemeRegistry};
use crate::source::JsonFileSource;
use crate::{Error, Result};

use fileglyph_style::icon_theme::ThemeEncoding;

/// File name of the pack manifest.
pub const PACK_MANIFEST: &str = "themes.json";

/// One theme listed in a pack manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackTheme {
    pub id: String,
    pub name: String,
    /// Directory of the theme's images, relative to the pack base.
    pub root: String,
}

/// A set of themes sharing a base directory.
#[derive(Debug, Clone)]
pub struct ThemePack {
    base: PathBuf,
    themes: Vec<PackTheme>,
}

impl ThemePack {
    pub fn new(base: impl Into<PathBuf>, themes: Vec<PackTheme>) -> Self {
        Self {
            base: base.into(),
            themes,
        }
    }

    /// Read the pack manifest in `base`.
    pub async fn open(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        let path = base.join(PACK_MANIFEST);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        let themes = serde_json::from_str(&text).map_err(|e| Error::json(&path, e))?;
        Ok(Self::new(base, themes))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn themes(&self) -> &[PackTheme] {
        &self.themes
    }

    /// Descriptor for one theme of this pack.
    pub fn descriptor(&self, theme: &PackTheme) -> ThemeDescriptor {
        let document = self.base.join("iconThemes").join(format!("{}.json", theme.id));
        let css = self.base.join("assets").join(format!("{}.css", theme.id));

        ThemeDescriptor::new(theme.id.as_str(), theme.name.as_str(), JsonFileSource::new(document))
            .with_css_url(css.to_string_lossy())
            .with_root_url(self.base.join(&theme.root).to_string_lossy())
            .with_encoding(ThemeEncoding::Minimized)
    }

    /// Register every theme of this pack.
    pub fn register(&self, registry: &ThemeRegistry) {
        for theme in &self.themes {
            registry.register(theme.id.as_str(), self.descriptor(theme));
        }
    }

    /// Unregister every theme of this pack.
    pub fn dispose(&self, registry: &ThemeRegistry) {
        for theme in &self.themes {
            registry.unregister(&theme.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> ThemePack {
        ThemePack::new(
            "/plugins/seti",
            vec![
                PackTheme {
                    id: "seti".into(),
                    name: "Seti".into(),
                    root: "seti".into(),
                },
                PackTheme {
                    id: "seti-mono".into(),
                    name: "Seti Mono".into(),
                    root: "seti".into(),
                },
            ],
        )
    }

    #[test]
    fn descriptor_layout() {
        let pack = pack();
        let descriptor = pack.descriptor(&pack.themes()[0]);

        assert_eq!(descriptor.id, "seti");
        assert_eq!(descriptor.encoding, ThemeEncoding::Minimized);
        assert_eq!(
            PathBuf::from(&descriptor.css_url),
            Path::new("/plugins/seti").join("assets").join("seti.css")
        );
        assert_eq!(
            descriptor.root_url.map(PathBuf::from),
            Some(Path::new("/plugins/seti").join("seti"))
        );
    }

    #[test]
    fn register_and_dispose() {
        let registry = ThemeRegistry::new();
        registry.register("other", ThemeDescriptor::new("", "Other", crate::source::InlineSource::empty()));

        let pack = pack();
        pack.register(&registry);
        assert_eq!(registry.len(), 3);

        pack.dispose(&registry);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("other"));
    }

    #[tokio::test]
    async fn open_reads_manifest() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join(PACK_MANIFEST),
            r#"[{ "id": "seti", "name": "Seti", "root": "icons" }]"#,
        )
        .await
        .unwrap();

        let pack = ThemePack::open(dir.path()).await.unwrap();
        assert_eq!(pack.themes().len(), 1);
        assert_eq!(pack.themes()[0].root, "icons");
    }

    #[tokio::test]
    async fn open_without_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemePack::open(dir.path()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
