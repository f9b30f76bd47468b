//! Theme registry.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use fileglyph_style::icon_theme::ThemeEncoding;
use fileglyph_style::logging::targets;

use crate::source::ThemeSource;

/// Id of the built-in "no theme" entry.
pub const DEFAULT_THEME_ID: &str = "default";
/// Display name of the built-in "no theme" entry.
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Everything needed to load one icon theme.
#[derive(Clone)]
pub struct ThemeDescriptor {
    /// Registry id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Location of the companion folder icon stylesheet.
    pub css_url: String,
    /// Base path for relative icon image paths.
    pub root_url: Option<String>,
    /// Wire encoding of the theme document.
    pub encoding: ThemeEncoding,
    /// Lazy loader for the theme document.
    pub source: Arc<dyn ThemeSource>,
}

impl ThemeDescriptor {
    /// Create a descriptor with an empty css url, no root and the minimized
    /// encoding.
    pub fn new(id: impl Into<String>, name: impl Into<String>, source: impl ThemeSource + 'static) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            css_url: String::new(),
            root_url: None,
            encoding: ThemeEncoding::Minimized,
            source: Arc::new(source),
        }
    }

    pub fn with_css_url(mut self, css_url: impl Into<String>) -> Self {
        self.css_url = css_url.into();
        self
    }

    pub fn with_root_url(mut self, root_url: impl Into<String>) -> Self {
        self.root_url = Some(root_url.into());
        self
    }

    pub fn with_encoding(mut self, encoding: ThemeEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl fmt::Debug for ThemeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("css_url", &self.css_url)
            .field("root_url", &self.root_url)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

/// One row of the theme selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub id: String,
    pub name: String,
}

impl ThemeEntry {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Registered themes in registration order.
///
/// Registration performs no validation and the last writer wins on an id
/// collision, keeping the position of the first registration.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: RwLock<Vec<ThemeDescriptor>>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` under `id`, replacing any previous theme.
    pub fn register(&self, id: impl Into<String>, mut descriptor: ThemeDescriptor) {
        let id = id.into();
        descriptor.id = id.clone();
        debug!(target: targets::REGISTRY, id = %id, name = %descriptor.name, "registered icon theme");
        let mut themes = self.themes.write();
        match themes.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = descriptor,
            None => themes.push(descriptor),
        }
    }

    /// Remove the theme registered under `id`.
    pub fn unregister(&self, id: &str) -> Option<ThemeDescriptor> {
        let removed = {
            let mut themes = self.themes.write();
            themes
                .iter()
                .position(|theme| theme.id == id)
                .map(|index| themes.remove(index))
        };
        if removed.is_some() {
            debug!(target: targets::REGISTRY, id, "unregistered icon theme");
        }
        removed
    }

    /// The theme registered under `id`.
    pub fn get(&self, id: &str) -> Option<ThemeDescriptor> {
        self.themes.read().iter().find(|theme| theme.id == id).cloned()
    }

    /// Whether a theme is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.themes.read().iter().any(|theme| theme.id == id)
    }

    /// Number of registered themes, including one under the default id.
    pub fn len(&self) -> usize {
        self.themes.read().len()
    }

    /// Whether no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.read().is_empty()
    }

    /// Themes for a selection UI.
    ///
    /// The built-in default entry always comes first, followed by registered
    /// themes sorted case-insensitively by display name. Themes with equal
    /// names keep their registration order. A theme registered under the
    /// default id is not listed separately.
    pub fn list(&self) -> Vec<ThemeEntry> {
        let themes = self.themes.read();
        let mut entries: Vec<ThemeEntry> = themes
            .iter()
            .filter(|theme| theme.id != DEFAULT_THEME_ID)
            .map(|theme| ThemeEntry::new(theme.id.as_str(), theme.name.as_str()))
            .collect();
        entries.sort_by_cached_key(|entry| entry.name.to_uppercase());

        entries.insert(0, ThemeEntry::new(DEFAULT_THEME_ID, DEFAULT_THEME_NAME));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InlineSource;

    fn descriptor(name: &str) -> ThemeDescriptor {
        ThemeDescriptor::new("", name, InlineSource::empty())
    }

    #[test]
    fn register_get_unregister() {
        let registry = ThemeRegistry::new();
        registry.register("seti", descriptor("Seti"));
        assert_eq!(registry.get("seti").map(|d| d.id), Some("seti".to_string()));

        assert!(registry.unregister("seti").is_some());
        assert!(registry.get("seti").is_none());
        assert!(registry.unregister("seti").is_none());
    }

    #[test]
    fn last_writer_wins() {
        let registry = ThemeRegistry::new();
        registry.register("seti", descriptor("Seti"));
        registry.register("seti", descriptor("Seti 2"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("seti").unwrap().name, "Seti 2");
    }

    #[test]
    fn empty_id_is_accepted() {
        let registry = ThemeRegistry::new();
        registry.register("", descriptor("Unnamed"));
        assert!(registry.contains(""));
    }

    #[test]
    fn list_sorts_by_name_with_default_first() {
        let registry = ThemeRegistry::new();
        registry.register("vs-minimal", descriptor("minimal"));
        registry.register("material", descriptor("Material Icons"));
        registry.register("seti", descriptor("Seti"));
        registry.register("default", descriptor("Shadow"));

        let ids: Vec<_> = registry.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["default", "material", "vs-minimal", "seti"]);
        assert_eq!(registry.list()[0].name, "Default");
    }

    #[test]
    fn empty_registry_lists_default() {
        assert_eq!(
            ThemeRegistry::new().list(),
            [ThemeEntry::new(DEFAULT_THEME_ID, DEFAULT_THEME_NAME)]
        );
    }

    #[test]
    fn equal_names_keep_registration_order() {
        let registry = ThemeRegistry::new();
        for id in ["z", "x", "y"] {
            registry.register(id, descriptor("Same"));
        }
        registry.register("a", descriptor("same"));
        // Re-registering keeps the original position.
        registry.register("z", descriptor("Same"));

        let ids: Vec<_> = registry.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["default", "z", "x", "y", "a"]);
    }
}
