//! Core types for the icon theme model.
//!
//! A loaded theme is a [`ThemeDocument`]: a table of [`IconDefinition`]s keyed by
//! [`IconKey`], plus three independent lookup tables (file extensions, file
//! names, language ids) that map a string to a key in that same key space.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque numeric key shared by the definitions table and the lookup tables.
///
/// The key is also the stable identifier emitted as the `file_id_<key>` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconKey(pub u32);

impl IconKey {
    /// Get the raw key value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Class name identifying elements resolved to this key.
    pub fn class_name(self) -> String {
        format!("file_id_{}", self.0)
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for IconKey {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// How a theme document is encoded on the wire.
///
/// The flag is carried by the theme descriptor, never sniffed from the
/// document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeEncoding {
    /// Numeric field names (`"0"`..`"4"`) to shrink file size.
    #[default]
    Minimized,
    /// Named camelCase fields (`iconDefinitions`, `fileExtensions`, ...).
    Verbose,
}

impl ThemeEncoding {
    /// Pick the encoding from an `isMinimized` flag.
    pub fn from_minimized(is_minimized: bool) -> Self {
        if is_minimized {
            Self::Minimized
        } else {
            Self::Verbose
        }
    }

    /// Check whether this is the minimized encoding.
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }
}

/// A single icon definition.
///
/// At most one of `icon_path` / `font_character` is meaningful; when both are
/// set the glyph wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconDefinition {
    /// Image path relative to the theme root.
    pub icon_path: Option<String>,
    /// Glyph content, already in CSS escape form (e.g. `\E001`).
    pub font_character: Option<String>,
    /// Glyph color.
    pub font_color: Option<String>,
    /// Glyph size.
    pub font_size: Option<String>,
    /// Font family of the glyph.
    pub font_id: Option<String>,
}

impl IconDefinition {
    /// Create a definition backed by an image.
    pub fn image(icon_path: impl Into<String>) -> Self {
        Self {
            icon_path: Some(icon_path.into()),
            ..Default::default()
        }
    }

    /// Create a definition backed by a font glyph.
    pub fn glyph(font_character: impl Into<String>) -> Self {
        Self {
            font_character: Some(font_character.into()),
            ..Default::default()
        }
    }

    /// Set the glyph color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Set the glyph size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Set the glyph font family.
    pub fn with_font(mut self, font_id: impl Into<String>) -> Self {
        self.font_id = Some(font_id.into());
        self
    }
}

/// Mapping from a lookup string to an icon key.
pub type LookupTable = HashMap<String, IconKey>;

/// A decoded icon theme, independent of its wire encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDocument {
    /// Definitions keyed by the stringified icon key.
    pub icon_definitions: HashMap<String, IconDefinition>,
    /// Extension (without leading dot, may itself contain dots) to key.
    pub file_extensions: Option<LookupTable>,
    /// Exact file name to key.
    pub file_names: Option<LookupTable>,
    /// Language id to key.
    pub language_ids: Option<LookupTable>,
}

impl ThemeDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a file name.
    pub fn file_name(&self, name: &str) -> Option<IconKey> {
        self.file_names.as_ref()?.get(name).copied()
    }

    /// Look up an extension.
    pub fn file_extension(&self, extension: &str) -> Option<IconKey> {
        self.file_extensions.as_ref()?.get(extension).copied()
    }

    /// Look up a language id.
    pub fn language_id(&self, language_id: &str) -> Option<IconKey> {
        self.language_ids.as_ref()?.get(language_id).copied()
    }

    /// Fetch the definition for a key.
    pub fn definition(&self, key: IconKey) -> Option<&IconDefinition> {
        self.icon_definitions.get(&key.to_string())
    }

    /// Add a definition.
    pub fn insert_definition(&mut self, key: impl Into<IconKey>, definition: IconDefinition) {
        self.icon_definitions
            .insert(key.into().to_string(), definition);
    }

    /// Map a file name to a key.
    pub fn insert_file_name(&mut self, name: impl Into<String>, key: impl Into<IconKey>) {
        self.file_names
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), key.into());
    }

    /// Map an extension to a key.
    pub fn insert_file_extension(&mut self, extension: impl Into<String>, key: impl Into<IconKey>) {
        self.file_extensions
            .get_or_insert_with(HashMap::new)
            .insert(extension.into(), key.into());
    }

    /// Map a language id to a key.
    pub fn insert_language_id(&mut self, language_id: impl Into<String>, key: impl Into<IconKey>) {
        self.language_ids
            .get_or_insert_with(HashMap::new)
            .insert(language_id.into(), key.into());
    }
}
