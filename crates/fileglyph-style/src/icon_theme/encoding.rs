//! Wire encodings of theme documents.
//!
//! Themes ship in one of two structurally equivalent JSON layouts. The
//! minimized layout replaces every field name with a digit:
//!
//! | document          | definition        |
//! |-------------------|-------------------|
//! | `0` iconDefinitions | `0` iconPath      |
//! | `1` fileExtensions  | `1` fontCharacter |
//! | `2` fileNames       | `2` fontColor     |
//! | `3` languageIds     | `3` fontSize      |
//! |                     | `4` fontId        |
//!
//! Both layouts decode into the same [`ThemeDocument`], so nothing past this
//! module knows which one a theme used.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{IconDefinition, LookupTable, ThemeDocument, ThemeEncoding};
use crate::Result;
use crate::logging::targets;

#[derive(Debug, Deserialize)]
struct MinimizedDefinition {
    #[serde(rename = "0")]
    icon_path: Option<String>,
    #[serde(rename = "1")]
    font_character: Option<String>,
    #[serde(rename = "2")]
    font_color: Option<String>,
    #[serde(rename = "3")]
    font_size: Option<String>,
    #[serde(rename = "4")]
    font_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerboseDefinition {
    icon_path: Option<String>,
    font_character: Option<String>,
    font_color: Option<String>,
    font_size: Option<String>,
    font_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MinimizedDocument {
    #[serde(rename = "0")]
    icon_definitions: HashMap<String, MinimizedDefinition>,
    #[serde(rename = "1", default)]
    file_extensions: Option<LookupTable>,
    #[serde(rename = "2", default)]
    file_names: Option<LookupTable>,
    #[serde(rename = "3", default)]
    language_ids: Option<LookupTable>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerboseDocument {
    icon_definitions: HashMap<String, VerboseDefinition>,
    #[serde(default)]
    file_extensions: Option<LookupTable>,
    #[serde(default)]
    file_names: Option<LookupTable>,
    #[serde(default)]
    language_ids: Option<LookupTable>,
}

impl From<MinimizedDefinition> for IconDefinition {
    fn from(def: MinimizedDefinition) -> Self {
        Self {
            icon_path: def.icon_path,
            font_character: def.font_character,
            font_color: def.font_color,
            font_size: def.font_size,
            font_id: def.font_id,
        }
    }
}

impl From<VerboseDefinition> for IconDefinition {
    fn from(def: VerboseDefinition) -> Self {
        Self {
            icon_path: def.icon_path,
            font_character: def.font_character,
            font_color: def.font_color,
            font_size: def.font_size,
            font_id: def.font_id,
        }
    }
}

impl From<MinimizedDocument> for ThemeDocument {
    fn from(doc: MinimizedDocument) -> Self {
        Self {
            icon_definitions: convert_definitions(doc.icon_definitions),
            file_extensions: doc.file_extensions,
            file_names: doc.file_names,
            language_ids: doc.language_ids,
        }
    }
}

impl From<VerboseDocument> for ThemeDocument {
    fn from(doc: VerboseDocument) -> Self {
        Self {
            icon_definitions: convert_definitions(doc.icon_definitions),
            file_extensions: doc.file_extensions,
            file_names: doc.file_names,
            language_ids: doc.language_ids,
        }
    }
}

fn convert_definitions<D>(defs: HashMap<String, D>) -> HashMap<String, IconDefinition>
where
    D: Into<IconDefinition>,
{
    defs.into_iter().map(|(k, v)| (k, v.into())).collect()
}

fn decode_as<T>(value: serde_json::Value) -> Result<ThemeDocument>
where
    T: DeserializeOwned + Into<ThemeDocument>,
{
    let raw: T = serde_json::from_value(value)?;
    Ok(raw.into())
}

impl ThemeDocument {
    /// Decode a parsed JSON theme using the given encoding.
    pub fn from_value(value: serde_json::Value, encoding: ThemeEncoding) -> Result<Self> {
        let doc = match encoding {
            ThemeEncoding::Minimized => decode_as::<MinimizedDocument>(value)?,
            ThemeEncoding::Verbose => decode_as::<VerboseDocument>(value)?,
        };
        tracing::debug!(
            target: targets::DECODE,
            ?encoding,
            definitions = doc.icon_definitions.len(),
            "decoded icon theme"
        );
        Ok(doc)
    }

    /// Parse and decode JSON theme text using the given encoding.
    pub fn from_json(json: &str, encoding: ThemeEncoding) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_theme::IconKey;

    const MINIMIZED: &str = r##"{
        "0": {
            "1": { "0": "icons/npm.svg" },
            "2": { "1": "\\E001", "2": "#cc3e44", "3": "1.2em", "4": "seti" }
        },
        "1": { "json": 1 },
        "2": { "package.json": 1 },
        "3": { "python": 2 }
    }"##;

    const VERBOSE: &str = r##"{
        "iconDefinitions": {
            "1": { "iconPath": "icons/npm.svg" },
            "2": { "fontCharacter": "\\E001", "fontColor": "#cc3e44", "fontSize": "1.2em", "fontId": "seti" }
        },
        "fileExtensions": { "json": 1 },
        "fileNames": { "package.json": 1 },
        "languageIds": { "python": 2 }
    }"##;

    #[test]
    fn encodings_decode_identically() {
        let minimized = ThemeDocument::from_json(MINIMIZED, ThemeEncoding::Minimized).unwrap();
        let verbose = ThemeDocument::from_json(VERBOSE, ThemeEncoding::Verbose).unwrap();
        assert_eq!(minimized, verbose);

        let glyph = minimized.definition(IconKey(2)).unwrap();
        assert_eq!(glyph.font_character.as_deref(), Some("\\E001"));
        assert_eq!(glyph.font_id.as_deref(), Some("seti"));
        assert_eq!(minimized.language_id("python"), Some(IconKey(2)));
    }

    #[test]
    fn missing_tables_are_absent() {
        let doc = ThemeDocument::from_json(r#"{ "0": {} }"#, ThemeEncoding::Minimized).unwrap();
        assert!(doc.file_extensions.is_none());
        assert!(doc.file_names.is_none());
        assert!(doc.language_ids.is_none());
    }

    #[test]
    fn missing_definitions_is_an_error() {
        let err = ThemeDocument::from_json(r#"{ "1": { "js": 1 } }"#, ThemeEncoding::Minimized)
            .unwrap_err();
        assert!(matches!(err, crate::Error::Decode { .. }));
    }

    #[test]
    fn wrong_encoding_is_an_error() {
        assert!(ThemeDocument::from_json(VERBOSE, ThemeEncoding::Minimized).is_err());
    }
}
