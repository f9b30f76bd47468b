//! Icon theme model and resolution.
//!
//! A theme is an externally authored JSON document mapping file names,
//! extensions and language ids to icon definitions. This module provides:
//!
//! - **Model**: [`ThemeDocument`], [`IconDefinition`] and [`IconKey`]
//! - **Decoding**: both wire layouts ([`ThemeEncoding`]) into one document
//! - **Resolution**: [`ThemeResolver`], the cascading lookup that emits a rule
//!   for every first-seen match
//!
//! # Example
//!
//! ```
//! use fileglyph_style::classify::ModeTable;
//! use fileglyph_style::icon_theme::{ThemeDocument, ThemeEncoding, ThemeResolver};
//! use fileglyph_style::rules::RuleBuckets;
//!
//! let json = r##"{
//!     "iconDefinitions": { "1": { "fontCharacter": "\\E001", "fontColor": "#cbcb41" } },
//!     "fileExtensions": { "json": 1 }
//! }"##;
//! let document = ThemeDocument::from_json(json, ThemeEncoding::Verbose)?;
//!
//! let buckets = RuleBuckets::new();
//! let mut resolver = ThemeResolver::new(document, None, buckets.clone());
//! let classes = resolver.class_names("data.json", &ModeTable::builtin());
//!
//! assert_eq!(classes, "file file_type_default file_type_json file_type_json file_id_1");
//! assert_eq!(buckets.file_extensions.read().len(), 1);
//! # Ok::<(), fileglyph_style::Error>(())
//! ```

mod encoding;
mod resolver;
mod types;

pub use resolver::{LookupKind, ResolveRequest, ThemeResolver};
pub use types::{IconDefinition, IconKey, LookupTable, ThemeDocument, ThemeEncoding};
