//! File icon theme engine for Fileglyph.
//!
//! This crate turns an icon theme document into presentation rules, one file
//! name at a time:
//!
//! - **Classification**: coarse file type and language id for any file name
//! - **Theme model**: canonical theme documents decoded from either wire layout
//! - **Resolution**: cascading lookup across file names, extensions and
//!   language ids
//! - **Rule synthesis**: at most one CSS rule per lookup name, routed into
//!   ordered buckets
//!
//! It holds no global state. The runtime pieces (presentation surface, hook
//! slot, registry, settings) live in the `fileglyph` crate.
//!
//! # Example
//!
//! ```
//! use fileglyph_style::prelude::*;
//!
//! let mut document = ThemeDocument::new();
//! document.insert_definition(3, IconDefinition::image("webpack.svg"));
//! document.insert_file_name("webpack.config.js", 3);
//!
//! let buckets = RuleBuckets::new();
//! let mut resolver = ThemeResolver::new(document, Some("/seti".into()), buckets.clone());
//!
//! let classes = resolver.class_names("webpack.config.js", &ModeTable::builtin());
//! assert!(classes.ends_with("file_id_3"));
//! assert_eq!(buckets.file_names.read().len(), 1);
//! ```

pub mod classify;
pub mod icon_theme;
pub mod logging;
pub mod parser;
pub mod rules;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::classify::{FileClass, Mode, ModeLookup, ModeTable, classify};
    pub use crate::icon_theme::{
        IconDefinition, IconKey, LookupKind, ResolveRequest, ThemeDocument, ThemeEncoding,
        ThemeResolver,
    };
    pub use crate::rules::{
        IconRule, ResolutionCache, RuleBucket, RuleBuckets, RuleSynthesizer, RuleTarget,
        SharedBucket,
    };
}
