//! Icon resolution against a loaded theme.

use tracing::warn;

use crate::classify::{FileClass, ModeLookup};
use crate::icon_theme::{IconKey, ThemeDocument};
use crate::logging::targets;
use crate::rules::{RuleBuckets, RuleSynthesizer, RuleTarget};

/// Keyspace searched first for a lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// Search the file name table.
    FileName,
    /// Search the file extension table.
    Extension,
}

impl From<LookupKind> for RuleTarget {
    fn from(kind: LookupKind) -> Self {
        match kind {
            LookupKind::FileName => RuleTarget::FileName,
            LookupKind::Extension => RuleTarget::Extension,
        }
    }
}

/// A single resolution request.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    /// Whole file name or extension suffix.
    pub name: &'a str,
    /// Table to search for `name`.
    pub kind: LookupKind,
    /// Classifier file type, used for the type selector.
    pub file_type: &'a str,
    /// Language id to fall back to when `name` misses.
    pub language_id: Option<&'a str>,
}

impl<'a> ResolveRequest<'a> {
    /// Request a file name lookup.
    pub fn file_name(name: &'a str) -> Self {
        Self {
            name,
            kind: LookupKind::FileName,
            file_type: "",
            language_id: None,
        }
    }

    /// Request an extension lookup.
    pub fn extension(extension: &'a str) -> Self {
        Self {
            name: extension,
            kind: LookupKind::Extension,
            file_type: "",
            language_id: None,
        }
    }

    /// Set the classifier file type.
    pub fn with_file_type(mut self, file_type: &'a str) -> Self {
        self.file_type = file_type;
        self
    }

    /// Set the language id fallback. An empty id disables the fallback.
    pub fn with_language_id(mut self, language_id: &'a str) -> Self {
        self.language_id = Some(language_id).filter(|id| !id.is_empty());
        self
    }
}

/// Resolves file names to icon keys for one loaded theme, emitting a rule for
/// each first-seen match.
#[derive(Debug)]
pub struct ThemeResolver {
    document: ThemeDocument,
    synthesizer: RuleSynthesizer,
}

impl ThemeResolver {
    /// Create a resolver for `document` writing rules into `buckets`.
    pub fn new(document: ThemeDocument, root_url: Option<String>, buckets: RuleBuckets) -> Self {
        Self {
            document,
            synthesizer: RuleSynthesizer::new(root_url, buckets),
        }
    }

    /// The theme document this resolver searches.
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// The synthesizer holding the resolution cache and rule buckets.
    pub fn synthesizer(&self) -> &RuleSynthesizer {
        &self.synthesizer
    }

    /// Resolve one name.
    ///
    /// The requested table is searched first; on a miss the language table is
    /// searched for `language_id`, and a hit there synthesizes a language rule
    /// named after the language id. Key `0` matches in the file name and
    /// extension tables but not in the language table. `None` means nothing
    /// matched and no rule was emitted.
    pub fn resolve(&mut self, request: &ResolveRequest<'_>) -> Option<IconKey> {
        let direct = match request.kind {
            LookupKind::FileName => self.document.file_name(request.name),
            LookupKind::Extension => self.document.file_extension(request.name),
        };

        let (key, name, target) = match direct {
            Some(key) => (key, request.name, RuleTarget::from(request.kind)),
            None => {
                let language_id = request.language_id?;
                // Key 0 in the language table does not count as a match.
                let key = self
                    .document
                    .language_id(language_id)
                    .filter(|key| key.get() != 0)?;
                (key, language_id, RuleTarget::LanguageId)
            }
        };

        match self.document.definition(key) {
            Some(definition) => {
                if let Err(e) =
                    self.synthesizer
                        .synthesize(name, key, request.file_type, target, definition)
                {
                    warn!(target: targets::RULES, lookup = name, "rule rejected: {}", e);
                }
            }
            None => {
                warn!(
                    target: targets::RULES,
                    lookup = name,
                    key = key.get(),
                    "icon key has no definition"
                );
            }
        }

        Some(key)
    }

    /// Resolve a bare file name through the segment cascade.
    ///
    /// The whole name is tried against the file name table, then each suffix
    /// left after dropping leading dot-separated segments is tried against the
    /// extension table. Only the final lookup falls back to the language id.
    pub fn resolve_file(&mut self, file_name: &str, class: &FileClass) -> Option<IconKey> {
        let segments: Vec<&str> = file_name.split('.').collect();
        let last = segments.len() - 1;

        for start in 0..segments.len() {
            let suffix = segments[start..].join(".");
            let request = ResolveRequest {
                name: &suffix,
                kind: if start == 0 {
                    LookupKind::FileName
                } else {
                    LookupKind::Extension
                },
                file_type: &class.file_type,
                language_id: Some(class.language_id.as_str())
                    .filter(|id| start == last && !id.is_empty()),
            };

            if let Some(key) = self.resolve(&request) {
                return Some(key);
            }
        }

        None
    }

    /// Compute the class name string for `file_name`.
    ///
    /// `file file_type_default file_type_<languageId> file_type_<fileType>`,
    /// followed by ` file_id_<key>` when the file resolved.
    pub fn class_names(&mut self, file_name: &str, modes: &dyn ModeLookup) -> String {
        let class = FileClass::of(file_name, modes);
        let base = class.class_names();
        match self.resolve_file(file_name, &class) {
            Some(key) => format!("{} {}", base, key.class_name()),
            None => base,
        }
    }
}
