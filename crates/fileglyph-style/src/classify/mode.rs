//! Syntax mode lookup.
//!
//! The language id of a file comes from the host editor's syntax-mode table.
//! [`ModeLookup`] is that collaborator; [`ModeTable`] is a small built-in
//! implementation keyed by exact file name and extension.

use std::collections::HashMap;

/// A syntax mode as reported by the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mode {
    /// Mode identifier, e.g. `ace/mode/javascript`.
    pub id: String,
}

impl Mode {
    /// Create a mode from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The final path segment of the identifier, used as the language id.
    pub fn name(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or_default()
    }
}

/// Host collaborator resolving a file name to its syntax mode.
///
/// Must be synchronous and pure; it is called on every resolution.
pub trait ModeLookup: Send + Sync {
    /// Return the mode for a file name. Unknown files yield an empty id.
    fn mode_for_path(&self, file_name: &str) -> Mode;
}

impl<F> ModeLookup for F
where
    F: Fn(&str) -> Mode + Send + Sync,
{
    fn mode_for_path(&self, file_name: &str) -> Mode {
        self(file_name)
    }
}

const MODE_PREFIX: &str = "ace/mode/";

/// `(mode, extensions)` for the built-in table.
const BUILTIN_EXTENSIONS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "mjs", "cjs"]),
    ("jsx", &["jsx"]),
    ("typescript", &["ts", "mts", "cts"]),
    ("tsx", &["tsx"]),
    ("json", &["json", "webmanifest"]),
    ("json5", &["json5"]),
    ("css", &["css"]),
    ("scss", &["scss"]),
    ("less", &["less"]),
    ("html", &["html", "htm", "xhtml"]),
    ("markdown", &["md", "markdown"]),
    ("python", &["py", "pyw"]),
    ("rust", &["rs"]),
    ("toml", &["toml"]),
    ("yaml", &["yaml", "yml"]),
    ("xml", &["xml", "rdf", "xsl"]),
    ("svg", &["svg"]),
    ("sh", &["sh", "bash", "zsh"]),
    ("c_cpp", &["c", "cc", "cpp", "cxx", "h", "hh", "hpp"]),
    ("csharp", &["cs"]),
    ("java", &["java"]),
    ("kotlin", &["kt", "kts"]),
    ("golang", &["go"]),
    ("ruby", &["rb"]),
    ("php", &["php"]),
    ("swift", &["swift"]),
    ("dart", &["dart"]),
    ("lua", &["lua"]),
    ("sql", &["sql"]),
    ("ini", &["ini", "conf", "cfg"]),
    ("makefile", &["mk"]),
    ("text", &["txt"]),
];

/// `(mode, file names)` for the built-in table.
const BUILTIN_FILE_NAMES: &[(&str, &[&str])] = &[
    ("dockerfile", &["dockerfile"]),
    ("makefile", &["makefile", "gnumakefile"]),
    ("gitignore", &[".gitignore"]),
];

/// Table-driven [`ModeLookup`].
///
/// Exact file names (case-insensitive) are checked before the extension
/// after the final dot; an optional fallback mode covers everything else.
#[derive(Debug, Clone, Default)]
pub struct ModeTable {
    by_file_name: HashMap<String, String>,
    by_extension: HashMap<String, String>,
    fallback: Option<String>,
}

impl ModeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table covering common languages with `ace/mode/*` ids.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (mode, extensions) in BUILTIN_EXTENSIONS {
            for ext in *extensions {
                table = table.with_extension(*ext, format!("{MODE_PREFIX}{mode}"));
            }
        }
        for (mode, names) in BUILTIN_FILE_NAMES {
            for name in *names {
                table = table.with_file_name(*name, format!("{MODE_PREFIX}{mode}"));
            }
        }
        table
    }

    /// Map an extension (without the dot) to a mode id.
    pub fn with_extension(mut self, extension: impl Into<String>, mode_id: impl Into<String>) -> Self {
        self.by_extension
            .insert(extension.into().to_lowercase(), mode_id.into());
        self
    }

    /// Map an exact file name to a mode id.
    pub fn with_file_name(mut self, file_name: impl Into<String>, mode_id: impl Into<String>) -> Self {
        self.by_file_name
            .insert(file_name.into().to_lowercase(), mode_id.into());
        self
    }

    /// Mode reported for files nothing else matches.
    pub fn with_fallback(mut self, mode_id: impl Into<String>) -> Self {
        self.fallback = Some(mode_id.into());
        self
    }
}

impl ModeLookup for ModeTable {
    fn mode_for_path(&self, file_name: &str) -> Mode {
        let lower = file_name.to_lowercase();
        let found = self.by_file_name.get(&lower).or_else(|| {
            lower
                .rsplit_once('.')
                .and_then(|(_, ext)| self.by_extension.get(ext))
        });

        match found.or(self.fallback.as_ref()) {
            Some(id) => Mode::new(id.clone()),
            None => Mode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_name_is_last_segment() {
        assert_eq!(Mode::new("ace/mode/javascript").name(), "javascript");
        assert_eq!(Mode::new("python").name(), "python");
        assert_eq!(Mode::default().name(), "");
    }

    #[test]
    fn builtin_extensions() {
        let table = ModeTable::builtin();
        assert_eq!(table.mode_for_path("main.rs").id, "ace/mode/rust");
        assert_eq!(table.mode_for_path("App.TSX").name(), "tsx");
        assert_eq!(table.mode_for_path("webpack.config.js").name(), "javascript");
    }

    #[test]
    fn file_names_before_extensions() {
        let table = ModeTable::builtin();
        assert_eq!(table.mode_for_path("Dockerfile").name(), "dockerfile");
        assert_eq!(table.mode_for_path("Makefile").name(), "makefile");
    }

    #[test]
    fn unknown_files_have_no_mode() {
        let table = ModeTable::builtin();
        assert_eq!(table.mode_for_path("LICENSE").name(), "");
        assert_eq!(table.mode_for_path("data.unknownext").name(), "");

        let table = table.with_fallback("ace/mode/text");
        assert_eq!(table.mode_for_path("LICENSE").name(), "text");
    }

    #[test]
    fn closures_are_lookups() {
        let lookup = |_: &str| Mode::new("ace/mode/python");
        assert_eq!(lookup.mode_for_path("x").name(), "python");
    }
}
