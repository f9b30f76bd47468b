//! Named file type patterns.
//!
//! Patterns are tested in table order and the first match wins, so more
//! specific names must come before the generic ones that would also match.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// `(file type, pattern)` pairs, matched case-insensitively.
const PATTERN_SOURCES: &[(&str, &str)] = &[
    ("babel", r"\.babelrc$"),
    ("jsmap", r"\.js\.map$"),
    ("yarn", r"^yarn\.lock$"),
    ("testjs", r"\.test\.js$"),
    ("testts", r"\.test\.ts$"),
    ("cssmap", r"\.css\.map$"),
    ("typescriptdef", r"\.d\.ts$"),
    ("clojurescript", r"\.cljs$"),
    ("cppheader", r"\.(hh|hpp)$"),
    ("jsconfig", r"^jsconfig.json$"),
    ("tsconfig", r"^tsconfig.json$"),
    ("android", r"\.(apk|aab|slim)$"),
    ("jsbeautify", r"^\.jsbeautifyrc$"),
    ("webpack", r"^webpack\.config\.js$"),
    ("audio", r"\.(mp3|wav|ogg|flac|aac)$"),
    ("git", r"(^\.gitignore$)|(^\.gitmodules$)"),
    ("video", r"\.(mp4|m4a|mov|3gp|wmv|flv|avi)$"),
    ("image", r"\.(png|jpg|jpeg|gif|bmp|ico|webp)$"),
    ("npm", r"(^package\.json$)|(^package-lock\.json$)"),
    ("compressed", r"\.(zip|rar|7z|tar|gz|gzip|dmg|iso)$"),
    (
        "eslint",
        r"(^\.eslintrc(\.(json5?|ya?ml|toml))?$|eslint\.config\.(c?js|json)$)",
    ),
    (
        "postcssconfig",
        r"(^\.postcssrc(\.(json5?|ya?ml|toml))?$|postcss\.config\.(c?js|json)$)",
    ),
    (
        "prettier",
        r"(^\.prettierrc(\.(json5?|ya?ml|toml))?$|prettier\.config\.(c?js|json)$)",
    ),
];

/// A compiled file type pattern.
#[derive(Debug)]
pub struct FileTypePattern {
    /// The bucket name reported on a match.
    pub file_type: &'static str,
    regex: Regex,
}

impl FileTypePattern {
    /// Test a file name against this pattern.
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

static PATTERNS: OnceLock<Vec<FileTypePattern>> = OnceLock::new();

/// The compiled pattern table, in match order.
pub fn patterns() -> &'static [FileTypePattern] {
    PATTERNS.get_or_init(|| {
        PATTERN_SOURCES
            .iter()
            .filter_map(|&(file_type, source)| {
                match RegexBuilder::new(source).case_insensitive(true).build() {
                    Ok(regex) => Some(FileTypePattern { file_type, regex }),
                    Err(e) => {
                        tracing::warn!(
                            target: crate::logging::targets::RULES,
                            "skipping file type pattern '{}': {}",
                            file_type,
                            e
                        );
                        None
                    }
                }
            })
            .collect()
    })
}

/// Find the first named file type matching `file_name`.
pub fn match_file_type(file_name: &str) -> Option<&'static str> {
    patterns()
        .iter()
        .find(|p| p.is_match(file_name))
        .map(|p| p.file_type)
}
