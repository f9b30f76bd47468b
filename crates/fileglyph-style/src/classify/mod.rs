//! File name classification.
//!
//! Every rendered file name is bucketed into a coarse *file type* (named
//! patterns first, then the bare extension) and a *language id* taken from the
//! host's syntax-mode lookup. Both act as fallback keys for icon resolution and
//! as the type classes in the class-name string the UI receives.

mod mode;
mod patterns;

pub use mode::{Mode, ModeLookup, ModeTable};
pub use patterns::{FileTypePattern, match_file_type, patterns};

/// The classifier's verdict for one file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileClass {
    /// Named pattern bucket or extension; may be empty.
    pub file_type: String,
    /// Final segment of the syntax mode id; may be empty.
    pub language_id: String,
}

impl FileClass {
    /// Classify `file_name` using `modes` for the language id.
    pub fn of(file_name: &str, modes: &dyn ModeLookup) -> Self {
        Self {
            file_type: file_type(file_name),
            language_id: modes.mode_for_path(file_name).name().to_string(),
        }
    }

    /// Class names shared by every file, themed or not.
    ///
    /// `file file_type_default file_type_<languageId> file_type_<fileType>`
    pub fn class_names(&self) -> String {
        format!(
            "file file_type_default file_type_{} file_type_{}",
            self.language_id, self.file_type
        )
    }
}

/// Resolve the coarse file type of `file_name`.
///
/// The first named pattern that matches wins; otherwise the lower-cased text
/// after the final `.` is used, or the empty string when there is none.
pub fn file_type(file_name: &str) -> String {
    if let Some(named) = match_file_type(file_name) {
        return named.to_string();
    }

    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Classify `file_name`. Shorthand for [`FileClass::of`].
pub fn classify(file_name: &str, modes: &dyn ModeLookup) -> FileClass {
    FileClass::of(file_name, modes)
}
