//! Per-file resolution hook.
//!
//! The UI asks the hook for a class-name string once per rendered file name.
//! Exactly one hook is active at a time; [`HookHandle`] is the slot holding
//! it. The lifecycle manager swaps a themed hook in on load and the default
//! hook back in on reset, and every clone of the handle sees the swap.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use fileglyph_style::classify::{FileClass, ModeLookup};
use fileglyph_style::icon_theme::ThemeResolver;

/// Produces the class-name string for a file name.
pub trait FileIconHook: Send + Sync {
    /// Class names for `file_name`.
    fn class_names(&self, file_name: &str) -> String;

    /// Id of the theme backing this hook, if any.
    fn theme_id(&self) -> Option<&str> {
        None
    }
}

/// Hook used while no theme is loaded: classifier classes only.
pub struct DefaultHook {
    modes: Arc<dyn ModeLookup>,
}

impl DefaultHook {
    pub fn new(modes: Arc<dyn ModeLookup>) -> Self {
        Self { modes }
    }
}

impl FileIconHook for DefaultHook {
    fn class_names(&self, file_name: &str) -> String {
        FileClass::of(file_name, self.modes.as_ref()).class_names()
    }
}

/// Hook backed by a loaded theme.
pub struct ThemedHook {
    theme_id: String,
    modes: Arc<dyn ModeLookup>,
    resolver: Mutex<ThemeResolver>,
}

impl ThemedHook {
    pub fn new(theme_id: impl Into<String>, resolver: ThemeResolver, modes: Arc<dyn ModeLookup>) -> Self {
        Self {
            theme_id: theme_id.into(),
            modes,
            resolver: Mutex::new(resolver),
        }
    }
}

impl FileIconHook for ThemedHook {
    fn class_names(&self, file_name: &str) -> String {
        self.resolver
            .lock()
            .class_names(file_name, self.modes.as_ref())
    }

    fn theme_id(&self) -> Option<&str> {
        Some(&self.theme_id)
    }
}

/// Shared slot holding the active hook.
#[derive(Clone)]
pub struct HookHandle {
    slot: Arc<RwLock<Arc<dyn FileIconHook>>>,
}

impl HookHandle {
    /// Create a slot holding `hook`.
    pub fn new(hook: Arc<dyn FileIconHook>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(hook)),
        }
    }

    /// Class names for `file_name` from the active hook.
    pub fn class_names(&self, file_name: &str) -> String {
        // Clone out so a swap during resolution never waits on the resolver.
        let hook = self.slot.read().clone();
        hook.class_names(file_name)
    }

    /// Id of the theme behind the active hook.
    pub fn theme_id(&self) -> Option<String> {
        self.slot.read().theme_id().map(str::to_string)
    }

    /// Whether the active hook is backed by a theme.
    pub fn is_themed(&self) -> bool {
        self.slot.read().theme_id().is_some()
    }

    pub(crate) fn install(&self, hook: Arc<dyn FileIconHook>) {
        *self.slot.write() = hook;
    }
}

impl fmt::Debug for HookHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookHandle")
            .field("theme_id", &self.theme_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileglyph_style::prelude::*;

    fn modes() -> Arc<dyn ModeLookup> {
        Arc::new(ModeTable::builtin())
    }

    #[test]
    fn default_hook_returns_classifier_classes() {
        let handle = HookHandle::new(Arc::new(DefaultHook::new(modes())));
        assert_eq!(
            handle.class_names("main.rs"),
            "file file_type_default file_type_rust file_type_rs"
        );
        assert!(!handle.is_themed());
    }

    #[test]
    fn install_is_visible_through_clones() {
        let handle = HookHandle::new(Arc::new(DefaultHook::new(modes())));
        let held_by_ui = handle.clone();

        let mut document = ThemeDocument::new();
        document.insert_definition(1, IconDefinition::glyph("\\E001"));
        document.insert_file_extension("rs", 1);
        let resolver = ThemeResolver::new(document, None, RuleBuckets::new());
        handle.install(Arc::new(ThemedHook::new("seti", resolver, modes())));

        assert_eq!(held_by_ui.theme_id().as_deref(), Some("seti"));
        assert!(held_by_ui.class_names("main.rs").ends_with(" file_id_1"));
    }
}
