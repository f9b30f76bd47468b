//! Prelude module for Fileglyph.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use fileglyph::prelude::*;
//! ```
//!
//! This provides access to:
//! - The service facade (`IconThemeService`)
//! - Theme registration (`ThemeDescriptor`, theme sources, `ThemePack`)
//! - Host collaborators (`PresentationSurface`, `HookHandle`, `SettingsStorage`)
//! - Engine types from `fileglyph-style`

// ============================================================================
// Service and Lifecycle
// ============================================================================

pub use crate::lifecycle::{IconThemeManager, ThemeState};
pub use crate::service::IconThemeService;

// ============================================================================
// Themes
// ============================================================================

pub use crate::bundle::{PackTheme, ThemePack};
pub use crate::registry::{
    DEFAULT_THEME_ID, DEFAULT_THEME_NAME, ThemeDescriptor, ThemeEntry, ThemeRegistry,
};
pub use crate::source::{FnSource, InlineSource, JsonFileSource, ThemeSource};

// ============================================================================
// Host Collaborators
// ============================================================================

pub use crate::hook::{FileIconHook, HookHandle};
pub use crate::settings::{Settings, SettingsFile, SettingsStorage};
pub use crate::surface::{ContainerKind, InMemorySurface, PresentationSurface};

// ============================================================================
// Engine
// ============================================================================

pub use fileglyph_style::classify::{Mode, ModeLookup, ModeTable};
pub use fileglyph_style::icon_theme::{IconDefinition, IconKey, ThemeDocument, ThemeEncoding};

pub use crate::{Error, Result};
