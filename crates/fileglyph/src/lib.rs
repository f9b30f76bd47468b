//! Fileglyph - swappable file icon themes for editor file trees.
//!
//! This is the runtime crate: it registers themes, persists the user's
//! choice, and attaches the active theme to a presentation surface. The
//! resolution engine itself lives in [`style`] (`fileglyph-style`).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use fileglyph::prelude::*;
//!
//! # async fn run() -> fileglyph::Result<()> {
//! let surface = Arc::new(InMemorySurface::new());
//! let storage = Arc::new(SettingsFile::default_location()?);
//! let service = IconThemeService::new(surface.clone(), Arc::new(ModeTable::builtin()), storage);
//!
//! ThemePack::open("/usr/share/fileglyph/seti").await?.register(service.registry());
//! let hook = service.init().await;
//!
//! let classes = hook.class_names("package.json");
//! println!("{classes}\n{}", surface.stylesheet());
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod hook;
pub mod lifecycle;
pub mod prelude;
pub mod registry;
pub mod service;
pub mod settings;
pub mod source;
pub mod surface;

mod error;

pub use error::{Error, Result};
pub use service::IconThemeService;

/// Resolution engine.
pub mod style {
    pub use fileglyph_style::*;
}
