//! Theme lifecycle.
//!
//! [`IconThemeManager`] attaches a theme's containers to the presentation
//! surface, installs the themed hook, and tears both down again on reset.
//!
//! ```text
//! Unloaded --load--> Loading --document ok--> Loaded
//!     ^                  |                      |
//!     +---- failure -----+------- reset --------+
//! ```
//!
//! Loads are serialized: a load holds the load lock from its reset until its
//! containers are attached, so two themes never write to the surface at once.
//! A `reset` while a load is waiting on its document supersedes that load.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use fileglyph_style::classify::ModeLookup;
use fileglyph_style::icon_theme::{ThemeDocument, ThemeResolver};
use fileglyph_style::logging::targets;
use fileglyph_style::rules::RuleBuckets;

use crate::hook::{DefaultHook, HookHandle, ThemedHook};
use crate::registry::ThemeDescriptor;
use crate::surface::{ContainerKind, PresentationSurface};

/// Lifecycle state of the icon theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    /// No theme attached.
    #[default]
    Unloaded,
    /// Waiting for the theme document.
    Loading,
    /// Theme attached and hook installed.
    Loaded,
}

struct Inner {
    state: ThemeState,
    theme_id: Option<String>,
    buckets: RuleBuckets,
    generation: u64,
}

/// Loads and unloads icon themes on a presentation surface.
pub struct IconThemeManager {
    surface: Arc<dyn PresentationSurface>,
    modes: Arc<dyn ModeLookup>,
    hook: HookHandle,
    inner: Mutex<Inner>,
    load_lock: tokio::sync::Mutex<()>,
}

impl IconThemeManager {
    /// Create a manager with nothing loaded and the default hook installed.
    pub fn new(surface: Arc<dyn PresentationSurface>, modes: Arc<dyn ModeLookup>) -> Self {
        let hook = HookHandle::new(Arc::new(DefaultHook::new(modes.clone())));
        Self {
            surface,
            modes,
            hook,
            inner: Mutex::new(Inner {
                state: ThemeState::Unloaded,
                theme_id: None,
                buckets: RuleBuckets::new(),
                generation: 0,
            }),
            load_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// The hook slot the UI calls per file name.
    pub fn hook(&self) -> HookHandle {
        self.hook.clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ThemeState {
        self.inner.lock().state
    }

    /// Id of the loaded theme.
    pub fn loaded_theme(&self) -> Option<String> {
        self.inner.lock().theme_id.clone()
    }

    /// The rule buckets the next (or current) theme writes into.
    pub fn buckets(&self) -> RuleBuckets {
        self.inner.lock().buckets.clone()
    }

    /// Detach every container, drop the resolution cache and restore the
    /// default hook.
    ///
    /// Fresh empty buckets are created for the next load. Resetting while
    /// nothing is loaded is harmless.
    pub fn reset(&self) {
        // Detach under the state lock; load attaches under it too.
        let mut inner = self.inner.lock();
        for kind in ContainerKind::ALL {
            self.surface.detach(kind);
        }

        inner.generation += 1;
        inner.state = ThemeState::Unloaded;
        inner.theme_id = None;
        inner.buckets = RuleBuckets::new();

        // Dropping the themed hook drops its resolver and cache with it.
        self.hook
            .install(Arc::new(DefaultHook::new(self.modes.clone())));
        drop(inner);
        debug!(target: targets::LIFECYCLE, "icon theme reset");
    }

    /// Reset, then load `descriptor`.
    ///
    /// `None` leaves the manager unloaded. A source that fails or yields no
    /// document, or a document that does not decode, also leaves it unloaded;
    /// the failure is logged and not returned. The returned handle is the
    /// same slot as [`hook`](Self::hook).
    pub async fn load(&self, descriptor: Option<&ThemeDescriptor>) -> HookHandle {
        let _serial = self.load_lock.lock().await;
        self.reset();

        let Some(descriptor) = descriptor else {
            return self.hook();
        };

        let generation = {
            let mut inner = self.inner.lock();
            inner.state = ThemeState::Loading;
            inner.generation
        };
        info!(target: targets::LIFECYCLE, id = %descriptor.id, "loading icon theme");

        let value = match descriptor.source.load().await {
            Ok(Some(value)) => value,
            Ok(None) => {
                warn!(target: targets::LIFECYCLE, id = %descriptor.id, "icon theme has no document");
                self.abandon(generation);
                return self.hook();
            }
            Err(e) => {
                warn!(target: targets::LIFECYCLE, id = %descriptor.id, "failed to load icon theme: {}", e);
                self.abandon(generation);
                return self.hook();
            }
        };

        let document = match ThemeDocument::from_value(value, descriptor.encoding) {
            Ok(document) => document,
            Err(e) => {
                warn!(target: targets::LIFECYCLE, id = %descriptor.id, "failed to decode icon theme: {}", e);
                self.abandon(generation);
                return self.hook();
            }
        };

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(target: targets::LIFECYCLE, id = %descriptor.id, "icon theme load superseded by reset");
            return self.hook();
        }

        self.surface
            .attach_link(ContainerKind::Folders, &descriptor.css_url);
        self.surface
            .attach_bucket(ContainerKind::LanguageIds, inner.buckets.language_ids.clone());
        self.surface
            .attach_bucket(ContainerKind::FileExtensions, inner.buckets.file_extensions.clone());
        self.surface
            .attach_bucket(ContainerKind::FileNames, inner.buckets.file_names.clone());

        let resolver = ThemeResolver::new(document, descriptor.root_url.clone(), inner.buckets.clone());
        self.hook.install(Arc::new(ThemedHook::new(
            descriptor.id.clone(),
            resolver,
            self.modes.clone(),
        )));

        inner.state = ThemeState::Loaded;
        inner.theme_id = Some(descriptor.id.clone());
        drop(inner);

        info!(target: targets::LIFECYCLE, id = %descriptor.id, "icon theme loaded");
        self.hook()
    }

    fn abandon(&self, generation: u64) {
        let mut inner = self.inner.lock();
        if inner.generation == generation {
            inner.state = ThemeState::Unloaded;
        }
    }
}
