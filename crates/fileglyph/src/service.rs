//! Icon theme service.
//!
//! [`IconThemeService`] ties the registry, the persisted selection and the
//! lifecycle manager together. It is the entry point a host uses to offer a
//! theme picker and to switch themes.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use fileglyph_style::classify::ModeLookup;
use fileglyph_style::logging::targets;

use crate::hook::HookHandle;
use crate::lifecycle::{IconThemeManager, ThemeState};
use crate::registry::{
    DEFAULT_THEME_ID, DEFAULT_THEME_NAME, ThemeDescriptor, ThemeEntry, ThemeRegistry,
};
use crate::settings::{self, Settings, SettingsStorage};
use crate::surface::PresentationSurface;

/// Theme registry plus active theme selection.
pub struct IconThemeService {
    registry: ThemeRegistry,
    manager: IconThemeManager,
    storage: Arc<dyn SettingsStorage>,
    settings: RwLock<Settings>,
    select_lock: tokio::sync::Mutex<()>,
}

impl IconThemeService {
    /// Create a service with no themes registered and nothing loaded.
    pub fn new(
        surface: Arc<dyn PresentationSurface>,
        modes: Arc<dyn ModeLookup>,
        storage: Arc<dyn SettingsStorage>,
    ) -> Self {
        Self {
            registry: ThemeRegistry::new(),
            manager: IconThemeManager::new(surface, modes),
            storage,
            settings: RwLock::new(Settings::default()),
            select_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Read the persisted settings and activate the stored theme.
    ///
    /// Register themes before calling this; a stored id with no registered
    /// theme is corrected to `"default"` and persisted.
    pub async fn init(&self) -> HookHandle {
        let stored = settings::load(self.storage.as_ref()).await;
        debug!(target: targets::SETTINGS, icon_theme = %stored.icon_theme, "restoring icon theme");
        *self.settings.write() = stored.clone();
        self.set_active(&stored.icon_theme).await
    }

    /// The theme registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// The lifecycle manager driving the surface.
    pub fn manager(&self) -> &IconThemeManager {
        &self.manager
    }

    /// Register `descriptor` under `id`.
    pub fn register(&self, id: impl Into<String>, descriptor: ThemeDescriptor) {
        self.registry.register(id, descriptor);
    }

    /// Remove the theme registered under `id`. An active theme stays loaded.
    pub fn unregister(&self, id: &str) -> Option<ThemeDescriptor> {
        self.registry.unregister(id)
    }

    /// The theme registered under `id`.
    pub fn get_theme(&self, id: &str) -> Option<ThemeDescriptor> {
        self.registry.get(id)
    }

    /// Themes for a selection UI, default first.
    pub fn list(&self) -> Vec<ThemeEntry> {
        self.registry.list()
    }

    /// Display names in [`list`](Self::list) order.
    pub fn theme_names(&self) -> Vec<String> {
        self.list().into_iter().map(|entry| entry.name).collect()
    }

    /// Activate the theme registered under `id`.
    ///
    /// An unknown id activates `"default"` instead. The resulting id is
    /// persisted before the theme is loaded. Persistence and load failures
    /// are logged, never returned. Calls are serialized, so the stored
    /// selection always names the theme that ends up loaded.
    pub async fn set_active(&self, id: &str) -> HookHandle {
        let _serial = self.select_lock.lock().await;
        let descriptor = if id == DEFAULT_THEME_ID {
            None
        } else {
            self.registry.get(id)
        };
        if descriptor.is_none() && id != DEFAULT_THEME_ID {
            debug!(target: targets::REGISTRY, id, "unknown icon theme, using default");
        }

        let resolved = descriptor
            .as_ref()
            .map_or(DEFAULT_THEME_ID, |d| d.id.as_str())
            .to_string();
        let snapshot = {
            let mut settings = self.settings.write();
            settings.icon_theme = resolved;
            settings.clone()
        };

        if let Err(e) = settings::save(self.storage.as_ref(), &snapshot).await {
            warn!(target: targets::SETTINGS, "failed to save settings: {}", e);
        }

        self.manager.load(descriptor.as_ref()).await
    }

    /// Activate the first listed theme whose display name is `name`, or the
    /// default theme if none matches.
    pub async fn select_by_name(&self, name: &str) -> HookHandle {
        let id = self
            .list()
            .into_iter()
            .find(|entry| entry.name == name)
            .map_or_else(|| DEFAULT_THEME_ID.to_string(), |entry| entry.id);
        self.set_active(&id).await
    }

    /// Id of the selected theme.
    pub fn active_id(&self) -> String {
        self.settings.read().icon_theme.clone()
    }

    /// Display name of the selected theme.
    pub fn active_theme_name(&self) -> String {
        let id = self.active_id();
        self.list()
            .into_iter()
            .find(|entry| entry.id == id)
            .map_or_else(|| DEFAULT_THEME_NAME.to_string(), |entry| entry.name)
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Lifecycle state of the icon theme.
    pub fn state(&self) -> ThemeState {
        self.manager.state()
    }

    /// The hook slot the UI calls per file name.
    pub fn hook(&self) -> HookHandle {
        self.manager.hook()
    }
}
