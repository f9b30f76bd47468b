//! Persisted theme selection.
//!
//! Settings are a small JSON document read once at startup and rewritten in
//! full after every theme switch. Writes overwrite the file in place; a crash
//! in the middle of a write can leave it truncated, in which case the next
//! startup falls back to the default settings.

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use fileglyph_style::logging::targets;

use crate::registry::DEFAULT_THEME_ID;
use crate::{Error, Result};

/// File name of the settings document.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Id of the selected icon theme; `"default"` means none.
    pub icon_theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            icon_theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

impl Settings {
    /// Serialize as pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Storage collaborator for the settings document.
pub trait SettingsStorage: Send + Sync {
    /// Whether the settings file exists.
    fn exists(&self) -> BoxFuture<'_, bool>;

    /// Read the settings file as text.
    fn read(&self) -> BoxFuture<'_, Result<String>>;

    /// Create an empty settings file, including its directory.
    fn create(&self) -> BoxFuture<'_, Result<()>>;

    /// Replace the content of the settings file.
    fn write(&self, text: String) -> BoxFuture<'_, Result<()>>;
}

/// Settings stored as `settings.json` in a directory.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    dir: PathBuf,
}

impl SettingsFile {
    /// Settings stored in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Settings stored in the platform data directory, under `data/`.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "fileglyph", "fileglyph").ok_or_else(|| {
            Error::io(
                PathBuf::new(),
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "could not determine application directories",
                ),
            )
        })?;
        Ok(Self::new(dirs.data_dir().join("data")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the settings file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }
}

impl SettingsStorage for SettingsFile {
    fn exists(&self) -> BoxFuture<'_, bool> {
        Box::pin(async move { tokio::fs::try_exists(self.path()).await.unwrap_or(false) })
    }

    fn read(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let path = self.path();
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::io(path, e))
        })
    }

    fn create(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| Error::io(&self.dir, e))?;
            let path = self.path();
            tokio::fs::File::create(&path)
                .await
                .map_err(|e| Error::io(path, e))?;
            Ok(())
        })
    }

    fn write(&self, text: String) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let path = self.path();
            tokio::fs::write(&path, text)
                .await
                .map_err(|e| Error::io(path, e))
        })
    }
}

/// Read settings from `storage`.
///
/// A missing, unreadable or malformed file yields the default settings.
pub async fn load(storage: &dyn SettingsStorage) -> Settings {
    if !storage.exists().await {
        debug!(target: targets::SETTINGS, "no settings file, using defaults");
        return Settings::default();
    }

    let text = match storage.read().await {
        Ok(text) => text,
        Err(e) => {
            warn!(target: targets::SETTINGS, "failed to read settings: {}", e);
            return Settings::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(target: targets::SETTINGS, "ignoring malformed settings: {}", e);
            Settings::default()
        }
    }
}

/// Write `settings` to `storage`, creating the file first if needed.
pub async fn save(storage: &dyn SettingsStorage, settings: &Settings) -> Result<()> {
    if !storage.exists().await {
        storage.create().await?;
    }
    storage.write(settings.to_json()).await?;
    debug!(target: targets::SETTINGS, icon_theme = %settings.icon_theme, "saved settings");
    Ok(())
}
