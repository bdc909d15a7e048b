use crate::error::SettingsError;
use crate::settings::WidenerSettings;
use crate::traits::SettingsStore;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Name of the TOML table holding the widener keys
pub const SETTINGS_TABLE: &str = "stereo_widener";

/// In-process settings store
///
/// Used when the host keeps persistence elsewhere and only hands over values.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<WidenerSettings>,
}

impl MemoryStore {
    /// Create a store seeded with the given settings
    pub fn new(settings: WidenerSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<WidenerSettings, SettingsError> {
        let settings = self.settings.read().map_err(|_| SettingsError::Poisoned)?;
        Ok(*settings)
    }

    fn save(&self, settings: &WidenerSettings) -> Result<(), SettingsError> {
        let mut current = self.settings.write().map_err(|_| SettingsError::Poisoned)?;
        *current = *settings;
        Ok(())
    }
}

/// Settings stored in a `[stereo_widener]` table of a TOML file
///
/// Other tables in the file belong to the host and are preserved on save.
/// A missing file, table or key falls back to the defaults.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<toml::Table, SettingsError> {
        if !self.path.exists() {
            tracing::debug!("Settings file {} not found, using defaults", self.path.display());
            return Ok(toml::Table::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents.parse::<toml::Table>()?)
    }
}

impl SettingsStore for TomlFileStore {
    fn load(&self) -> Result<WidenerSettings, SettingsError> {
        let document = self.read_document()?;

        match document.get(SETTINGS_TABLE) {
            Some(table) => Ok(table.clone().try_into::<WidenerSettings>()?),
            None => Ok(WidenerSettings::default()),
        }
    }

    fn save(&self, settings: &WidenerSettings) -> Result<(), SettingsError> {
        let mut document = self.read_document()?;
        document.insert(SETTINGS_TABLE.to_string(), toml::Value::try_from(settings)?);

        std::fs::write(&self.path, toml::to_string_pretty(&document)?)?;
        tracing::debug!("Saved widener settings to {}", self.path.display());
        Ok(())
    }
}
