use crate::error::SettingsError;
use crate::settings::WidenerSettings;

/// Host configuration backend holding the persisted widener settings
///
/// The widener never owns persistence; it reads through this trait when the
/// host signals a configuration change and writes back only to correct an
/// out-of-range width.
pub trait SettingsStore: Send + Sync {
    /// Read the current settings
    fn load(&self) -> Result<WidenerSettings, SettingsError>;

    /// Persist the given settings
    fn save(&self, settings: &WidenerSettings) -> Result<(), SettingsError>;
}
