use crate::convert::StereoSample;
use crate::dsp::StereoWidener;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tracing::{debug, info, warn};
use widener_core::{clamp_percent, SettingsError, SettingsStore, WidenerSettings};

/// Host-facing stereo widener instance
///
/// One instance per audio stream. The host creates it, feeds configuration
/// changes through [`WidenerPlugin::on_config_changed`] or
/// [`WidenerPlugin::apply_settings`], and calls
/// [`WidenerPlugin::process_block`] from its audio callback. Dropping the
/// instance releases it.
#[derive(Debug)]
pub struct WidenerPlugin {
    widener: StereoWidener,
    enabled: AtomicBool,
    /// Last applied percent as `f32` bits, reported back to the host
    percent: AtomicU32,
}

impl WidenerPlugin {
    /// Create a disabled instance at width 0
    pub fn new() -> Self {
        Self {
            widener: StereoWidener::new(),
            enabled: AtomicBool::new(false),
            percent: AtomicU32::new(0.0_f32.to_bits()),
        }
    }

    /// Create an instance from the host's stored configuration
    pub fn from_store(store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        let plugin = Self::new();
        plugin.on_config_changed(store)?;
        Ok(plugin)
    }

    /// The underlying DSP processor
    pub fn widener(&self) -> &StereoWidener {
        &self.widener
    }

    /// Set the width on the host's [-100, 100] percent scale
    ///
    /// Returns whether the effective width changed.
    pub fn set_width(&self, percent: f32) -> bool {
        let percent = clamp_percent(percent);
        self.percent.store(percent.to_bits(), Ordering::Release);

        let changed = self.widener.set_width(percent / 100.0);
        if changed {
            debug!("Stereo width set to {:.2}", self.widener.width());
        }
        changed
    }

    /// Current width in whole percent, truncated toward zero
    pub fn width(&self) -> i32 {
        f32::from_bits(self.percent.load(Ordering::Acquire)) as i32
    }

    /// Enable or disable processing
    ///
    /// Enabling a disabled instance resets it first. Returns whether the
    /// state changed.
    pub fn set_enabled(&self, enabled: bool) -> bool {
        let was_enabled = self.enabled.swap(enabled, Ordering::AcqRel);
        if was_enabled == enabled {
            return false;
        }

        if enabled {
            self.reset();
            info!("Stereo widener enabled");
        } else {
            info!("Stereo widener disabled");
        }
        true
    }

    /// Check if processing is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Reset processor state (no state to reset)
    pub fn reset(&self) {
        // Stateless processor
    }

    /// Apply a settings snapshot, clamping the width
    ///
    /// Returns whether the enable flag or the width changed.
    pub fn apply_settings(&self, settings: &WidenerSettings) -> bool {
        let (settings, _) = settings.clamped();
        let enabled_changed = self.set_enabled(settings.enabled);
        let width_changed = self.set_width(settings.width_percent);
        enabled_changed || width_changed
    }

    /// Configuration-changed handler: reload from the host store
    ///
    /// An out-of-range width is clamped and written back so the host's
    /// stored value matches what is applied.
    pub fn on_config_changed(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        let (settings, clamped) = store.load()?.clamped();

        if clamped {
            debug!(
                "Stored width out of range, writing back {}",
                settings.width_percent
            );
            if let Err(e) = store.save(&settings) {
                warn!("Failed to write back clamped width: {}", e);
            }
        }

        self.apply_settings(&settings);
        Ok(())
    }

    /// Process `frame_count` interleaved frames in place
    ///
    /// A disabled instance passes audio through. Always returns `frame_count`.
    pub fn process_block<S: StereoSample>(
        &self,
        samples: &mut [S],
        frame_count: usize,
        channel_count: usize,
    ) -> usize {
        if !self.is_enabled() {
            return frame_count;
        }
        self.widener.process_block(samples, frame_count, channel_count)
    }
}

impl Default for WidenerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widener_core::MemoryStore;

    #[test]
    fn test_new_is_disabled_at_zero() {
        let plugin = WidenerPlugin::new();
        assert!(!plugin.is_enabled());
        assert_eq!(plugin.width(), 0);
    }

    #[test]
    fn test_percent_scale() {
        let plugin = WidenerPlugin::new();
        plugin.set_width(50.0);
        assert_eq!(plugin.widener().width(), 0.5);
        assert_eq!(plugin.width(), 50);

        plugin.set_width(-100.0);
        assert_eq!(plugin.width(), -100);
    }

    #[test]
    fn test_percent_clamped() {
        let plugin = WidenerPlugin::new();
        plugin.set_width(150.0);
        assert_eq!(plugin.widener().width(), 1.0);
        assert_eq!(plugin.width(), 100);

        plugin.set_width(-500.0);
        assert_eq!(plugin.widener().width(), -1.0);
        assert_eq!(plugin.width(), -100);
    }

    #[test]
    fn test_whole_percent_reported_exactly() {
        let plugin = WidenerPlugin::new();
        for percent in -100..=100 {
            plugin.set_width(percent as f32);
            assert_eq!(plugin.width(), percent, "width {} reported wrong", percent);
        }
    }

    #[test]
    fn test_nan_percent_reports_zero() {
        let plugin = WidenerPlugin::new();
        plugin.set_width(40.0);
        plugin.set_width(f32::NAN);
        assert_eq!(plugin.width(), 0);
        assert_eq!(plugin.widener().width(), 0.0);
    }

    #[test]
    fn test_width_display_truncates() {
        let plugin = WidenerPlugin::new();
        plugin.set_width(12.75);
        assert_eq!(plugin.width(), 12);

        plugin.set_width(-12.75);
        assert_eq!(plugin.width(), -12);
    }

    #[test]
    fn test_disabled_passes_through() {
        let plugin = WidenerPlugin::new();
        plugin.set_width(100.0);

        let mut buffer = vec![1000i16, 0];
        assert_eq!(plugin.process_block(&mut buffer, 1, 2), 1);
        assert_eq!(buffer, vec![1000, 0]);

        plugin.set_enabled(true);
        assert_eq!(plugin.process_block(&mut buffer, 1, 2), 1);
        assert_eq!(buffer, vec![700, -300]);
    }

    #[test]
    fn test_set_enabled_reports_transitions() {
        let plugin = WidenerPlugin::new();
        assert!(!plugin.set_enabled(false));
        assert!(plugin.set_enabled(true));
        assert!(!plugin.set_enabled(true));
        assert!(plugin.set_enabled(false));
    }

    #[test]
    fn test_apply_settings() {
        let plugin = WidenerPlugin::new();
        assert!(plugin.apply_settings(&WidenerSettings::new(true, 35.0)));
        assert!(plugin.is_enabled());
        assert_eq!(plugin.width(), 35);

        assert!(!plugin.apply_settings(&WidenerSettings::new(true, 35.0)));
    }

    #[test]
    fn test_from_store_writes_back_clamped_width() {
        let store = MemoryStore::new(WidenerSettings::new(true, 250.0));
        let plugin = WidenerPlugin::from_store(&store).unwrap();

        assert!(plugin.is_enabled());
        assert_eq!(plugin.width(), 100);
        assert_eq!(store.load().unwrap().width_percent, 100.0);
    }

    #[test]
    fn test_config_change_in_range_leaves_store() {
        let store = MemoryStore::new(WidenerSettings::new(false, -40.0));
        let plugin = WidenerPlugin::new();
        plugin.on_config_changed(&store).unwrap();

        assert!(!plugin.is_enabled());
        assert_eq!(plugin.width(), -40);
        assert_eq!(store.load().unwrap(), WidenerSettings::new(false, -40.0));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = WidenerPlugin::new();
        let b = WidenerPlugin::new();
        a.set_width(80.0);

        assert_eq!(a.width(), 80);
        assert_eq!(b.width(), 0);
    }
}
