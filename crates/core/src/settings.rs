use serde::{Deserialize, Serialize};

/// Lowest width accepted by the host-facing control (full mono collapse)
pub const WIDTH_PERCENT_MIN: f32 = -100.0;

/// Highest width accepted by the host-facing control
pub const WIDTH_PERCENT_MAX: f32 = 100.0;

/// Stereo widener configuration as persisted by the host
///
/// Field names on disk follow the host's configuration keys
/// (`stereo_widener.enable`, `stereo_widener.width`). The width is kept on
/// the host's [-100, 100] percent scale; the plugin converts it to the DSP's
/// [-1, 1] range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidenerSettings {
    #[serde(rename = "enable")]
    pub enabled: bool,
    #[serde(rename = "width")]
    pub width_percent: f32,
}

impl Default for WidenerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            width_percent: 0.0,
        }
    }
}

impl WidenerSettings {
    /// Create settings with the given enable flag and width percentage
    pub fn new(enabled: bool, width_percent: f32) -> Self {
        Self {
            enabled,
            width_percent,
        }
    }

    /// Return a copy with the width clamped to the host range, plus whether
    /// clamping changed anything.
    ///
    /// Hosts are expected to write the clamped copy back to their store when
    /// the flag is set, so the dialog never shows an out-of-range value.
    pub fn clamped(&self) -> (Self, bool) {
        let width_percent = clamp_percent(self.width_percent);
        // NaN != NaN, so a NaN width always reports as changed
        let changed = width_percent != self.width_percent;
        (
            Self {
                width_percent,
                ..*self
            },
            changed,
        )
    }
}

/// Clamp a percent value to [WIDTH_PERCENT_MIN, WIDTH_PERCENT_MAX], mapping NaN to 0
pub fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(WIDTH_PERCENT_MIN, WIDTH_PERCENT_MAX)
}
