//! Mid/side gain calculation with anti-clip normalization
//!
//! Maps a width in [-1, 1] to the pair of gains applied to the mid (L+R) and
//! side (L-R) sums. The larger of the two gains is always exactly 0.5, which
//! keeps `mid ± side` inside the input's dynamic range.

// Centre-panned content lives in the mid channel. Without de-weighting it,
// widening makes centre instruments sound quiet and distant.
/// Weight of the width control on the mid channel
pub const MID_WEIGHT: f64 = 0.2;

/// Weight of the width control on the side channel
pub const SIDE_WEIGHT: f64 = 1.0;

/// Gains applied to the mid and side sums
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GainPair {
    pub mid: f32,
    pub side: f32,
}

impl GainPair {
    /// Gains for width 0: 0.5 / 0.5 reconstructs the input exactly
    pub const UNITY: GainPair = GainPair { mid: 0.5, side: 0.5 };
}

impl Default for GainPair {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Compute the gain pair for a width already clamped to [-1, 1]
///
/// Total over its domain; the caller is responsible for clamping.
pub fn compute_gains(width: f32) -> GainPair {
    let width = width as f64;
    let raw_mid = (1.0 - ((width * MID_WEIGHT + 1.0) / 2.0)) as f32;
    let raw_side = ((width * SIDE_WEIGHT + 1.0) / 2.0) as f32;

    // Corrective gain: scale the louder component down to 0.5, never amplify
    let gain = if raw_mid > raw_side {
        0.5 / raw_mid
    } else {
        0.5 / raw_side
    };
    let gain = gain.min(1.0);

    GainPair {
        mid: gain * raw_mid,
        side: gain * raw_side,
    }
}
