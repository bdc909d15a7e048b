//! Stereo Width - Mid/Side processing for stereo image control
//!
//! Widens or narrows the stereo image by splitting each L/R pair into mid
//! (L+R) and side (L-R) sums, scaling them by the cached [`GainPair`] and
//! recombining. Width 0 is a bypass; -1 collapses to mono, 1 is widest.

use super::gain::{compute_gains, GainPair};
use super::gain_cell::GainCell;
use crate::convert::StereoSample;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Lowest accepted width (mono)
pub const WIDTH_MIN: f32 = -1.0;

/// Highest accepted width
pub const WIDTH_MAX: f32 = 1.0;

/// Stereo widener for interleaved two-channel audio
///
/// `set_width` may be called from a control thread while `process_block`
/// runs on the audio thread; share the instance behind an `Arc`.
#[derive(Debug)]
pub struct StereoWidener {
    /// Current width as `f32` bits, in [-1, 1]
    width: AtomicU32,

    /// Gains derived from `width`, recomputed only when it changes
    gains: GainCell,

    /// Serializes writers; the audio thread never takes it
    update: Mutex<()>,
}

impl StereoWidener {
    /// Create a widener at width 0 (bypass)
    pub fn new() -> Self {
        Self {
            width: AtomicU32::new(0.0_f32.to_bits()),
            gains: GainCell::new(compute_gains(0.0)),
            update: Mutex::new(()),
        }
    }

    /// Current width in [-1, 1]
    #[inline]
    pub fn width(&self) -> f32 {
        f32::from_bits(self.width.load(Ordering::Acquire))
    }

    /// Gains currently applied to the mid and side sums
    #[inline]
    pub fn gains(&self) -> GainPair {
        self.gains.load()
    }

    /// Set the width, clamping to [-1, 1]
    ///
    /// Returns `false` without touching the gains when the clamped value
    /// equals the current width.
    pub fn set_width(&self, raw: f32) -> bool {
        let width = clamp_width(raw);

        let _guard = self.update.lock();
        if width == self.width() {
            return false;
        }

        // Gains first: a reader that sees the new width also sees its gains
        self.gains.store(compute_gains(width));
        self.width.store(width.to_bits(), Ordering::Release);
        true
    }

    /// Whether a block with `channel_count` channels would pass through untouched
    #[inline]
    pub fn is_bypassed(&self, channel_count: usize) -> bool {
        channel_count != 2 || self.width() == 0.0
    }

    /// Process `frame_count` interleaved frames in place
    ///
    /// Non-stereo blocks and width 0 pass through untouched. Always returns
    /// `frame_count`. Never allocates or blocks; if `samples` holds fewer
    /// than `frame_count` stereo frames only the available ones are processed.
    pub fn process_block<S: StereoSample>(
        &self,
        samples: &mut [S],
        frame_count: usize,
        channel_count: usize,
    ) -> usize {
        if self.is_bypassed(channel_count) {
            return frame_count;
        }

        let GainPair {
            mid: mid_gain,
            side: side_gain,
        } = self.gains.load();

        for frame in samples.chunks_exact_mut(2).take(frame_count) {
            let left = frame[0].to_f32();
            let right = frame[1].to_f32();

            // Encode to Mid/Side with the corrective gains folded in
            let mid = mid_gain * (left + right);
            let side = side_gain * (left - right);

            // Decode back to Left/Right
            frame[0] = S::from_f32(mid + side);
            frame[1] = S::from_f32(mid - side);
        }

        frame_count
    }

    /// Process a whole interleaved stereo buffer: [L, R, L, R, ...]
    pub fn process_stereo<S: StereoSample>(&self, buffer: &mut [S]) -> usize {
        let frames = buffer.len() / 2;
        self.process_block(buffer, frames, 2)
    }
}

impl Default for StereoWidener {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a width to [WIDTH_MIN, WIDTH_MAX], mapping NaN to 0
#[inline]
pub fn clamp_width(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(WIDTH_MIN, WIDTH_MAX)
}
