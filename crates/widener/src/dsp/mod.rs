/// DSP (Digital Signal Processing) modules
///
/// Contains the real-time stereo widening components:
/// - Gain: width to mid/side gain mapping with anti-clip normalization
/// - Gain cell: lock-free storage handing gain pairs to the audio thread
/// - Stereo Width: Mid/Side block processing for interleaved stereo
pub mod gain;
pub mod gain_cell;
pub mod stereo_width;

pub use gain::{compute_gains, GainPair, MID_WEIGHT, SIDE_WEIGHT};
pub use gain_cell::GainCell;
pub use stereo_width::{clamp_width, StereoWidener, WIDTH_MAX, WIDTH_MIN};
