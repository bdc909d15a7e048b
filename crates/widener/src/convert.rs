use crate::types::{AudioBlock, SampleFormat};
use dasp_sample::Sample;

/// A sample type the widener can process in place
///
/// Arithmetic runs in `f32` on the raw sample value (no normalization), so
/// integer PCM keeps its native scale through the mid/side matrix.
pub trait StereoSample: Copy + Send + 'static {
    /// Representation this type corresponds to in the host pipeline
    const FORMAT: SampleFormat;

    fn to_f32(self) -> f32;

    fn from_f32(value: f32) -> Self;
}

impl StereoSample for i16 {
    const FORMAT: SampleFormat = SampleFormat::S16;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    /// Truncates toward zero (saturating at the i16 bounds), not rounding
    #[inline]
    fn from_f32(value: f32) -> Self {
        value as i16
    }
}

impl StereoSample for f32 {
    const FORMAT: SampleFormat = SampleFormat::F32;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }
}

/// Convert 16-bit PCM to normalized float PCM
pub fn s16_to_f32(input: &[i16], output: &mut Vec<f32>) {
    output.clear();
    output.extend(input.iter().map(|&s| s.to_sample::<f32>()));
}

/// Convert normalized float PCM to 16-bit PCM
pub fn f32_to_s16(input: &[f32], output: &mut Vec<i16>) {
    output.clear();
    output.extend(input.iter().map(|&s| s.clamp(-1.0, 1.0).to_sample::<i16>()));
}

/// RMS level of the mid (L+R)/2 and side (L-R)/2 components, in dBFS
///
/// Useful for checking how far a block's stereo image was widened.
/// Non-stereo or empty blocks report negative infinity for both.
pub fn mid_side_rms_dbfs(block: AudioBlock<'_, f32>) -> (f64, f64) {
    if !block.is_stereo() || block.num_frames() == 0 {
        return (f64::NEG_INFINITY, f64::NEG_INFINITY);
    }

    let (mut mid_sum, mut side_sum) = (0.0f64, 0.0f64);
    for frame in block.frames.chunks_exact(2) {
        let left = frame[0] as f64;
        let right = frame[1] as f64;
        let mid = (left + right) * 0.5;
        let side = (left - right) * 0.5;
        mid_sum += mid * mid;
        side_sum += side * side;
    }

    let frames = block.num_frames() as f64;
    (to_dbfs((mid_sum / frames).sqrt()), to_dbfs((side_sum / frames).sqrt()))
}

/// Calculate peak level of a float block (in dBFS)
pub fn calculate_peak_dbfs(block: AudioBlock<'_, f32>) -> f64 {
    let peak = block
        .frames
        .iter()
        .map(|&s| s.abs() as f64)
        .fold(0.0, f64::max);

    to_dbfs(peak)
}

fn to_dbfs(level: f64) -> f64 {
    if level > 0.0 {
        20.0 * level.log10()
    } else {
        f64::NEG_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int16_truncation() {
        assert_eq!(i16::from_f32(2.9), 2);
        assert_eq!(i16::from_f32(-2.9), -2);
        assert_eq!(i16::from_f32(-0.6), 0);
        assert_eq!(i16::from_f32(40000.0), i16::MAX);
        assert_eq!(i16::from_f32(-40000.0), i16::MIN);
    }

    #[test]
    fn test_int16_keeps_raw_scale() {
        assert_eq!(1000i16.to_f32(), 1000.0);
        assert_eq!(i16::FORMAT, SampleFormat::S16);
        assert_eq!(f32::FORMAT, SampleFormat::F32);
    }

    #[test]
    fn test_s16_to_f32() {
        let mut output = Vec::new();
        s16_to_f32(&[0, 16384, -32768], &mut output);
        assert_eq!(output, vec![0.0, 0.5, -1.0]);
    }

    #[test]
    fn test_f32_to_s16_clamps() {
        let mut output = Vec::new();
        f32_to_s16(&[0.5, -1.0, 2.0], &mut output);
        assert!((16383..=16384).contains(&output[0]));
        assert!(output[1] <= -32767);
        assert_eq!(output[2], i16::MAX);
    }

    #[test]
    fn test_mid_side_levels() {
        // Pure mid: side is silent
        let frames = vec![0.5f32, 0.5, 0.5, 0.5];
        let (mid, side) = mid_side_rms_dbfs(AudioBlock::new(&frames, 2));
        assert!((mid - (-6.02)).abs() < 0.1);
        assert_eq!(side, f64::NEG_INFINITY);

        // Pure side: mid is silent
        let frames = vec![0.5f32, -0.5];
        let (mid, side) = mid_side_rms_dbfs(AudioBlock::new(&frames, 2));
        assert_eq!(mid, f64::NEG_INFINITY);
        assert!((side - (-6.02)).abs() < 0.1);
    }

    #[test]
    fn test_mid_side_non_stereo() {
        let frames = vec![0.5f32; 3];
        let (mid, side) = mid_side_rms_dbfs(AudioBlock::new(&frames, 1));
        assert_eq!(mid, f64::NEG_INFINITY);
        assert_eq!(side, f64::NEG_INFINITY);
    }

    #[test]
    fn test_peak_dbfs() {
        let frames = vec![0.5f32, -0.25];
        let peak = calculate_peak_dbfs(AudioBlock::new(&frames, 2));
        assert!((peak - (-6.02)).abs() < 0.1);

        let silence = vec![0.0f32; 4];
        assert_eq!(calculate_peak_dbfs(AudioBlock::new(&silence, 2)), f64::NEG_INFINITY);
    }
}
