/// Interleaved audio frames borrowed from the host
#[derive(Clone, Copy, Debug)]
pub struct AudioBlock<'a, S> {
    /// Interleaved audio frames (len = n_frames * n_channels)
    pub frames: &'a [S],
    /// Number of channels (2 for stereo)
    pub channels: u16,
}

impl<'a, S> AudioBlock<'a, S> {
    /// Create a new AudioBlock
    pub fn new(frames: &'a [S], channels: u16) -> Self {
        Self { frames, channels }
    }

    /// Get the number of frames in this block
    pub fn num_frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.frames.len() / self.channels as usize
    }

    /// Validate that the sample count is consistent with channels
    pub fn is_valid(&self) -> bool {
        self.channels != 0 && self.frames.len() % self.channels as usize == 0
    }

    /// Whether this block is interleaved stereo
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}

/// Sample representation handed over by the host pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    /// 16-bit signed integer PCM
    S16,
    /// 32-bit float PCM
    F32,
}
