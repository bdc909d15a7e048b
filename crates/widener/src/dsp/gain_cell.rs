use super::gain::GainPair;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free storage for a [`GainPair`]
///
/// Both gains share one 64-bit word (mid in the high half, side in the low
/// half), so the audio thread never observes a mid gain from one setting
/// paired with a side gain from another.
#[derive(Debug)]
pub struct GainCell {
    bits: AtomicU64,
}

impl GainCell {
    pub fn new(gains: GainPair) -> Self {
        Self {
            bits: AtomicU64::new(pack(gains)),
        }
    }

    #[inline]
    pub fn load(&self) -> GainPair {
        unpack(self.bits.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, gains: GainPair) {
        self.bits.store(pack(gains), Ordering::Release);
    }
}

impl Default for GainCell {
    fn default() -> Self {
        Self::new(GainPair::default())
    }
}

#[inline]
fn pack(gains: GainPair) -> u64 {
    ((gains.mid.to_bits() as u64) << 32) | gains.side.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> GainPair {
    GainPair {
        mid: f32::from_bits((bits >> 32) as u32),
        side: f32::from_bits(bits as u32),
    }
}
