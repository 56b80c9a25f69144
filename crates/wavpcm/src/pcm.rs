//! PCM sample buffer.

/// A multi-channel buffer of normalized floating-point samples.
///
/// Each channel is an independent sequence of `f64` samples in `[-1.0, 1.0]`.
/// All channel sequences must share the same length. Samples outside the
/// normalized range are clamped during encoding, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8 or 16).
    pub bit_depth: u16,
    /// Per-channel sample sequences.
    pub channels: Vec<Vec<f64>>,
}

impl PcmBuffer {
    /// Creates a buffer from per-channel sample sequences.
    pub fn new(sample_rate: u32, bit_depth: u16, channels: Vec<Vec<f64>>) -> Self {
        Self {
            sample_rate,
            bit_depth,
            channels,
        }
    }

    /// Creates a single-channel buffer.
    pub fn mono(sample_rate: u32, bit_depth: u16, samples: Vec<f64>) -> Self {
        Self::new(sample_rate, bit_depth, vec![samples])
    }

    /// Creates a two-channel buffer.
    pub fn stereo(sample_rate: u32, bit_depth: u16, left: Vec<f64>, right: Vec<f64>) -> Self {
        Self::new(sample_rate, bit_depth, vec![left, right])
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames per channel, 0 for a buffer with no channels.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }
}
