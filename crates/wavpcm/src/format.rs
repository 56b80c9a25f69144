//! WAVE header fields derived from a PCM buffer.
//!
//! The header carries no independent state: every numeric field is
//! reconstructible from the buffer's sample rate, bit depth, channel count,
//! and frame count.

use crate::error::{WavError, WavResult};
use crate::pcm::PcmBuffer;

/// Format tag for integer PCM in the fmt chunk.
pub(crate) const PCM_FORMAT_TAG: u16 = 1;

/// Payload length of the fmt chunk.
pub(crate) const FMT_CHUNK_LEN: u32 = 16;

/// RIFF chunk size excluding sample data: "WAVE" plus the fmt chunk plus the
/// data chunk header.
pub(crate) const RIFF_SIZE_BASE: u32 = 36;

/// Sample width used by the chunk size fields on both paths, independent of
/// the declared bit depth.
pub(crate) const SIZE_FIELD_SAMPLE_BYTES: u32 = 2;

/// Header-level WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8 or 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Derives the header fields for a buffer.
    ///
    /// Fails with [`WavError::UnsupportedBitDepth`] unless the bit depth is
    /// 8 or 16.
    pub(crate) fn from_buffer(buffer: &PcmBuffer) -> WavResult<Self> {
        if !matches!(buffer.bit_depth, 8 | 16) {
            return Err(WavError::UnsupportedBitDepth {
                bits: buffer.bit_depth,
            });
        }

        Ok(Self {
            channels: buffer.channel_count() as u16,
            sample_rate: buffer.sample_rate,
            bits_per_sample: buffer.bit_depth,
        })
    }

    /// Storage bytes for one sample of one channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align as written to the fmt chunk. Describes a single channel's
    /// sample, not a whole frame.
    pub(crate) fn block_align(&self) -> u16 {
        self.bytes_per_sample()
    }

    /// Byte rate as written to the fmt chunk. Likewise per channel.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.bytes_per_sample())
    }

    /// Value of the data chunk size field. Counts every sample at the fixed
    /// [`SIZE_FIELD_SAMPLE_BYTES`] width, so at depth 8 the field declares
    /// twice the payload actually written.
    pub(crate) fn data_size(&self, frames: usize) -> u32 {
        frames as u32 * u32::from(self.channels) * SIZE_FIELD_SAMPLE_BYTES
    }

    /// Value of the RIFF chunk size field.
    pub(crate) fn riff_size(&self, frames: usize) -> u32 {
        RIFF_SIZE_BASE + self.data_size(frames)
    }
}
