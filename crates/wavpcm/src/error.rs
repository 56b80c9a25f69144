//! Error types for WAV encoding and decoding.

use thiserror::Error;

/// Result type for codec operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while encoding or decoding a WAV stream.
#[derive(Debug, Error)]
pub enum WavError {
    /// Bit depth other than 8 or 16, on either path.
    #[error("unsupported bit depth: {bits} (supported: 8, 16)")]
    UnsupportedBitDepth {
        /// The rejected bits-per-sample value.
        bits: u16,
    },

    /// A RIFF, WAVE, or fmt identifier did not match its expected value.
    #[error("malformed header: {message}")]
    MalformedHeader {
        /// What was wrong with the header.
        message: String,
    },

    /// Input ended before the data chunk was found or fully read.
    #[error("truncated file: input ended before the data chunk was complete")]
    TruncatedFile,

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Creates a malformed header error.
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }
}
