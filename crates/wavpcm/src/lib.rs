//! Codec for the canonical PCM WAV container format.
//!
//! Converts an in-memory multi-channel floating-point signal into a
//! byte-exact RIFF/WAVE stream, and parses RIFF/WAVE bytes back into the
//! same representation: header layout, chunk traversal (unknown chunks
//! between `fmt ` and `data` are skipped by their declared size), per-sample
//! quantization across 8- and 16-bit depths, and channel-major sample
//! interleaving.
//!
//! Both paths are pure transforms over in-memory buffers with no shared
//! state, so independent calls may run concurrently without coordination.
//! Persisting bytes is the caller's concern: [`write_wav`] and [`read_wav`]
//! accept any writer/reader, and [`write_wav_file`] / [`read_wav_file`] wrap
//! `std::fs` for convenience.
//!
//! # Example
//!
//! ```
//! use wavpcm::{decode, encode, PcmBuffer};
//!
//! let buffer = PcmBuffer::mono(8000, 16, vec![0.0, 0.5, -0.5]);
//! let bytes = encode(&buffer)?;
//!
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded.channel_count(), 1);
//! assert_eq!(decoded.frame_count(), 3);
//! # Ok::<(), wavpcm::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`pcm`] - the PCM sample buffer value type
//! - [`format`] - header fields derived from a buffer
//! - [`writer`] - encoding: header assembly and sample quantization
//! - [`reader`] - decoding: chunk traversal and sample dequantization
//! - [`error`] - error kinds shared by both paths

pub mod error;
pub mod format;
pub mod pcm;
pub mod reader;
pub mod writer;

// Re-export public API
pub use error::{WavError, WavResult};
pub use format::WavFormat;
pub use pcm::PcmBuffer;
pub use reader::{decode, read_wav, read_wav_file};
pub use writer::{encode, write_wav, write_wav_file};
