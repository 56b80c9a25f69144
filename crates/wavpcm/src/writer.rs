//! WAV encoding: header assembly and sample quantization.

use byteorder::{LittleEndian, WriteBytesExt};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::WavResult;
use crate::format::{WavFormat, FMT_CHUNK_LEN, PCM_FORMAT_TAG};
use crate::pcm::PcmBuffer;

/// Encodes a buffer into a complete WAV byte stream.
///
/// Fails with [`WavError::UnsupportedBitDepth`](crate::WavError) if the
/// buffer's bit depth is not 8 or 16; no bytes are produced on failure.
pub fn encode(buffer: &PcmBuffer) -> WavResult<Vec<u8>> {
    let bytes_per_sample = usize::from(buffer.bit_depth / 8);
    let mut out =
        Vec::with_capacity(44 + buffer.frame_count() * buffer.channel_count() * bytes_per_sample);
    write_wav(&mut out, buffer)?;
    Ok(out)
}

/// Writes a complete WAV stream to a writer.
///
/// The bit depth is validated before anything is written, so a failed call
/// leaves the writer untouched unless the writer itself errored.
///
/// # Panics
///
/// Panics if the buffer's channel sequences have unequal lengths.
pub fn write_wav<W: Write>(writer: &mut W, buffer: &PcmBuffer) -> WavResult<()> {
    let format = WavFormat::from_buffer(buffer)?;

    write_header(writer, &format, buffer.frame_count())?;

    match format.bits_per_sample {
        8 => write_samples_8(writer, buffer)?,
        // from_buffer admits only 8 and 16
        _ => write_samples_16(writer, buffer)?,
    }

    Ok(())
}

/// Encodes a buffer and writes it to a file at `path`.
pub fn write_wav_file<P: AsRef<Path>>(path: P, buffer: &PcmBuffer) -> WavResult<()> {
    let bytes = encode(buffer)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, format: &WavFormat, frames: usize) -> WavResult<()> {
    // RIFF chunk header
    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(format.riff_size(frames))?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(FMT_CHUNK_LEN)?;
    writer.write_u16::<LittleEndian>(PCM_FORMAT_TAG)?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate())?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // data chunk header
    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(format.data_size(frames))?;

    Ok(())
}

fn write_samples_8<W: Write>(writer: &mut W, buffer: &PcmBuffer) -> WavResult<()> {
    for frame in 0..buffer.frame_count() {
        for channel in &buffer.channels {
            writer.write_i8(quantize(channel[frame], 8) as i8)?;
        }
    }
    Ok(())
}

fn write_samples_16<W: Write>(writer: &mut W, buffer: &PcmBuffer) -> WavResult<()> {
    for frame in 0..buffer.frame_count() {
        for channel in &buffer.channels {
            writer.write_i16::<LittleEndian>(quantize(channel[frame], 16) as i16)?;
        }
    }
    Ok(())
}

/// Maps a normalized sample onto the signed grid of the given storage width:
/// shift into `[0, 2^bits]`, round, clamp to the top level, then re-center
/// around zero. Out-of-range input saturates instead of wrapping.
fn quantize(sample: f64, storage_bits: u32) -> i32 {
    let levels = f64::from(1u32 << storage_bits);
    let scaled = ((sample + 1.0) / 2.0 * levels).round();
    let level = scaled.clamp(0.0, levels - 1.0);
    level as i32 - (1 << (storage_bits - 1))
}
