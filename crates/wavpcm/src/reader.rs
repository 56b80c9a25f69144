//! WAV decoding: header parsing, chunk traversal, and sample dequantization.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{WavError, WavResult};
use crate::format::{WavFormat, SIZE_FIELD_SAMPLE_BYTES};
use crate::pcm::PcmBuffer;

/// Decodes a complete WAV byte stream into a PCM buffer.
pub fn decode(bytes: &[u8]) -> WavResult<PcmBuffer> {
    read_wav(&mut Cursor::new(bytes))
}

/// Reads a WAV stream from a reader.
///
/// Decoding is all-or-nothing: any failure returns the error and no partial
/// buffer. Unknown chunks between the fmt and data chunks are skipped by
/// their declared size; bytes after the data payload are ignored.
pub fn read_wav<R: Read + Seek>(reader: &mut R) -> WavResult<PcmBuffer> {
    let format = read_header(reader)?;
    let data_size = find_data_chunk(reader)?;
    read_samples(reader, &format, data_size)
}

/// Reads a WAV file from `path`.
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> WavResult<PcmBuffer> {
    let file = File::open(path)?;
    read_wav(&mut BufReader::new(file))
}

/// Reads the RIFF header and the fmt chunk.
fn read_header<R: Read>(reader: &mut R) -> WavResult<WavFormat> {
    expect_chunk_id(reader, b"RIFF")?;
    let _riff_size = read_u32(reader)?;
    expect_chunk_id(reader, b"WAVE")?;

    expect_chunk_id(reader, b"fmt ")?;
    let _fmt_size = read_u32(reader)?;
    let _format_tag = read_u16(reader)?;
    let channels = read_u16(reader)?;
    let sample_rate = read_u32(reader)?;
    // Byte rate and block align are carried by the header but not needed to
    // decode; they are read and ignored.
    let _byte_rate = read_u32(reader)?;
    let _block_align = read_u16(reader)?;
    let bits_per_sample = read_u16(reader)?;

    Ok(WavFormat {
        channels,
        sample_rate,
        bits_per_sample,
    })
}

/// Scans chunks until the data chunk id, skipping every other chunk by its
/// declared size. Returns the data chunk's size field.
fn find_data_chunk<R: Read + Seek>(reader: &mut R) -> WavResult<u32> {
    loop {
        let mut id = [0u8; 4];
        read_exact(reader, &mut id)?;
        let size = read_u32(reader)?;

        if &id == b"data" {
            return Ok(size);
        }

        reader.seek(SeekFrom::Current(i64::from(size)))?;
    }
}

/// Reads the interleaved sample payload into a fresh buffer.
///
/// The frame count comes from the data chunk size field divided by the fixed
/// [`SIZE_FIELD_SAMPLE_BYTES`] accounting width, mirroring the encode-side
/// size convention; the samples themselves are read in the true storage
/// width for the declared bit depth.
fn read_samples<R: Read + Seek>(
    reader: &mut R,
    format: &WavFormat,
    data_size: u32,
) -> WavResult<PcmBuffer> {
    let bytes_per_sample = match format.bits_per_sample {
        8 | 16 => u64::from(format.bits_per_sample / 8),
        bits => return Err(WavError::UnsupportedBitDepth { bits }),
    };

    if format.channels == 0 {
        return Err(WavError::malformed("channel count is zero"));
    }

    let frames = (data_size / u32::from(format.channels) / SIZE_FIELD_SAMPLE_BYTES) as usize;

    // The declared size is not trusted for allocation: the stream must be
    // able to supply every sample before any are decoded.
    let payload = frames as u64 * u64::from(format.channels) * bytes_per_sample;
    if payload > remaining_bytes(reader)? {
        return Err(WavError::TruncatedFile);
    }

    let mut channels = vec![vec![0.0f64; frames]; usize::from(format.channels)];

    if bytes_per_sample == 1 {
        for frame in 0..frames {
            for channel in channels.iter_mut() {
                // Half range of the 8-bit grid.
                channel[frame] = f64::from(read_i8(reader)?) / 128.0;
            }
        }
    } else {
        for frame in 0..frames {
            for channel in channels.iter_mut() {
                // Half range of the 16-bit grid.
                channel[frame] = f64::from(read_i16(reader)?) / 32768.0;
            }
        }
    }

    Ok(PcmBuffer::new(
        format.sample_rate,
        format.bits_per_sample,
        channels,
    ))
}

fn remaining_bytes<R: Read + Seek>(reader: &mut R) -> WavResult<u64> {
    let pos = reader.stream_position()?;
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(pos))?;
    Ok(end.saturating_sub(pos))
}

fn expect_chunk_id<R: Read>(reader: &mut R, expected: &'static [u8; 4]) -> WavResult<()> {
    let mut id = [0u8; 4];
    read_exact(reader, &mut id)?;
    if &id != expected {
        return Err(WavError::malformed(format!(
            "expected {:?} chunk id, found {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&id)
        )));
    }
    Ok(())
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> WavResult<()> {
    reader.read_exact(buf).map_err(eof_as_truncation)
}

fn read_u16<R: Read>(reader: &mut R) -> WavResult<u16> {
    reader.read_u16::<LittleEndian>().map_err(eof_as_truncation)
}

fn read_u32<R: Read>(reader: &mut R) -> WavResult<u32> {
    reader.read_u32::<LittleEndian>().map_err(eof_as_truncation)
}

fn read_i8<R: Read>(reader: &mut R) -> WavResult<i8> {
    reader.read_i8().map_err(eof_as_truncation)
}

fn read_i16<R: Read>(reader: &mut R) -> WavResult<i16> {
    reader.read_i16::<LittleEndian>().map_err(eof_as_truncation)
}

/// Reads past end-of-stream are truncation, not collaborator I/O failures.
fn eof_as_truncation(err: io::Error) -> WavError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        WavError::TruncatedFile
    } else {
        WavError::Io(err)
    }
}
