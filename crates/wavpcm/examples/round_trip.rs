//! Generates a faded 100 Hz tone, writes it to a WAV file, reads the file
//! back, and prints the decoded shape.

use std::f64::consts::PI;

use wavpcm::{read_wav_file, write_wav_file, PcmBuffer, WavError};

fn main() -> Result<(), WavError> {
    let sample_rate = 48000u32;
    let frames = sample_rate as usize * 3;
    let fade = 0.1;

    let samples: Vec<f64> = (0..frames)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            let remaining = (frames - i) as f64 / sample_rate as f64;
            let level = (t / fade).min(1.0) * (remaining / fade).min(1.0);
            (t * 100.0 * 2.0 * PI).sin() * level
        })
        .collect();

    let buffer = PcmBuffer::mono(sample_rate, 16, samples);
    write_wav_file("tone.wav", &buffer)?;

    let decoded = read_wav_file("tone.wav")?;
    println!("channels: {}", decoded.channel_count());
    println!("frames:   {}", decoded.frame_count());
    println!("duration: {:.2}s", decoded.duration_seconds());

    Ok(())
}
