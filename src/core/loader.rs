// src/core/loader.rs
//
// Wave file loading into normalized floating-point buffers.
// Decoding is delegated to hound; this module only scales and reshapes.

use hound::{SampleFormat, WavReader};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SoundError};

/// Divisor applied to every stored sample, full scale of a 16-bit integer
pub const NORMALIZATION_DIVISOR: f32 = 32768.0;

/// Container for a loaded (or synthesized) sample buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Interleaved samples, nominally in [-1.0, 1.0)
    pub samples: Vec<f32>,
    /// Number of interleaved channels
    pub channels: u16,
    /// Sample rate from the file header, if the buffer came from a file
    pub file_sample_rate: Option<u32>,
    /// Bits per sample from the file header
    pub bits_per_sample: Option<u16>,
}

impl Waveform {
    /// Mono buffer from raw samples
    pub fn mono(samples: Vec<f32>) -> Self {
        Self {
            samples,
            channels: 1,
            file_sample_rate: None,
            bits_per_sample: None,
        }
    }

    /// Buffer from interleaved samples. A channel count of 0 is treated as 1.
    pub fn interleaved(samples: Vec<f32>, channels: u16) -> Self {
        Self {
            samples,
            channels: channels.max(1),
            file_sample_rate: None,
            bits_per_sample: None,
        }
    }

    /// Channel count, with 0 read as mono
    pub fn channel_count(&self) -> u16 {
        self.channels.max(1)
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channel_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / sample_rate as f64
    }

    /// Samples of one channel, or `None` if out of range
    pub fn channel(&self, index: u16) -> Option<Vec<f32>> {
        let channels = self.channel_count();
        if index >= channels {
            return None;
        }
        if channels == 1 {
            return Some(self.samples.clone());
        }
        Some(
            self.samples
                .iter()
                .skip(index as usize)
                .step_by(channels as usize)
                .copied()
                .collect(),
        )
    }

    /// Average of all channels
    pub fn to_mono(&self) -> Vec<f32> {
        let channels = self.channel_count() as usize;
        if channels == 1 {
            return self.samples.clone();
        }

        self.samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }

    pub fn rms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = self.samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
        (sum_sq / self.samples.len() as f64).sqrt() as f32
    }

    /// Stack buffers end to end, in order
    pub fn concatenate(waves: &[Waveform]) -> Result<Waveform> {
        let first = waves.first().ok_or(SoundError::EmptyList)?;
        let channels = first.channel_count();

        let mut samples = Vec::with_capacity(waves.iter().map(|w| w.samples.len()).sum());
        for wave in waves {
            if wave.channel_count() != channels {
                return Err(SoundError::ShapeMismatch {
                    expected: channels,
                    actual: wave.channel_count(),
                });
            }
            samples.extend_from_slice(&wave.samples);
        }

        Ok(Waveform::interleaved(samples, channels))
    }
}

impl From<Vec<f32>> for Waveform {
    fn from(samples: Vec<f32>) -> Self {
        Self::mono(samples)
    }
}

/// Load a wave file and return its samples divided by 32768.
///
/// Assumes 16-bit integer storage. Other depths are divided by the same
/// constant and come out mis-scaled: 8-bit data as unsigned 0..255, 24-bit
/// data shifted into the top of 32 bits, float data as stored. No error is
/// raised for any of them. Reader failures are returned unchanged.
pub fn load_wave<P: AsRef<Path>>(path: P) -> std::result::Result<Waveform, hound::Error> {
    let path = path.as_ref();
    debug!("Loading wave file: {}", path.display());
    let reader = WavReader::open(path)?;
    read_wave_from(reader)
}

/// Integer as the usual array readers hand it back: 8-bit data unsigned,
/// wider-than-16-bit data left-justified in 32 bits.
fn stored_integer(value: i32, bits: u16) -> i64 {
    match bits {
        0..=8 => value as i64 + 128,
        9..=16 => value as i64,
        17..=31 => (value as i64) << (32 - bits),
        _ => value as i64,
    }
}

/// Same as `load_wave`, for any byte source
pub fn read_wave<R: Read>(source: R) -> std::result::Result<Waveform, hound::Error> {
    read_wave_from(WavReader::new(source)?)
}

fn read_wave_from<R: Read>(
    mut reader: WavReader<R>,
) -> std::result::Result<Waveform, hound::Error> {
    let spec = reader.spec();

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        warn!(
            "Wave data is {}-bit {:?}; scaling by {} assumes 16-bit integers",
            spec.bits_per_sample, spec.sample_format, NORMALIZATION_DIVISOR
        );
    }

    let bits = spec.bits_per_sample;
    let samples = match spec.sample_format {
        SampleFormat::Int => reader
            .samples::<i32>()
            .map(|s| s.map(|v| stored_integer(v, bits) as f32 / NORMALIZATION_DIVISOR))
            .collect::<std::result::Result<Vec<f32>, _>>()?,
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v / NORMALIZATION_DIVISOR))
            .collect::<std::result::Result<Vec<f32>, _>>()?,
    };

    debug!(
        "Loaded {} samples, {} channel(s) at {} Hz",
        samples.len(),
        spec.channels,
        spec.sample_rate
    );

    Ok(Waveform {
        samples,
        channels: spec.channels.max(1),
        file_sample_rate: Some(spec.sample_rate),
        bits_per_sample: Some(spec.bits_per_sample),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Cursor;

    fn wav_bytes(samples: &[i16], channels: u16) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_extremes_scale_into_unit_range() {
        let bytes = wav_bytes(&[i16::MIN, 0, i16::MAX], 1);
        let wave = read_wave(Cursor::new(bytes)).unwrap();
        assert_eq!(wave.samples[0], -1.0);
        assert_eq!(wave.samples[1], 0.0);
        assert!((wave.samples[2] - 0.999969).abs() < 1e-6);
        assert_eq!(wave.file_sample_rate, Some(8000));
    }

    #[test]
    fn test_stereo_is_interleaved() {
        let bytes = wav_bytes(&[100, -100, 200, -200], 2);
        let wave = read_wave(Cursor::new(bytes)).unwrap();
        assert_eq!(wave.channels, 2);
        assert_eq!(wave.frames(), 2);
        assert_eq!(wave.channel(1).unwrap(), vec![-100.0 / 32768.0, -200.0 / 32768.0]);
        assert_eq!(wave.to_mono(), vec![0.0, 0.0]);
        assert!(wave.channel(2).is_none());
    }

    #[test]
    fn test_garbage_surfaces_reader_error() {
        let result = read_wave(Cursor::new(b"definitely not RIFF".to_vec()));
        assert!(matches!(result, Err(hound::Error::FormatError(_))));
    }

    #[test]
    fn test_concatenate_keeps_order() {
        let a = Waveform::mono(vec![0.1, 0.2]);
        let b = Waveform::mono(vec![0.3]);
        let joined = Waveform::concatenate(&[a, b]).unwrap();
        assert_eq!(joined.samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_concatenate_rejects_channel_mismatch() {
        let a = Waveform::mono(vec![0.1]);
        let b = Waveform::interleaved(vec![0.1, 0.2], 2);
        assert!(matches!(
            Waveform::concatenate(&[a, b]),
            Err(SoundError::ShapeMismatch { expected: 1, actual: 2 })
        ));
        assert!(matches!(Waveform::concatenate(&[]), Err(SoundError::EmptyList)));
    }

    #[test]
    fn test_stored_integer_layout() {
        assert_eq!(stored_integer(-128, 8), 0);
        assert_eq!(stored_integer(127, 8), 255);
        assert_eq!(stored_integer(-5, 16), -5);
        assert_eq!(stored_integer(1, 24), 256);
        assert_eq!(stored_integer(-8_388_608, 24), i32::MIN as i64);
        assert_eq!(stored_integer(7, 32), 7);
    }

    #[test]
    fn test_zero_channel_count_reads_as_mono() {
        let mut wave = Waveform::mono(vec![0.1, 0.2, 0.3]);
        wave.channels = 0;
        assert_eq!(wave.frames(), 3);
        assert_eq!(wave.to_mono(), vec![0.1, 0.2, 0.3]);
        assert_eq!(wave.channel(0).unwrap(), vec![0.1, 0.2, 0.3]);
        assert!(wave.channel(1).is_none());
    }

    #[test]
    fn test_peak_and_rms() {
        let wave = Waveform::mono(vec![0.5, -0.5, 0.5, -0.5]);
        assert!((wave.peak() - 0.5).abs() < 1e-6);
        assert!((wave.rms() - 0.5).abs() < 1e-6);
        assert!((wave.duration_secs(4) - 1.0).abs() < 1e-9);
    }
}
