// Shared helpers for integration tests: synthetic wave files on disk.
#![allow(dead_code)]

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;

pub fn write_i16_wav(path: &Path, samples: &[i16], channels: u16, sample_rate: u32) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create test wave");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize test wave");
}

pub fn write_i24_wav(path: &Path, samples: &[i32], sample_rate: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 24,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create test wave");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize test wave");
}

pub fn write_u8_wav(path: &Path, samples: &[i8], sample_rate: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("Failed to create test wave");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize test wave");
}

/// Sine at `freq` Hz, amplitude `amp` of 16-bit full scale
pub fn sine_i16(freq: f64, amp: f64, sample_rate: u32, frames: usize) -> Vec<i16> {
    (0..frames)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((2.0 * PI * freq * t).sin() * amp * i16::MAX as f64).round() as i16
        })
        .collect()
}
