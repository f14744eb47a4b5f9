//! Output formatting for CLI results

use colorful::Colorful;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::loader::Waveform;

/// What was loaded from one file
#[derive(Debug, Clone, Serialize)]
pub struct WaveSummary {
    pub file: String,
    pub channels: u16,
    pub frames: usize,
    pub file_sample_rate: Option<u32>,
    pub bits_per_sample: Option<u16>,
    /// Duration at the playback rate
    pub duration_secs: f64,
    pub peak: f32,
    pub rms: f32,
}

impl WaveSummary {
    pub fn new(path: &Path, wave: &Waveform, rate: u32) -> Self {
        Self {
            file: path.display().to_string(),
            channels: wave.channel_count(),
            frames: wave.frames(),
            file_sample_rate: wave.file_sample_rate,
            bits_per_sample: wave.bits_per_sample,
            duration_secs: wave.duration_secs(rate),
            peak: wave.peak(),
            rms: wave.rms(),
        }
    }

    /// 16-bit integer data is the only format scaled correctly
    pub fn is_sixteen_bit(&self) -> bool {
        self.bits_per_sample.map_or(true, |b| b == 16)
    }
}

/// Paths written for one display call
#[derive(Debug, Clone, Default)]
pub struct WrittenFiles {
    pub figure: Option<PathBuf>,
    pub page: Option<PathBuf>,
    pub spectrogram: Option<PathBuf>,
}

pub fn print_summary(summary: &WaveSummary, verbose: bool) {
    println!("Loaded: {}", summary.file.clone().cyan());
    println!("  Channels: {}", summary.channels);
    println!("  Frames: {}", summary.frames);
    println!("  Duration: {:.2}s", summary.duration_secs);
    if let Some(bits) = summary.bits_per_sample {
        if summary.is_sixteen_bit() {
            println!("  Bit Depth: {} bit", bits);
        } else {
            println!(
                "  Bit Depth: {}",
                format!("{} bit (scaled as 16 bit)", bits).yellow()
            );
        }
    }

    if verbose {
        if let Some(rate) = summary.file_sample_rate {
            println!("  File Sample Rate: {} Hz", rate);
        }
        println!("  Peak: {:.4}", summary.peak);
        println!("  RMS: {:.4}", summary.rms);
    }
}

pub fn print_written(files: &WrittenFiles) {
    for path in [&files.figure, &files.page, &files.spectrogram].into_iter().flatten() {
        println!("  {} {}", "✓".green(), path.display());
    }
}

pub fn format_json(summaries: &[WaveSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_fields() {
        let mut wave = Waveform::interleaved(vec![0.5, -0.5, 0.25, -0.25], 2);
        wave.bits_per_sample = Some(24);
        let summary = WaveSummary::new(Path::new("take.wav"), &wave, 2);
        assert_eq!(summary.frames, 2);
        assert!((summary.duration_secs - 1.0).abs() < 1e-9);
        assert!(!summary.is_sixteen_bit());
    }

    #[test]
    fn test_format_json() {
        let wave = Waveform::mono(vec![0.5]);
        let summary = WaveSummary::new(Path::new("a.wav"), &wave, 44100);
        let json = format_json(&[summary]).unwrap();
        assert!(json.contains("\"file\": \"a.wav\""));
        assert!(json.contains("\"channels\": 1"));
    }
}
