//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{FigureSize, PlayOptions, DEFAULT_SAMPLE_RATE};

/// Image format for saved figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FigureFormat {
    Svg,
    Png,
}

impl FigureFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FigureFormat::Svg => "svg",
            FigureFormat::Png => "png",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "soundview")]
#[command(about = "Plot 16-bit wave files and write HTML pages with an embedded player")]
pub struct Args {
    /// Wave files or directories to scan for them
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Playback and plotting sample rate in Hz
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub rate: u32,

    /// Plot and player title (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Spectrum panel: 0 = power spectrum, 1 = spectrogram, other = none
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub spectrum: i32,

    /// Draw the waveform panel when greater than 0
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub waveform: i32,

    /// Figure size in inches, WIDTHxHEIGHT
    #[arg(long, default_value = "32x8", value_parser = parse_figsize)]
    pub figsize: FigureSize,

    /// Output directory
    #[arg(short, long, default_value = "soundview-out")]
    pub output: PathBuf,

    /// Figure image format
    #[arg(short, long, value_enum, default_value_t = FigureFormat::Svg)]
    pub format: FigureFormat,

    /// Also write a bare spectrogram image per file
    #[arg(long)]
    pub spectrogram_image: bool,

    /// Treat all inputs as one list: stacked plots and a single player
    #[arg(long)]
    pub combine: bool,

    /// Print load summaries as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Display options for one call, titled `default_name` unless a name was given
    pub fn play_options(&self, default_name: &str) -> PlayOptions {
        PlayOptions {
            rate: self.rate,
            name: self.name.clone().unwrap_or_else(|| default_name.to_string()),
            spectrum: self.spectrum,
            waveform: self.waveform,
            figsize: self.figsize,
        }
    }
}

fn parse_figsize(s: &str) -> Result<FigureSize, String> {
    FigureSize::from_spec(s)
        .ok_or_else(|| format!("Invalid figure size: {} (expected WIDTHxHEIGHT)", s))
}
