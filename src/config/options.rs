// src/config/options.rs
//
// Display options for `play_sound`, defaulting to the values a notebook
// call uses when no argument is given.

use serde::{Deserialize, Serialize};

/// Sample rate assumed when none is given
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Figures are rasterized at a fixed 100 dots per inch
pub const FIGURE_DPI: u32 = 100;

/// Upper frequency shown by the power spectrum panel
pub const SPECTRUM_MAX_HZ: f32 = 4000.0;

/// Figure size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 8.0,
        }
    }
}

impl FigureSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size in pixels at `FIGURE_DPI`
    pub fn pixels(&self) -> (u32, u32) {
        let w = (self.width * FIGURE_DPI as f32).round().max(1.0) as u32;
        let h = (self.height * FIGURE_DPI as f32).round().max(1.0) as u32;
        (w, h)
    }

    /// Parse `WxH` (e.g. `32x8` or `12.5x4`)
    pub fn from_spec(spec: &str) -> Option<Self> {
        let (w, h) = spec.split_once(['x', 'X', ','])?;
        let width: f32 = w.trim().parse().ok()?;
        let height: f32 = h.trim().parse().ok()?;
        if width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }
}

/// What the lower panel of a single-buffer figure shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumMode {
    /// Log-magnitude FFT of the whole buffer, flag value 0
    Power,
    /// Short-time spectrogram, flag value 1
    Spectrogram,
    /// Any other flag value
    Off,
}

impl SpectrumMode {
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            0 => Self::Power,
            1 => Self::Spectrogram,
            _ => Self::Off,
        }
    }
}

/// Options for `play_sound`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayOptions {
    /// Playback and plotting sample rate in Hz
    pub rate: u32,
    /// Title for the plots and the player
    pub name: String,
    /// 0 = power spectrum, 1 = spectrogram, other = none
    pub spectrum: i32,
    /// Time-domain panel is drawn when > 0
    pub waveform: i32,
    pub figsize: FigureSize,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SAMPLE_RATE,
            name: String::new(),
            spectrum: 0,
            waveform: 1,
            figsize: FigureSize::default(),
        }
    }
}

impl PlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn spectrum(mut self, spectrum: i32) -> Self {
        self.spectrum = spectrum;
        self
    }

    pub fn waveform(mut self, waveform: i32) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn figsize(mut self, width: f32, height: f32) -> Self {
        self.figsize = FigureSize::new(width, height);
        self
    }

    pub fn spectrum_mode(&self) -> SpectrumMode {
        SpectrumMode::from_flag(self.spectrum)
    }

    pub fn shows_waveform(&self) -> bool {
        self.waveform > 0
    }

    /// Gate for drawing any plot content.
    ///
    /// Note that a spectrum flag of 2 or more passes the gate even though it
    /// selects no spectrum panel.
    pub fn plots_enabled(&self) -> bool {
        self.waveform > 0 || self.spectrum >= 0
    }
}
