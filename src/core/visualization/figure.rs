// src/core/visualization/figure.rs
//
// Backend-independent description of a figure: a grid of stacked panels.

use crate::config::FigureSize;
use crate::core::dsp::{PowerSpectrum, Spectrogram};
use crate::core::loader::Waveform;

/// Time-domain trace, one line per channel
#[derive(Debug, Clone)]
pub struct WaveformTrace {
    pub wave: Waveform,
    /// Rate used for the time axis
    pub sample_rate: u32,
}

impl WaveformTrace {
    pub fn duration_secs(&self) -> f32 {
        self.wave.duration_secs(self.sample_rate) as f32
    }

    /// Sample value extent, with a fallback for silent buffers
    pub fn value_range(&self) -> (f32, f32) {
        let (lo, hi) = self
            .wave
            .samples
            .iter()
            .filter(|s| s.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        if !lo.is_finite() || hi - lo < f32::EPSILON {
            let centre = if lo.is_finite() { lo } else { 0.0 };
            return (centre - 1.0, centre + 1.0);
        }
        (lo, hi)
    }
}

#[derive(Debug, Clone)]
pub enum PanelContent {
    Waveform(WaveformTrace),
    PowerSpectrum {
        spectrum: PowerSpectrum,
        /// Right edge of the frequency axis
        max_hz: f32,
    },
    Spectrogram {
        spectrogram: Spectrogram,
        sample_rate: u32,
    },
    /// Axes with nothing plotted, only a title
    Empty,
}

impl PanelContent {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelContent::Waveform(_) => PanelKind::Waveform,
            PanelContent::PowerSpectrum { .. } => PanelKind::PowerSpectrum,
            PanelContent::Spectrogram { .. } => PanelKind::Spectrogram,
            PanelContent::Empty => PanelKind::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Waveform,
    PowerSpectrum,
    Spectrogram,
    Empty,
}

#[derive(Debug, Clone)]
pub struct Panel {
    /// Row in the figure grid, 0 at the top
    pub slot: usize,
    pub title: Option<String>,
    pub x_label: Option<&'static str>,
    pub y_label: Option<&'static str>,
    pub content: PanelContent,
}

impl Panel {
    pub fn new(slot: usize, content: PanelContent) -> Self {
        Self {
            slot,
            title: None,
            x_label: None,
            y_label: None,
            content,
        }
    }

    pub fn labels(mut self, x: &'static str, y: &'static str) -> Self {
        self.x_label = Some(x);
        self.y_label = Some(y);
        self
    }

    pub fn kind(&self) -> PanelKind {
        self.content.kind()
    }
}

/// A figure with `rows` stacked slots, some of which hold panels
#[derive(Debug, Clone)]
pub struct Figure {
    size: FigureSize,
    rows: usize,
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new(size: FigureSize, rows: usize) -> Self {
        Self {
            size,
            rows: rows.max(1),
            panels: Vec::new(),
        }
    }

    pub fn size(&self) -> FigureSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// True when nothing was drawn into the figure
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel_kinds(&self) -> Vec<PanelKind> {
        self.panels.iter().map(Panel::kind).collect()
    }

    pub fn add_panel(&mut self, panel: Panel) {
        if panel.slot >= self.rows {
            self.rows = panel.slot + 1;
        }
        self.panels.push(panel);
    }

    /// Title the most recently added panel; adds a full-size empty one if
    /// there is none yet.
    pub fn set_title(&mut self, title: &str) {
        match self.panels.last_mut() {
            Some(panel) => panel.title = Some(title.to_string()),
            None => {
                self.rows = 1;
                let mut panel = Panel::new(0, PanelContent::Empty);
                panel.title = Some(title.to_string());
                self.panels.push(panel);
            }
        }
    }
}
