//! Configuration for display calls

mod options;

pub use options::{
    FigureSize, PlayOptions, SpectrumMode, DEFAULT_SAMPLE_RATE, FIGURE_DPI, SPECTRUM_MAX_HZ,
};
