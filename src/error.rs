// src/error.rs
//
// Error type for display and rendering. Loader failures are returned as the
// reader's own `hound::Error` and only get wrapped here when they travel
// through `play_sound` or the CLI.

use thiserror::Error;

/// Result alias for operations that render or encode
pub type Result<T> = std::result::Result<T, SoundError>;

#[derive(Error, Debug)]
pub enum SoundError {
    #[error(transparent)]
    Wav(#[from] hound::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Transform planning or execution failure
    #[error("FFT failed: {0}")]
    Fft(String),

    /// Drawing failure reported by the plotting backend
    #[error("Plot rendering failed: {0}")]
    Plot(String),

    /// Buffers with different channel counts cannot be stacked end to end
    #[error("Cannot concatenate waveforms: expected {expected} channel(s), got {actual}")]
    ShapeMismatch { expected: u16, actual: u16 },

    #[error("No waveforms given")]
    EmptyList,

    #[error("Unsupported figure format: {0}")]
    UnsupportedFormat(String),
}

impl SoundError {
    pub(crate) fn fft<E: std::fmt::Display>(err: E) -> Self {
        Self::Fft(err.to_string())
    }

    pub(crate) fn plot<E: std::fmt::Display>(err: E) -> Self {
        Self::Plot(err.to_string())
    }
}
