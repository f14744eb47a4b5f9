//! Digital Signal Processing utilities for the spectrum panels

mod fft;
mod spectrogram;
mod windows;

pub use fft::{linspace, PowerSpectrum};
pub use spectrogram::{Spectrogram, SpectrogramConfig, SPECGRAM_NFFT, SPECGRAM_OVERLAP};
pub use windows::{hann_window, window_power};
