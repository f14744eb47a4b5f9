//! Loading, analysis and display of waveform buffers

pub mod display;
pub mod dsp;
pub mod loader;
pub mod player;
pub mod visualization;

pub use display::{play_sound, Display, Sound};
pub use dsp::{PowerSpectrum, Spectrogram, SpectrogramConfig};
pub use loader::{load_wave, read_wave, Waveform, NORMALIZATION_DIVISOR};
pub use player::AudioWidget;
