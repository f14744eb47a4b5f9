//! soundview - look at and listen to wave files from a notebook
//!
//! Two operations cover the whole crate:
//!
//! - [`load_wave`] reads a 16-bit wave file and divides every sample by
//!   32768, giving values in [-1, 1).
//! - [`play_sound`] draws the buffer (waveform, power spectrum or
//!   spectrogram) and returns it together with an HTML audio player.
//!
//! ## Module Structure
//!
//! - `core` - loader, DSP, figure rendering and the audio widget
//! - `config` - display options
//! - `cli` - command-line front end
//!
//! ## Quick Start
//!
//! In an evcxr notebook:
//!
//! ```rust,ignore
//! use soundview::{load_wave, play_sound, PlayOptions};
//!
//! let wave = load_wave("vowel.wav")?;
//! play_sound(&wave, &PlayOptions::new().name("vowel").spectrum(1))?.evcxr_display()?;
//! ```
//!
//! ## Spectrum modes
//!
//! | `spectrum` | Lower panel                                    |
//! |------------|------------------------------------------------|
//! | 0          | 20 log10 of the FFT magnitude, 0 to 4000 Hz    |
//! | 1          | Spectrogram, 1024-point segments               |
//! | other      | None                                           |

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use config::{FigureSize, PlayOptions, SpectrumMode};
pub use self::core::{load_wave, play_sound, AudioWidget, Display, Sound, Waveform};
pub use error::{Result, SoundError};
