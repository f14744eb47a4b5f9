// src/core/display.rs
//
// `play_sound`: figure assembly plus the audio widget. Every call is
// independent; nothing is cached between calls.

use log::debug;
use std::path::Path;

use crate::config::{PlayOptions, SpectrumMode, SPECTRUM_MAX_HZ};
use crate::core::dsp::{PowerSpectrum, Spectrogram, SpectrogramConfig};
use crate::core::loader::Waveform;
use crate::core::player::{escape_html, evcxr_html, AudioWidget};
use crate::core::visualization::{
    render_svg, save_figure, Figure, Panel, PanelContent, WaveformTrace,
};
use crate::error::Result;

/// One buffer, or several to compare side by side
#[derive(Debug, Clone, Copy)]
pub enum Sound<'a> {
    One(&'a Waveform),
    Many(&'a [Waveform]),
}

impl<'a> From<&'a Waveform> for Sound<'a> {
    fn from(wave: &'a Waveform) -> Self {
        Sound::One(wave)
    }
}

impl<'a> From<&'a [Waveform]> for Sound<'a> {
    fn from(waves: &'a [Waveform]) -> Self {
        Sound::Many(waves)
    }
}

impl<'a> From<&'a Vec<Waveform>> for Sound<'a> {
    fn from(waves: &'a Vec<Waveform>) -> Self {
        Sound::Many(waves.as_slice())
    }
}

/// Result of `play_sound`: the figure and the player, ready to show
#[derive(Debug, Clone)]
pub struct Display {
    figure: Figure,
    audio: AudioWidget,
}

impl Display {
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn audio(&self) -> &AudioWidget {
        &self.audio
    }

    /// Inline SVG (when anything was plotted) followed by the player
    pub fn to_html_fragment(&self) -> Result<String> {
        let mut html = String::new();
        if !self.figure.is_empty() {
            html.push_str(&render_svg(&self.figure)?);
        }
        html.push_str(&self.audio.to_html());
        Ok(html)
    }

    /// Standalone HTML page
    pub fn to_html(&self) -> Result<String> {
        let title = if self.audio.name().is_empty() {
            "soundview".to_string()
        } else {
            escape_html(self.audio.name())
        };
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n\
             <head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body>\n{}\n</body>\n</html>\n",
            title,
            self.to_html_fragment()?
        ))
    }

    /// Show in an evcxr notebook cell
    pub fn evcxr_display(&self) -> Result<()> {
        println!("{}", evcxr_html(&self.to_html_fragment()?));
        Ok(())
    }

    pub fn save_figure(&self, path: &Path) -> Result<()> {
        save_figure(&self.figure, path)
    }
}

/// Plot `sound` and wrap it in an audio player.
///
/// A list of buffers gets one stacked waveform row each and a single player
/// over their concatenation. A single buffer gets an optional waveform row
/// and an optional spectrum row chosen by `options.spectrum`. A figure is
/// always returned, possibly with no panels.
pub fn play_sound<'a>(sound: impl Into<Sound<'a>>, options: &PlayOptions) -> Result<Display> {
    let sound = sound.into();
    let rate = options.rate;

    match sound {
        Sound::Many(waves) => {
            let joined = Waveform::concatenate(waves)?;
            let mut figure = Figure::new(options.figsize, waves.len());

            if options.plots_enabled() {
                for (row, wave) in waves.iter().enumerate() {
                    let mut panel = Panel::new(row, waveform_content(wave, rate));
                    panel.title = Some(options.name.clone());
                    figure.add_panel(panel);
                }
            }
            debug!("Stacked {} waveform(s), {} frame(s) total", waves.len(), joined.frames());

            let audio = AudioWidget::new(&joined, rate, &options.name)?;
            Ok(Display { figure, audio })
        }
        Sound::One(wave) => {
            let mut figure = Figure::new(options.figsize, 2);

            if options.plots_enabled() {
                if options.shows_waveform() {
                    figure.add_panel(
                        Panel::new(0, waveform_content(wave, rate)).labels("Time (s)", "sample"),
                    );
                }

                match options.spectrum_mode() {
                    SpectrumMode::Spectrogram => {
                        let spectrogram = Spectrogram::compute(
                            &wave.to_mono(),
                            rate,
                            &SpectrogramConfig::default(),
                        );
                        figure.add_panel(
                            Panel::new(
                                1,
                                PanelContent::Spectrogram {
                                    spectrogram,
                                    sample_rate: rate,
                                },
                            )
                            .labels("Time", "Frequency"),
                        );
                    }
                    SpectrumMode::Power => {
                        let spectrum = PowerSpectrum::compute(&wave.to_mono(), rate)?;
                        figure.add_panel(
                            Panel::new(
                                1,
                                PanelContent::PowerSpectrum {
                                    spectrum,
                                    max_hz: SPECTRUM_MAX_HZ,
                                },
                            )
                            .labels("Frequency", "power(dB)"),
                        );
                    }
                    SpectrumMode::Off => {}
                }

                figure.set_title(&options.name);
            }
            debug!(
                "Figure with {:?} for {} frame(s) at {} Hz",
                figure.panel_kinds(),
                wave.frames(),
                rate
            );

            let audio = AudioWidget::new(wave, rate, &options.name)?;
            Ok(Display { figure, audio })
        }
    }
}

fn waveform_content(wave: &Waveform, rate: u32) -> PanelContent {
    PanelContent::Waveform(WaveformTrace {
        wave: wave.clone(),
        sample_rate: rate,
    })
}
