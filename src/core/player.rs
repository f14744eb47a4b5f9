// src/core/player.rs
//
// Notebook audio widget: a 16-bit WAV embedded in an HTML <audio> element.
// Playback itself is left to the notebook front end.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;
use std::io::Cursor;
use std::path::Path;

use crate::core::loader::Waveform;
use crate::error::Result;

/// Audio player widget for one buffer
#[derive(Debug, Clone)]
pub struct AudioWidget {
    name: String,
    sample_rate: u32,
    channels: u16,
    wav: Vec<u8>,
}

impl AudioWidget {
    /// Encode `wave` for playback at `sample_rate`.
    ///
    /// The buffer is scaled so its peak sits at full scale before 16-bit
    /// quantization; silent buffers are encoded as-is.
    pub fn new(wave: &Waveform, sample_rate: u32, name: &str) -> Result<Self> {
        let channels = wave.channel_count();
        let peak = wave.peak();
        let gain = if peak > 0.0 && peak.is_finite() { 1.0 / peak } else { 1.0 };

        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec)?;
            for &s in &wave.samples {
                let v = if s.is_finite() { s * gain } else { 0.0 };
                writer.write_sample((v.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16)?;
            }
            writer.finalize()?;
        }
        let wav = cursor.into_inner();

        debug!(
            "Encoded {} frame(s) for playback at {} Hz ({} bytes)",
            wave.frames(),
            sample_rate,
            wav.len()
        );

        Ok(Self {
            name: name.to_string(),
            sample_rate,
            channels,
            wav,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Complete WAV file contents
    pub fn wav_bytes(&self) -> &[u8] {
        &self.wav
    }

    pub fn write_wav(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.wav)?;
        Ok(())
    }

    pub fn data_uri(&self) -> String {
        format!("data:audio/wav;base64,{}", STANDARD.encode(&self.wav))
    }

    /// HTML fragment with a player control and the name as a caption
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"soundview-audio\">");
        if !self.name.is_empty() {
            html.push_str(&format!("<div>{}</div>", escape_html(&self.name)));
        }
        html.push_str(&format!(
            "<audio controls preload=\"auto\" title=\"{}\"><source src=\"{}\" type=\"audio/wav\" />\
             Your browser does not support the audio element.</audio></div>",
            escape_html(&self.name),
            self.data_uri()
        ));
        html
    }

    /// Emit the widget through the evcxr Jupyter kernel's display protocol
    pub fn evcxr_display(&self) {
        println!("{}", evcxr_html(&self.to_html()));
    }
}

pub(crate) fn evcxr_html(html: &str) -> String {
    format!("EVCXR_BEGIN_CONTENT text/html\n{}\nEVCXR_END_CONTENT", html)
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
