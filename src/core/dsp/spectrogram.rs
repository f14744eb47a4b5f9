// src/core/dsp/spectrogram.rs
//
// Short-time power spectral density, laid out frame by frame.

use rustfft::{num_complex::Complex, FftPlanner};

use super::windows::{hann_window, window_power};

/// Segment length used by the display
pub const SPECGRAM_NFFT: usize = 1024;

/// Overlap between consecutive segments
pub const SPECGRAM_OVERLAP: usize = 128;

/// Floor used in place of log10(0)
const SILENT_DB: f32 = -200.0;

/// Spectrogram configuration; segments are Hann windowed
#[derive(Debug, Clone, Copy)]
pub struct SpectrogramConfig {
    pub fft_size: usize,
    pub overlap: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            fft_size: SPECGRAM_NFFT,
            overlap: SPECGRAM_OVERLAP,
        }
    }
}

impl SpectrogramConfig {
    pub fn hop_size(&self) -> usize {
        self.fft_size.saturating_sub(self.overlap).max(1)
    }
}

/// One-sided PSD in dB, indexed `[frame][bin]`
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// Centre time of each frame in seconds
    pub times: Vec<f32>,
    /// Bin frequencies in Hz, `k * rate / fft_size`
    pub frequencies: Vec<f32>,
    pub power_db: Vec<Vec<f32>>,
}

impl Spectrogram {
    pub fn compute(samples: &[f32], sample_rate: u32, config: &SpectrogramConfig) -> Self {
        let nfft = config.fft_size.max(2);
        let hop = config.hop_size();
        let overlap = nfft - hop.min(nfft);
        let rate = sample_rate.max(1) as f32;

        // Short input is zero padded to one full segment
        let padded;
        let samples = if samples.len() < nfft {
            let mut buf = samples.to_vec();
            buf.resize(nfft, 0.0);
            padded = buf;
            &padded[..]
        } else {
            samples
        };

        let num_frames = (samples.len() - overlap) / hop;
        let num_bins = nfft / 2 + 1;

        let window = hann_window(nfft);
        let scale = 1.0 / (rate * window_power(&window));

        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(nfft);

        let mut power_db = Vec::with_capacity(num_frames);
        let mut times = Vec::with_capacity(num_frames);
        let mut buffer = vec![Complex::new(0.0f32, 0.0); nfft];

        for frame in 0..num_frames {
            let start = frame * hop;
            for (i, slot) in buffer.iter_mut().enumerate() {
                *slot = Complex::new(samples[start + i] * window[i], 0.0);
            }

            fft.process(&mut buffer);

            let row: Vec<f32> = buffer[..num_bins]
                .iter()
                .enumerate()
                .map(|(bin, c)| {
                    let mut psd = c.norm_sqr() * scale;
                    // One-sided: fold negative frequencies except DC and Nyquist
                    if bin != 0 && !(nfft % 2 == 0 && bin == num_bins - 1) {
                        psd *= 2.0;
                    }
                    if psd > 0.0 {
                        10.0 * psd.log10()
                    } else {
                        SILENT_DB
                    }
                })
                .collect();

            power_db.push(row);
            times.push((start as f32 + nfft as f32 / 2.0) / rate);
        }

        let frequencies = (0..num_bins).map(|k| k as f32 * rate / nfft as f32).collect();

        Self {
            times,
            frequencies,
            power_db,
        }
    }

    pub fn num_frames(&self) -> usize {
        self.power_db.len()
    }

    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    /// Level at `(frame, bin)`, clamped into range
    pub fn level(&self, frame: usize, bin: usize) -> f32 {
        if self.power_db.is_empty() {
            return SILENT_DB;
        }
        let row = &self.power_db[frame.min(self.power_db.len() - 1)];
        row.get(bin.min(row.len().saturating_sub(1)))
            .copied()
            .unwrap_or(SILENT_DB)
    }

    /// Colour range: the loudest cell and at most `dynamic_range_db` below it
    pub fn db_range(&self, dynamic_range_db: f32) -> (f32, f32) {
        let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
        for &v in self.power_db.iter().flatten() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !hi.is_finite() {
            return (SILENT_DB, 0.0);
        }
        let lo = lo.max(hi - dynamic_range_db);
        if hi - lo < f32::EPSILON {
            (hi - 1.0, hi)
        } else {
            (lo, hi)
        }
    }
}
