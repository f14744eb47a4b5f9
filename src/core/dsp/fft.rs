//! One-shot power spectrum of a whole buffer

use realfft::RealFftPlanner;

use crate::error::{Result, SoundError};

/// Floor used in place of log10(0)
const SILENT_DB: f32 = -200.0;

/// Log-magnitude spectrum over the non-negative frequencies
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    /// Bin frequencies in Hz, evenly spaced from 0 to rate / 2
    pub frequencies: Vec<f32>,
    /// 20 * log10 |X(k)|
    pub power_db: Vec<f32>,
}

impl PowerSpectrum {
    /// Compute the unwindowed real FFT of `samples` in one transform
    pub fn compute(samples: &[f32], sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Ok(Self {
                frequencies: Vec::new(),
                power_db: Vec::new(),
            });
        }

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(samples.len());

        let mut input = samples.to_vec();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut input, &mut spectrum).map_err(SoundError::fft)?;

        let power_db: Vec<f32> = spectrum
            .iter()
            .map(|c| {
                let magnitude = c.norm();
                if magnitude > 0.0 {
                    20.0 * magnitude.log10()
                } else {
                    SILENT_DB
                }
            })
            .collect();

        let frequencies = linspace(0.0, sample_rate as f32 / 2.0, power_db.len());

        Ok(Self {
            frequencies,
            power_db,
        })
    }

    pub fn len(&self) -> usize {
        self.power_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_db.is_empty()
    }

    /// Spacing between adjacent bins in Hz
    pub fn bin_width(&self) -> f32 {
        match self.frequencies.len() {
            0 | 1 => 0.0,
            n => self.frequencies[n - 1] / (n - 1) as f32,
        }
    }

    /// Frequency of the strongest bin at or below `max_hz`
    pub fn peak_frequency(&self, max_hz: f32) -> Option<f32> {
        self.frequencies
            .iter()
            .zip(self.power_db.iter())
            .filter(|(f, p)| **f <= max_hz && p.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&f, _)| f)
    }

    /// Largest finite level in the spectrum
    pub fn max_db(&self) -> Option<f32> {
        self.power_db
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .max_by(f32::total_cmp)
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|i| start + step * i as f32).collect()
        }
    }
}
