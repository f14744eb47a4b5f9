//! Window function implementations

use std::f32::consts::PI;

/// Symmetric Hann window (N-1 denominator), zero at both ends
pub fn hann_window(size: usize) -> Vec<f32> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![1.0];
    }

    let n = size as f32;
    (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f32 / (n - 1.0)).cos())
        .collect()
}

/// Sum of squared coefficients, used for power spectral density scaling
pub fn window_power(window: &[f32]) -> f32 {
    window.iter().map(|w| w * w).sum()
}
