// src/core/visualization/raster.rs
//
// Spectrogram export as a plain image, without axes or labels.

use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use super::colormap::Colormap;
use crate::core::dsp::Spectrogram;
use crate::error::Result;

/// Raster image configuration
#[derive(Debug, Clone, Copy)]
pub struct RasterConfig {
    pub width: u32,
    pub height: u32,
    /// Levels this far below the loudest cell map to the bottom colour
    pub dynamic_range_db: f32,
    pub colormap: Colormap,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            dynamic_range_db: 100.0,
            colormap: Colormap::Viridis,
        }
    }
}

/// Nearest-neighbour resample of the spectrogram into an image,
/// low frequencies at the bottom
pub fn spectrogram_image(spectrogram: &Spectrogram, config: &RasterConfig) -> RgbImage {
    let width = config.width.max(1);
    let height = config.height.max(1);
    let mut img: RgbImage = ImageBuffer::new(width, height);

    let frames = spectrogram.num_frames();
    let bins = spectrogram.num_bins();
    if frames == 0 || bins == 0 {
        return img;
    }

    let (min_db, max_db) = spectrogram.db_range(config.dynamic_range_db);
    let x_scale = frames as f32 / width as f32;
    let y_scale = bins as f32 / height as f32;

    for y in 0..height {
        let bin = ((height - 1 - y) as f32 * y_scale) as usize;
        for x in 0..width {
            let frame = (x as f32 * x_scale) as usize;
            let db = spectrogram.level(frame, bin);
            img.put_pixel(x, y, Rgb(config.colormap.db_rgb(db, min_db, max_db)));
        }
    }

    img
}

/// Save the spectrogram image; format follows the extension
pub fn save_spectrogram_image(
    spectrogram: &Spectrogram,
    config: &RasterConfig,
    output_path: &Path,
) -> Result<()> {
    spectrogram_image(spectrogram, config).save(output_path)?;
    Ok(())
}
