// src/core/visualization/colormap.rs
//
// Level-to-colour mapping shared by the plotted and rasterized spectrograms.

/// Color map for spectrogram
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Viridis,
    Magma,
    Grayscale,
}

impl Colormap {
    /// Map a value in [0, 1] to RGB. Out of range input is clamped.
    pub fn rgb(&self, value: f32) -> [u8; 3] {
        let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        match self {
            Colormap::Viridis => viridis(v),
            Colormap::Magma => magma(v),
            Colormap::Grayscale => {
                let g = (v * 255.0) as u8;
                [g, g, g]
            }
        }
    }

    /// Map a level in dB given the display range
    pub fn db_rgb(&self, db: f32, min_db: f32, max_db: f32) -> [u8; 3] {
        let span = (max_db - min_db).max(f32::EPSILON);
        self.rgb((db - min_db) / span)
    }
}

fn viridis(v: f32) -> [u8; 3] {
    let r = 68.0 + v * (235.0 - 68.0);
    let g = 1.0 + v * (237.0 - 1.0);
    let b = 84.0 + v * (32.0 - 84.0 + (1.0 - v) * 150.0);
    [r as u8, g as u8, b.clamp(0.0, 255.0) as u8]
}

fn magma(v: f32) -> [u8; 3] {
    let (r, g, b) = if v < 0.25 {
        let t = v / 0.25;
        (t * 20.0, 0.0, t * 50.0)
    } else if v < 0.5 {
        let t = (v - 0.25) / 0.25;
        (20.0 + t * 100.0, t * 20.0, 50.0 + t * 80.0)
    } else if v < 0.75 {
        let t = (v - 0.5) / 0.25;
        (120.0 + t * 100.0, 20.0 + t * 140.0, 130.0 - t * 100.0)
    } else {
        let t = (v - 0.75) / 0.25;
        (220.0 + t * 35.0, 160.0 + t * 95.0, 30.0 + t * 60.0)
    };
    [r as u8, g as u8, b as u8]
}
