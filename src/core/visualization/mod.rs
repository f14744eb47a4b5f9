//! Visualization tools for waveform buffers
//!
//! A `Figure` is built from panels first and drawn afterwards, so the same
//! figure can go to an SVG string for a notebook or to an image file.

mod colormap;
mod figure;
mod raster;
mod render;

pub use colormap::Colormap;
pub use figure::{Figure, Panel, PanelContent, PanelKind, WaveformTrace};
pub use raster::{save_spectrogram_image, spectrogram_image, RasterConfig};
pub use render::{draw_figure, min_max_envelope, render_bitmap, render_svg, save_figure};
