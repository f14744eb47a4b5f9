// src/core/visualization/render.rs
//
// Draws a `Figure` through plotters, to an SVG string or a bitmap file.

use log::debug;
use plotters::coord::types::RangedCoordf32;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::colormap::Colormap;
use super::figure::{Figure, Panel, PanelContent, WaveformTrace};
use crate::core::dsp::{PowerSpectrum, Spectrogram};
use crate::error::{Result, SoundError};

const FONT: &str = "sans-serif";
const SPECTRUM_BLUE: RGBColor = RGBColor(31, 119, 180);
/// Levels further than this below the loudest cell share the bottom colour
const SPECTROGRAM_RANGE_DB: f32 = 100.0;
const MAX_SPECTROGRAM_COLUMNS: usize = 240;
const MAX_SPECTROGRAM_ROWS: usize = 128;

/// Render to an SVG document
pub fn render_svg(figure: &Figure) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, figure.size().pixels()).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present().map_err(SoundError::plot)?;
    }
    Ok(svg)
}

/// Render to an image file; the format follows the extension
pub fn render_bitmap(figure: &Figure, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, figure.size().pixels()).into_drawing_area();
    draw_figure(&root, figure)?;
    root.present().map_err(SoundError::plot)?;
    Ok(())
}

/// Write SVG for `.svg` paths and a bitmap for anything else
pub fn save_figure(figure: &Figure, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match ext.as_deref() {
        Some("svg") => {
            std::fs::write(path, render_svg(figure)?)?;
            Ok(())
        }
        Some("png") | Some("bmp") | Some("jpg") | Some("jpeg") => render_bitmap(figure, path),
        other => Err(SoundError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<()> {
    root.fill(&WHITE).map_err(SoundError::plot)?;

    if figure.is_empty() {
        return Ok(());
    }

    let areas = root.split_evenly((figure.rows(), 1));
    for panel in figure.panels() {
        debug!("Drawing {:?} panel in row {}", panel.kind(), panel.slot);
        if let Some(area) = areas.get(panel.slot) {
            draw_panel(area, panel)?;
        }
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<()> {
    let (width, _) = area.dim_in_pixel();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70);
    if let Some(title) = panel.title.as_deref().filter(|t| !t.is_empty()) {
        builder.caption(title, (FONT, 22));
    }

    let (x_range, y_range) = match &panel.content {
        PanelContent::Waveform(trace) => {
            let (lo, hi) = trace.value_range();
            let pad = (hi - lo) * 0.05;
            (0.0..trace.duration_secs().max(f32::EPSILON), (lo - pad)..(hi + pad))
        }
        PanelContent::PowerSpectrum { spectrum, max_hz } => {
            let top = spectrum.max_db().filter(|&m| m > 0.0).map_or(1.0, |m| m * 1.05);
            (0.0..*max_hz, 0.0..top)
        }
        PanelContent::Spectrogram {
            spectrogram,
            sample_rate,
        } => {
            let end = spectrogram_end_time(spectrogram, *sample_rate);
            (0.0..end, 0.0..(*sample_rate as f32 / 2.0).max(1.0))
        }
        PanelContent::Empty => (0.0..1.0, 0.0..1.0),
    };

    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(SoundError::plot)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh();
        if let Some(x) = panel.x_label {
            mesh.x_desc(x);
        }
        if let Some(y) = panel.y_label {
            mesh.y_desc(y);
        }
        mesh.draw().map_err(SoundError::plot)?;
    }

    // Two points per pixel column keep the envelope without bloating SVG
    let max_points = (width as usize * 2).max(2);

    match &panel.content {
        PanelContent::Waveform(trace) => draw_waveform(&mut chart, trace, max_points),
        PanelContent::PowerSpectrum { spectrum, max_hz } => {
            draw_power_spectrum(&mut chart, spectrum, *max_hz, max_points)
        }
        PanelContent::Spectrogram {
            spectrogram,
            sample_rate,
        } => draw_spectrogram(&mut chart, spectrogram, *sample_rate),
        PanelContent::Empty => Ok(()),
    }
}

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf32, RangedCoordf32>>;

fn draw_waveform<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    trace: &WaveformTrace,
    max_points: usize,
) -> Result<()> {
    let rate = trace.sample_rate.max(1) as f32;

    for ch in 0..trace.wave.channel_count() {
        let Some(samples) = trace.wave.channel(ch) else {
            continue;
        };
        let color = if ch == 0 {
            BLACK
        } else {
            let c = Palette99::pick(ch as usize).to_rgba();
            RGBColor(c.0, c.1, c.2)
        };

        let points = min_max_envelope(&samples, max_points)
            .into_iter()
            .map(|(i, v)| (i as f32 / rate, v));
        chart
            .draw_series(LineSeries::new(points, &color))
            .map_err(SoundError::plot)?;
    }
    Ok(())
}

fn draw_power_spectrum<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    spectrum: &PowerSpectrum,
    max_hz: f32,
    max_points: usize,
) -> Result<()> {
    let visible = spectrum
        .frequencies
        .iter()
        .take_while(|&&f| f <= max_hz)
        .count();

    // Levels under the axis floor are pinned to it
    let levels: Vec<f32> = spectrum.power_db[..visible]
        .iter()
        .map(|&p| p.max(0.0))
        .collect();

    let points = min_max_envelope(&levels, max_points)
        .into_iter()
        .map(|(i, v)| (spectrum.frequencies[i], v));
    chart
        .draw_series(LineSeries::new(points, &SPECTRUM_BLUE))
        .map_err(SoundError::plot)?;
    Ok(())
}

fn draw_spectrogram<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    spectrogram: &Spectrogram,
    sample_rate: u32,
) -> Result<()> {
    if spectrogram.num_frames() == 0 {
        return Ok(());
    }

    let (min_db, max_db) = spectrogram.db_range(SPECTROGRAM_RANGE_DB);
    let columns = spectrogram.num_frames().min(MAX_SPECTROGRAM_COLUMNS);
    let rows = spectrogram.num_bins().min(MAX_SPECTROGRAM_ROWS);
    let end_time = spectrogram_end_time(spectrogram, sample_rate);
    let nyquist = sample_rate as f32 / 2.0;
    let colormap = Colormap::Viridis;

    let cell_w = end_time / columns as f32;
    let cell_h = nyquist / rows as f32;

    let cells = (0..columns).flat_map(move |col| {
        (0..rows).map(move |row| {
            let frame = col * spectrogram.num_frames() / columns;
            let bin = row * spectrogram.num_bins() / rows;
            let [r, g, b] = colormap.db_rgb(spectrogram.level(frame, bin), min_db, max_db);
            let x0 = col as f32 * cell_w;
            let y0 = row as f32 * cell_h;
            Rectangle::new([(x0, y0), (x0 + cell_w, y0 + cell_h)], RGBColor(r, g, b).filled())
        })
    });

    chart.draw_series(cells).map_err(SoundError::plot)?;
    Ok(())
}

fn spectrogram_end_time(spectrogram: &Spectrogram, sample_rate: u32) -> f32 {
    let half_segment = crate::core::dsp::SPECGRAM_NFFT as f32 / 2.0 / sample_rate.max(1) as f32;
    spectrogram
        .times
        .last()
        .map_or(1.0, |&t| t + half_segment)
        .max(f32::EPSILON)
}

/// Reduce `values` to at most `max_points` (index, value) pairs keeping the
/// minimum and maximum of each bucket in index order.
pub fn min_max_envelope(values: &[f32], max_points: usize) -> Vec<(usize, f32)> {
    if values.len() <= max_points.max(2) {
        return values.iter().copied().enumerate().collect();
    }

    let buckets = (max_points / 2).max(1);
    let bucket_len = values.len().div_ceil(buckets);
    let mut points = Vec::with_capacity(buckets * 2);

    for (b, chunk) in values.chunks(bucket_len).enumerate() {
        let base = b * bucket_len;
        let (mut min_i, mut max_i) = (0, 0);
        for (i, &v) in chunk.iter().enumerate() {
            if v < chunk[min_i] {
                min_i = i;
            }
            if v > chunk[max_i] {
                max_i = i;
            }
        }
        let (first, second) = if min_i <= max_i { (min_i, max_i) } else { (max_i, min_i) };
        points.push((base + first, chunk[first]));
        if second != first {
            points.push((base + second, chunk[second]));
        }
    }

    points
}
