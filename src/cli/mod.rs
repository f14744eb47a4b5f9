// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{Args, FigureFormat};
pub use output::{format_json, print_summary, print_written, WaveSummary, WrittenFiles};

use anyhow::{Context, Result};
use colorful::Colorful;
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::dsp::{Spectrogram, SpectrogramConfig};
use crate::core::visualization::{save_spectrogram_image, RasterConfig};
use crate::core::{load_wave, play_sound, Display, Waveform};

const WAVE_EXTENSIONS: [&str; 2] = ["wav", "wave"];

/// Run the CLI
pub fn run(args: &Args) -> Result<()> {
    let files = collect_wave_files(&args.inputs);
    if files.is_empty() {
        println!("{}", "No wave files found!".red());
        return Ok(());
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {}", args.output.display()))?;

    if !args.json {
        println!("Found {} wave file(s)\n", files.len());
    }

    let mut loaded = Vec::with_capacity(files.len());
    for path in &files {
        let wave = load_wave(path).with_context(|| format!("Failed to load: {}", path.display()))?;
        loaded.push((path.clone(), wave));
    }

    let summaries: Vec<WaveSummary> = loaded
        .iter()
        .map(|(path, wave)| WaveSummary::new(path, wave, args.rate))
        .collect();

    if args.combine {
        let waves: Vec<Waveform> = loaded.iter().map(|(_, w)| w.clone()).collect();
        let options = args.play_options("");
        let display = play_sound(&waves, &options).context("Failed to build combined display")?;
        let written = write_display(&display, &args.output, "combined", args)?;

        if !args.json {
            for summary in &summaries {
                print_summary(summary, args.verbose);
            }
            print_written(&written);
        }
    } else {
        for ((path, wave), summary) in loaded.iter().zip(&summaries) {
            let stem = file_stem(path);
            let options = args.play_options(&stem);
            let display = play_sound(wave, &options)
                .with_context(|| format!("Failed to build display for: {}", path.display()))?;

            let mut written = write_display(&display, &args.output, &stem, args)?;
            if args.spectrogram_image {
                let path = write_spectrogram_image(wave, args.rate, &args.output, &stem)?;
                written.spectrogram = Some(path);
            }

            if !args.json {
                print_summary(summary, args.verbose);
                print_written(&written);
                println!();
            }
        }
    }

    if args.json {
        println!("{}", format_json(&summaries)?);
    }

    Ok(())
}

/// Expand directories into the wave files below them, keeping file arguments
/// in the order given
pub fn collect_wave_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && has_wave_extension(p))
                .collect();
            found.sort();
            debug!("{} wave file(s) under {}", found.len(), input.display());
            files.extend(found);
        } else {
            // Let the loader report the missing path
            files.push(input.clone());
        }
    }

    files
}

fn has_wave_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WAVE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sound".to_string())
}

fn write_display(display: &Display, dir: &Path, stem: &str, args: &Args) -> Result<WrittenFiles> {
    let mut written = WrittenFiles::default();

    if !display.figure().is_empty() {
        let figure_path = dir.join(format!("{}.{}", stem, args.format.extension()));
        display
            .save_figure(&figure_path)
            .with_context(|| format!("Failed to write figure: {}", figure_path.display()))?;
        info!("Figure saved to {}", figure_path.display());
        written.figure = Some(figure_path);
    }

    let page_path = dir.join(format!("{}.html", stem));
    let html = display.to_html().context("Failed to render HTML page")?;
    std::fs::write(&page_path, html)
        .with_context(|| format!("Failed to write page: {}", page_path.display()))?;
    written.page = Some(page_path);

    Ok(written)
}

fn write_spectrogram_image(wave: &Waveform, rate: u32, dir: &Path, stem: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}_spectrogram.png", stem));
    let spectrogram = Spectrogram::compute(&wave.to_mono(), rate, &SpectrogramConfig::default());
    save_spectrogram_image(&spectrogram, &RasterConfig::default(), &path)
        .with_context(|| format!("Failed to write spectrogram: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_extension_filter() {
        assert!(has_wave_extension(Path::new("a/b.wav")));
        assert!(has_wave_extension(Path::new("B.WAV")));
        assert!(has_wave_extension(Path::new("c.wave")));
        assert!(!has_wave_extension(Path::new("d.flac")));
        assert!(!has_wave_extension(Path::new("noext")));
    }

    #[test]
    fn test_collect_walks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.wav"), b"").unwrap();
        std::fs::write(dir.path().join("sub/a.wav"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let files = collect_wave_files(&[dir.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| has_wave_extension(p)));
    }

    #[test]
    fn test_missing_path_is_kept() {
        let missing = PathBuf::from("/definitely/not/here.wav");
        assert_eq!(collect_wave_files(&[missing.clone()]), vec![missing]);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("dir/take_1.wav")), "take_1");
    }
}
