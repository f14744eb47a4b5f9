// tests/display_test.rs
//
// play_sound end to end: load from disk, build the figure, encode the player.

mod test_utils;

use soundview::core::visualization::{PanelContent, PanelKind};
use soundview::{load_wave, play_sound, PlayOptions, Waveform};
use std::io::Cursor;
use test_utils::{sine_i16, write_i16_wav};

#[test]
fn test_power_spectrum_peak_matches_sine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a440.wav");
    write_i16_wav(&path, &sine_i16(440.0, 0.5, 44100, 44100), 1, 44100);

    let wave = load_wave(&path).unwrap();
    let display = play_sound(&wave, &PlayOptions::default()).unwrap();

    let panel = &display.figure().panels()[1];
    assert_eq!(panel.x_label, Some("Frequency"));
    assert_eq!(panel.y_label, Some("power(dB)"));
    match &panel.content {
        PanelContent::PowerSpectrum { spectrum, max_hz } => {
            assert_eq!(*max_hz, 4000.0);
            let peak = spectrum.peak_frequency(*max_hz).unwrap();
            assert!((peak - 440.0).abs() <= spectrum.bin_width(), "peak at {}", peak);
        }
        other => panic!("expected power spectrum, got {:?}", other.kind()),
    }
}

#[test]
fn test_peak_follows_rate_argument() {
    // Same samples declared at half the rate put the peak at half the frequency
    let samples = sine_i16(1000.0, 0.5, 16000, 16000);
    let wave = Waveform::mono(samples.iter().map(|&s| s as f32 / 32768.0).collect());
    let display = play_sound(&wave, &PlayOptions::new().rate(8000)).unwrap();

    match &display.figure().panels()[1].content {
        PanelContent::PowerSpectrum { spectrum, .. } => {
            let peak = spectrum.peak_frequency(4000.0).unwrap();
            assert!((peak - 500.0).abs() <= spectrum.bin_width());
        }
        other => panic!("expected power spectrum, got {:?}", other.kind()),
    }
    assert_eq!(display.audio().sample_rate(), 8000);
}

#[test]
fn test_list_of_buffers_plays_concatenation_in_order() {
    let first = Waveform::mono(vec![0.5; 300]);
    let second = Waveform::mono(vec![-0.25; 200]);
    let waves = vec![first, second];

    let display = play_sound(&waves, &PlayOptions::new().name("pair")).unwrap();
    assert_eq!(
        display.figure().panel_kinds(),
        vec![PanelKind::Waveform, PanelKind::Waveform]
    );

    let bytes = display.audio().wav_bytes().to_vec();
    let played = soundview::core::read_wave(Cursor::new(bytes)).unwrap();
    assert_eq!(played.frames(), 500);
    // Peak normalization keeps sign and order
    assert!(played.samples[..300].iter().all(|&s| s > 0.0));
    assert!(played.samples[300..].iter().all(|&s| s < 0.0));
}

#[test]
fn test_suppressed_panels_still_return_figure() {
    let wave = Waveform::mono(vec![0.1; 128]);
    let display = play_sound(&wave, &PlayOptions::new().waveform(0).spectrum(-1)).unwrap();
    assert!(display.figure().panels().is_empty());
    assert_eq!(display.figure().size().pixels(), (3200, 800));
}

#[test]
fn test_stereo_waveform_spectrum_uses_mixdown() {
    let wave = Waveform::interleaved(vec![0.5, -0.5, 0.5, -0.5, 0.5, -0.5, 0.5, -0.5], 2);
    let display = play_sound(&wave, &PlayOptions::default()).unwrap();
    match &display.figure().panels()[1].content {
        PanelContent::PowerSpectrum { spectrum, .. } => {
            // Channels cancel: four frames of silence
            assert_eq!(spectrum.len(), 3);
            assert!(spectrum.power_db.iter().all(|&p| p <= -199.0));
        }
        other => panic!("expected power spectrum, got {:?}", other.kind()),
    }
    assert_eq!(display.audio().channels(), 2);
}

#[test]
#[ignore] // Needs a system font for axis labels
fn test_render_full_figure_to_svg_and_png() {
    let dir = tempfile::tempdir().unwrap();
    let samples = sine_i16(220.0, 0.7, 8000, 8000);
    let wave = Waveform::mono(samples.iter().map(|&s| s as f32 / 32768.0).collect());

    for spectrum in [0, 1] {
        let options = PlayOptions::new()
            .rate(8000)
            .spectrum(spectrum)
            .name("tone")
            .figsize(8.0, 4.0);
        let display = play_sound(&wave, &options).unwrap();

        let html = display.to_html().unwrap();
        assert!(html.contains("<svg"));
        assert!(html.contains("<audio"));

        let png = dir.path().join(format!("tone_{}.png", spectrum));
        display.save_figure(&png).unwrap();
        assert!(png.exists());
    }
}
