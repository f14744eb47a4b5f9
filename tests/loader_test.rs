// tests/loader_test.rs
//
// Loading wave files from disk.

mod test_utils;

use approx::assert_relative_eq;
use soundview::core::NORMALIZATION_DIVISOR;
use soundview::load_wave;
use test_utils::{sine_i16, write_i16_wav, write_i24_wav, write_u8_wav};

#[test]
fn test_round_trip_divides_by_32768() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("known.wav");
    let original: Vec<i16> = vec![0, 1, -1, 1000, -1000, 16384, -16384, i16::MAX, i16::MIN];
    write_i16_wav(&path, &original, 1, 44100);

    let wave = load_wave(&path).unwrap();
    assert_eq!(wave.samples.len(), original.len());
    for (loaded, &raw) in wave.samples.iter().zip(&original) {
        assert_eq!(*loaded, raw as f32 / 32768.0);
    }
}

#[test]
fn test_full_scale_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.wav");
    let all: Vec<i16> = (i16::MIN..=i16::MAX).step_by(7).chain([i16::MAX]).collect();
    write_i16_wav(&path, &all, 1, 8000);

    let wave = load_wave(&path).unwrap();
    let min = wave.samples.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = wave.samples.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(min, -1.0);
    assert_relative_eq!(max, 32767.0 / 32768.0);
    assert!(wave.samples.iter().all(|&s| (-1.0..1.0).contains(&s)));
}

#[test]
fn test_loading_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    write_i16_wav(&path, &sine_i16(330.0, 0.8, 22050, 5000), 1, 22050);

    let first = load_wave(&path).unwrap();
    let second = load_wave(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stereo_keeps_interleaving_and_header_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    write_i16_wav(&path, &[10, -10, 20, -20, 30, -30], 2, 48000);

    let wave = load_wave(&path).unwrap();
    assert_eq!(wave.channels, 2);
    assert_eq!(wave.frames(), 3);
    assert_eq!(wave.file_sample_rate, Some(48000));
    assert_eq!(wave.channel(0).unwrap(), vec![10.0 / 32768.0, 20.0 / 32768.0, 30.0 / 32768.0]);
}

#[test]
fn test_24_bit_is_left_justified_then_divided() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.wav");
    write_i24_wav(&path, &[4_000_000, -4_000_000, -8_388_608], 44100);

    let wave = load_wave(&path).unwrap();
    assert_eq!(wave.bits_per_sample, Some(24));
    // 4_000_000 << 8 = 1_024_000_000
    assert_relative_eq!(wave.samples[0], 31250.0);
    assert_relative_eq!(wave.samples[1], -31250.0);
    assert_relative_eq!(wave.samples[2], i32::MIN as f32 / NORMALIZATION_DIVISOR);
}

#[test]
fn test_8_bit_is_read_unsigned_then_divided() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("byte.wav");
    write_u8_wav(&path, &[-128, 0, 127], 8000);

    let wave = load_wave(&path).unwrap();
    assert_eq!(wave.bits_per_sample, Some(8));
    assert_eq!(wave.samples, vec![0.0, 128.0 / 32768.0, 255.0 / 32768.0]);
    assert!(wave.samples.iter().all(|&s| s >= 0.0));
}

#[test]
fn test_missing_file_is_reader_error() {
    let err = load_wave("/no/such/dir/missing.wav").unwrap_err();
    assert!(matches!(err, hound::Error::IoError(_)));
}

#[test]
fn test_malformed_file_is_reader_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.wav");
    std::fs::write(&path, b"RIFF\x04\x00\x00\x00WAVEjunk").unwrap();
    assert!(load_wave(&path).is_err());
}
