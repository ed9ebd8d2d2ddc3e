//! Tests for `convert raw`: raw file in, preview out.

mod common;

use common::fixtures::{colors, pattern};
use common::{assert_absent, assert_palette_image, TestWorkspace};
use epa_dither::{pack, EpaError, Palette, PaletteImage, RawError, RawLayout, RAW_LEN};
use inkalbum::error::ConvertError;
use inkalbum::models::{AppConfig, PreviewFormat};
use pretty_assertions::assert_eq;

fn pattern_raw() -> Vec<u8> {
    let mut indices = Vec::with_capacity(800 * 480);
    for y in 0..480 {
        for x in 0..800 {
            indices.push(pattern::index_at(x, y) as u8);
        }
    }
    let image = PaletteImage::new(indices, 800, 480, Palette::epaper7());
    pack(&image, RawLayout::landscape()).unwrap().into_bytes()
}

#[test]
fn test_embedded_fixture() {
    let ws = TestWorkspace::new();

    let report = ws.service(&AppConfig::default()).convert_raw(None).unwrap();

    assert_eq!(report.preview, ws.path("testdata.bmp"));
    assert_eq!(report.undefined, 0);
    let img = assert_palette_image(&report.preview, 800, 480);
    for (x, y) in [(0, 0), (114, 10), (115, 10), (400, 0), (799, 399), (0, 400), (40, 400), (799, 479)] {
        let expected = colors::ALL[pattern::index_at(x, y)];
        assert_eq!(img.get_pixel(x, y).0, expected, "({x}, {y})");
    }
}

#[test]
fn test_fixture_matches_pattern() {
    let fixture = inkalbum::assets::AssetLoader::raw_fixture().unwrap();
    assert_eq!(&*fixture, pattern_raw().as_slice());
}

#[test]
fn test_raw_file_to_bmp() {
    let ws = TestWorkspace::new();
    let input = ws.write_bytes("frame.epa", &pattern_raw());

    let report = ws
        .service(&AppConfig::default())
        .convert_raw(Some(&input))
        .unwrap();

    assert_eq!(report.preview, ws.path("frame.epa.bmp"));
    let img = assert_palette_image(&report.preview, 800, 480);
    assert_eq!(img.get_pixel(799, 0).0, colors::ORANGE);
    assert_eq!(img.get_pixel(40, 440).0, colors::BLACK);
}

#[test]
fn test_raw_file_to_png() {
    let ws = TestWorkspace::new();
    let input = ws.write_bytes("frame.epa", &vec![0x35; RAW_LEN]);
    let config = AppConfig {
        preview: PreviewFormat::Png,
        ..AppConfig::default()
    };

    let report = ws.service(&config).convert_raw(Some(&input)).unwrap();
    assert_eq!(report.preview, ws.path("frame.epa.png"));
    let img = assert_palette_image(&report.preview, 800, 480);
    assert_eq!(img.get_pixel(0, 0).0, colors::BLUE);
    assert_eq!(img.get_pixel(1, 0).0, colors::YELLOW);
}

#[test]
fn test_short_raw_file_rejected() {
    let ws = TestWorkspace::new();
    let input = ws.write_bytes("short.epa", &vec![0x11; RAW_LEN - 1]);

    let err = ws
        .service(&AppConfig::default())
        .convert_raw(Some(&input))
        .unwrap_err();

    match err {
        ConvertError::Pipeline(EpaError::Raw(RawError::InsufficientData { expected, actual })) => {
            assert_eq!(expected, RAW_LEN);
            assert_eq!(actual, RAW_LEN - 1);
        }
        other => panic!("Expected insufficient data, got {other:?}"),
    }
    assert_eq!(ws.entries(), vec!["short.epa"]);
}

#[test]
fn test_trailing_bytes_ignored() {
    let ws = TestWorkspace::new();
    let mut bytes = vec![0x11; RAW_LEN];
    bytes.extend_from_slice(&[0x44; 16]);
    let input = ws.write_bytes("long.epa", &bytes);

    let report = ws
        .service(&AppConfig::default())
        .convert_raw(Some(&input))
        .unwrap();
    let img = assert_palette_image(&report.preview, 800, 480);
    assert_eq!(img.get_pixel(799, 479).0, colors::WHITE);
}

#[test]
fn test_undefined_indices_drawn_black() {
    let ws = TestWorkspace::new();
    // 0x7F: both nibbles reduce to 7; 0x9E wraps to white and orange
    let mut bytes = vec![0x9E; RAW_LEN];
    bytes[0] = 0x7F;
    let input = ws.write_bytes("odd.epa", &bytes);

    let report = ws
        .service(&AppConfig::default())
        .convert_raw(Some(&input))
        .unwrap();

    assert_eq!(report.undefined, 2);
    let img = assert_palette_image(&report.preview, 800, 480);
    assert_eq!(img.get_pixel(0, 0).0, colors::BLACK);
    assert_eq!(img.get_pixel(1, 0).0, colors::BLACK);
    assert_eq!(img.get_pixel(2, 0).0, colors::WHITE);
    assert_eq!(img.get_pixel(3, 0).0, colors::ORANGE);
}

#[test]
fn test_missing_raw_file() {
    let ws = TestWorkspace::new();
    let input = ws.path("gone.epa");

    let err = ws
        .service(&AppConfig::default())
        .convert_raw(Some(&input))
        .unwrap_err();

    assert!(matches!(err, ConvertError::InputUnavailable { .. }));
    assert_absent(&ws.path("gone.epa.bmp"));
}
