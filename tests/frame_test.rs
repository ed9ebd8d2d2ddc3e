//! Tests for request frames built from converted files.

mod common;

use common::fixtures::colors;
use common::TestWorkspace;
use inkalbum::error::FrameError;
use inkalbum::models::AppConfig;
use inkalbum::protocol::{FileHeader, Method, Request, FILE_HEADER_LEN};
use inkalbum::services::{write_outputs, PendingOutput};
use pretty_assertions::assert_eq;

#[test]
fn test_upload_converted_raw_file() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("photo.png", 16, 9, |_, _| colors::ORANGE);
    let report = ws.service(&AppConfig::default()).convert_image(&input).unwrap();
    let content = std::fs::read(&report.raw).unwrap();

    let request = Request::upload(content.clone()).unwrap();
    let frame = request.encode();

    assert_eq!(request.method(), Method::Upload);
    assert_eq!(frame.len(), 1 + FILE_HEADER_LEN + epa_dither::RAW_LEN);
    assert_eq!(frame[0], 1);
    assert_eq!(&frame[17..21], &(epa_dither::RAW_LEN as u32).to_be_bytes());
    assert_eq!(&frame[21..], content.as_slice());
}

#[test]
fn test_delete_matches_upload_header() {
    let content = vec![0x66; 1024];
    let upload = FileHeader::for_content(&content).unwrap();

    let delete = Request::Delete(FileHeader::from_hex(&upload.md5_hex(), 1024).unwrap()).encode();
    let uploaded = Request::upload(content).unwrap().encode();

    assert_eq!(delete[0], 2);
    assert_eq!(&delete[1..], &uploaded[1..1 + FILE_HEADER_LEN]);
}

#[test]
fn test_delete_rejects_short_digest() {
    let err = FileHeader::from_hex("d41d8cd98f00b204", 0).unwrap_err();
    assert!(matches!(err, FrameError::InvalidDigest(_)));
}

#[test]
fn test_frame_written_to_file() {
    let ws = TestWorkspace::new();
    let path = ws.path("list.bin");

    write_outputs(&[PendingOutput::new(path.clone(), Request::List.encode())]).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![3]);
    assert_eq!(ws.entries(), vec!["list.bin"]);
}
