use std::fs;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use seglog::{Error, GzipCodec, NoopCodec, SegmentPath, SegmentReader};
use tempfile::tempdir;

fn segment_path(root: &std::path::Path, start_offset: u64) -> SegmentPath {
    SegmentPath::new(root, "events", 0, start_offset).expect("segment path")
}

#[test]
fn trailing_partial_record_is_framing_error() {
    let dir = tempdir().expect("tempdir");
    let path = segment_path(dir.path(), 20);

    let file_path = path.file_path("");
    fs::create_dir_all(file_path.parent().expect("parent")).expect("mkdir");
    // Two complete frames, then a record cut off before its delimiter.
    fs::write(&file_path, b"one\ntwo\npartial").expect("write file");

    let mut reader = SegmentReader::open(&path, &NoopCodec).expect("reader");
    assert_eq!(reader.next().expect("first").expect("record").value, b"one");
    assert_eq!(reader.next().expect("second").expect("record").value, b"two");

    match reader.next() {
        Err(Error::UnterminatedRecord { offset }) => assert_eq!(offset, 22),
        other => panic!("expected framing error, got {other:?}"),
    }
}

#[test]
fn lone_partial_record_is_framing_error() {
    let dir = tempdir().expect("tempdir");
    let path = segment_path(dir.path(), 0);

    let file_path = path.file_path("");
    fs::create_dir_all(file_path.parent().expect("parent")).expect("mkdir");
    fs::write(&file_path, b"never terminated").expect("write file");

    let mut reader = SegmentReader::open(&path, &NoopCodec).expect("reader");
    assert!(matches!(
        reader.next(),
        Err(Error::UnterminatedRecord { offset: 0 })
    ));
}

#[test]
fn framing_error_behind_compression() {
    let dir = tempdir().expect("tempdir");
    let path = segment_path(dir.path(), 0);

    // A well-formed gzip stream whose decompressed payload ends mid-record.
    let file_path = path.file_path(".gz");
    fs::create_dir_all(file_path.parent().expect("parent")).expect("mkdir");
    let file = fs::File::create(&file_path).expect("create");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b"complete\npartial").expect("encode");
    encoder.finish().expect("finish");

    let mut reader = SegmentReader::open(&path, &GzipCodec::new()).expect("reader");
    assert_eq!(
        reader.next().expect("first").expect("record").value,
        b"complete"
    );
    assert!(matches!(
        reader.next(),
        Err(Error::UnterminatedRecord { offset: 1 })
    ));
}

#[test]
fn missing_segment_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let path = segment_path(dir.path(), 0);

    match SegmentReader::open(&path, &NoopCodec) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {:?}", other.err()),
    }
}
