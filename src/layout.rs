//! Segment path resolution.
//!
//! A segment is located by topic, partition, and the logical offset of its
//! first record: `<root>/<topic>/<partition>/<offset>` with the offset
//! zero-padded to a fixed width so lexicographic and numeric order agree.
//! Codec-specific suffixes (`.gz`, `.zst`) are appended by the caller via
//! [`SegmentPath::file_path`].

use std::fmt;
use std::path::{Path, PathBuf};

const OFFSET_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyComponent { field: &'static str },
    InvalidComponent { field: &'static str, value: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyComponent { field } => {
                write!(f, "empty path component: {field}")
            }
            LayoutError::InvalidComponent { field, value } => {
                write!(f, "invalid path component for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

type Result<T> = std::result::Result<T, LayoutError>;

/// Location of one segment file plus the starting offset of its first
/// record. The starting offset labels the records on read; it is never used
/// as a byte position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPath {
    root: PathBuf,
    topic: String,
    partition: u32,
    start_offset: u64,
}

impl SegmentPath {
    pub fn new(
        root: impl Into<PathBuf>,
        topic: impl Into<String>,
        partition: u32,
        start_offset: u64,
    ) -> Result<Self> {
        let topic = topic.into();
        validate_component("topic", &topic)?;
        Ok(Self {
            root: root.into(),
            topic,
            partition,
            start_offset,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partition(&self) -> u32 {
        self.partition
    }

    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Directory holding this partition's segments.
    pub fn partition_dir(&self) -> PathBuf {
        self.root
            .join(&self.topic)
            .join(self.partition.to_string())
    }

    /// Full path of the segment file, with the codec's suffix appended.
    pub fn file_path(&self, extension: &str) -> PathBuf {
        self.partition_dir()
            .join(segment_file_name(self.start_offset, extension))
    }
}

fn segment_file_name(start_offset: u64, extension: &str) -> String {
    format!("{:0width$}{}", start_offset, extension, width = OFFSET_WIDTH)
}

fn validate_component(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LayoutError::EmptyComponent { field });
    }
    if value == "." || value == ".." || value.contains('/') || value.contains('\\') {
        return Err(LayoutError::InvalidComponent {
            field,
            value: value.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(LayoutError::InvalidComponent {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_file_path() {
        let path = SegmentPath::new("/data/segments", "events", 3, 42).expect("path");
        assert_eq!(
            path.file_path(""),
            PathBuf::from("/data/segments/events/3/00000000000000000042")
        );
    }

    #[test]
    fn codec_extension_appended() {
        let path = SegmentPath::new("/data/segments", "events", 0, 7).expect("path");
        assert_eq!(
            path.file_path(".gz"),
            PathBuf::from("/data/segments/events/0/00000000000000000007.gz")
        );
    }

    #[test]
    fn reject_invalid_topic() {
        let err = SegmentPath::new("/data", "bad/topic", 0, 0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidComponent { .. }));
    }

    #[test]
    fn reject_empty_topic() {
        let err = SegmentPath::new("/data", "", 0, 0).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyComponent { .. }));
    }

    #[test]
    fn reject_parent_traversal() {
        let err = SegmentPath::new("/data", "..", 0, 0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidComponent { .. }));
    }
}
