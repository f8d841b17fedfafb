//! Mode-dispatched segment handles.
//!
//! [`SegmentWriter`] and [`SegmentReader`] are distinct types, so code that
//! knows its mode at compile time never pays for a mode check. [`Segment`]
//! is the tagged-variant handle for callers that pick the mode at runtime;
//! invoking an operation of the other mode on it is a programming error and
//! panics rather than returning a recoverable error.

use crate::codec::Codec;
use crate::error::Result;
use crate::layout::SegmentPath;
use crate::reader::SegmentReader;
use crate::record::Record;
use crate::writer::SegmentWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    Read,
    Write,
}

/// A segment opened in exactly one mode for its entire lifetime.
pub enum Segment {
    Reader(SegmentReader),
    Writer(SegmentWriter),
}

impl Segment {
    /// Construct a reader or writer for `path` according to `mode`.
    pub fn open(path: &SegmentPath, codec: &dyn Codec, mode: SegmentMode) -> Result<Self> {
        match mode {
            SegmentMode::Read => Ok(Segment::Reader(SegmentReader::open(path, codec)?)),
            SegmentMode::Write => Ok(Segment::Writer(SegmentWriter::create(path, codec)?)),
        }
    }

    /// Append one record. Panics on a read-mode segment.
    pub fn write(&mut self, key: u64, value: &[u8]) -> Result<()> {
        match self {
            Segment::Writer(writer) => writer.write(key, value),
            Segment::Reader(_) => panic!("write called on read-mode segment"),
        }
    }

    /// Cumulative bytes flushed to the file. Panics on a read-mode segment.
    pub fn bytes_written(&self) -> u64 {
        match self {
            Segment::Writer(writer) => writer.bytes_written(),
            Segment::Reader(_) => panic!("bytes_written called on read-mode segment"),
        }
    }

    /// Decode the next record. Panics on a write-mode segment.
    pub fn next(&mut self) -> Result<Option<Record>> {
        match self {
            Segment::Reader(reader) => reader.next(),
            Segment::Writer(_) => panic!("next called on write-mode segment"),
        }
    }

    /// Close whichever half is open, flushing a writer's buffered bytes.
    pub fn close(self) -> Result<()> {
        match self {
            Segment::Reader(reader) => reader.close(),
            Segment::Writer(writer) => writer.close(),
        }
    }
}
