//! Delimiter-framed log segment files with transparent compression.
//!
//! The on-disk format is a flat sequence of `<value><0x0A>` frames: no
//! header, no footer, no checksums, no persisted keys. A segment is written
//! once by a single writer, then read sequentially; record offsets are
//! synthesized on read from the segment's starting offset. An optional
//! codec ([`GzipCodec`], [`ZstdCodec`]) wraps the whole file; readers must
//! be configured with the same codec as the writer.

pub mod codec;
pub mod error;
pub mod layout;
pub mod reader;
pub mod record;
pub mod segment;
pub mod writer;

pub use codec::{Codec, GzipCodec, NoopCodec, ZstdCodec};
pub use error::{Error, Result};
pub use layout::{LayoutError, SegmentPath};
pub use reader::SegmentReader;
pub use record::{Record, DELIMITER};
pub use segment::{Segment, SegmentMode};
pub use writer::SegmentWriter;
