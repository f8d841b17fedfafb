//! Read half of the segment format.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::layout::SegmentPath;
use crate::record::{Record, DELIMITER};

/// Yields a segment's records in file order with synthetic offsets.
///
/// The segment's starting offset only seeds the offset counter; the file is
/// always read from its beginning. Offsets advance by exactly one per
/// decoded record regardless of any gaps in the upstream source.
pub struct SegmentReader {
    input: BufReader<Box<dyn Read>>,
    next_offset: u64,
}

impl SegmentReader {
    /// Open an existing segment for sequential reading.
    ///
    /// The codec must match the one the segment was written with; the format
    /// carries no codec marker of its own.
    pub fn open(path: &SegmentPath, codec: &dyn Codec) -> Result<Self> {
        let file_path = path.file_path(codec.extension());
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::open(&file_path)?;
        let decoder = codec.decoder(Box::new(file))?;
        Ok(Self {
            input: BufReader::new(decoder),
            next_offset: path.start_offset(),
        })
    }

    /// Decode the next record.
    ///
    /// Returns `Ok(None)` on a clean end of stream. End of stream in the
    /// middle of a record (bytes accumulated but no delimiter) is a framing
    /// error: the segment was truncated or corrupted mid-record.
    pub fn next(&mut self) -> Result<Option<Record>> {
        let mut value = Vec::new();
        let read = self.input.read_until(DELIMITER, &mut value)?;
        if read == 0 {
            return Ok(None);
        }
        if value.last() != Some(&DELIMITER) {
            return Err(Error::UnterminatedRecord {
                offset: self.next_offset,
            });
        }
        value.pop();
        let offset = self.next_offset;
        self.next_offset += 1;
        Ok(Some(Record { offset, value }))
    }

    /// Release the underlying descriptor.
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}
