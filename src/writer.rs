//! Write half of the segment format.
//!
//! Stream composition is load-bearing and must not be reordered:
//!
//! ```text
//! raw file -> byte counter -> codec encoder -> BufWriter
//! ```
//!
//! The counter sits directly on the file, so [`SegmentWriter::bytes_written`]
//! reports post-compression bytes the codec has flushed downstream. That is
//! the number segment-rotation decisions care about; it is not the logical
//! payload size and it lags behind `write` calls until a flush or close.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::codec::{Codec, FinishWrite};
use crate::error::{Error, Result};
use crate::layout::SegmentPath;
use crate::record::DELIMITER;

/// Counts bytes accepted by the wrapped sink.
struct CountingWriter {
    inner: File,
    count: Arc<AtomicU64>,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count.fetch_add(written as u64, Ordering::Relaxed);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Appends delimiter-framed records to a new segment file.
///
/// One writer exists per file for the file's whole write lifetime. The
/// counting wrapper is installed once at construction and never replaced.
pub struct SegmentWriter {
    out: BufWriter<Box<dyn FinishWrite>>,
    bytes_written: Arc<AtomicU64>,
}

impl SegmentWriter {
    /// Create (or truncate) the segment file and set up the write stream.
    ///
    /// Parent directories are created as needed. On any failure the partially
    /// acquired resources are released; no handle is returned.
    pub fn create(path: &SegmentPath, codec: &dyn Codec) -> Result<Self> {
        let file_path = path.file_path(codec.extension());
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&file_path)?;
        let bytes_written = Arc::new(AtomicU64::new(0));
        let counting = CountingWriter {
            inner: file,
            count: Arc::clone(&bytes_written),
        };
        let encoder = codec.encoder(Box::new(counting))?;
        Ok(Self {
            out: BufWriter::new(encoder),
            bytes_written,
        })
    }

    /// Append one record: `value` followed by a single delimiter byte.
    ///
    /// No other metadata is persisted. `key` is accepted to match the read
    /// side's record shape but is deliberately ignored; readers synthesize
    /// offsets from the segment's starting offset instead. `value` must not
    /// contain the delimiter byte (producer-enforced, not checked here).
    pub fn write(&mut self, _key: u64, value: &[u8]) -> Result<()> {
        self.out.write_all(value)?;
        self.out.write_all(&[DELIMITER])?;
        Ok(())
    }

    /// Bytes the codec has flushed to the file so far.
    ///
    /// Monotonically non-decreasing. Lags behind logical writes while data
    /// sits in the buffer or the codec; call [`flush`](Self::flush) first if
    /// the rotation decision needs an up-to-date figure.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    /// Push buffered bytes down through the codec to the file.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush remaining bytes, finish the codec stream, and release the file.
    pub fn close(self) -> Result<()> {
        let encoder = self
            .out
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))?;
        encoder.finish()?;
        Ok(())
    }
}
