//! Compression codecs for segment streams.
//!
//! A codec wraps the raw byte sink or source of a segment with a
//! compressing/decompressing transform. The segment format does not
//! self-describe which codec was used; the reader must be constructed with
//! the same codec configuration as the writer. [`NoopCodec`] is the explicit
//! identity, so construction never branches on "codec present or not".

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use zstd::stream::read::Decoder as ZstdDecoder;
use zstd::stream::write::Encoder as ZstdEncoder;

const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// A compressing sink that must be finished explicitly.
///
/// Finishing writes any buffered data plus the codec trailer through to the
/// underlying sink, so close-time I/O errors surface to the caller instead
/// of being swallowed by a drop impl.
pub trait FinishWrite: Write {
    fn finish(self: Box<Self>) -> io::Result<()>;
}

/// Stream-wrapping compression strategy applied uniformly to one segment.
pub trait Codec {
    /// File name suffix for segments written with this codec (`""`, `".gz"`, `".zst"`).
    fn extension(&self) -> &'static str;

    /// Wrap a raw byte sink with the compressing transform.
    fn encoder(&self, sink: Box<dyn Write>) -> io::Result<Box<dyn FinishWrite>>;

    /// Wrap a raw byte source with the decompressing transform.
    fn decoder(&self, source: Box<dyn Read>) -> io::Result<Box<dyn Read>>;
}

/// Identity codec: bytes pass through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCodec;

struct Passthrough(Box<dyn Write>);

impl Write for Passthrough {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl FinishWrite for Passthrough {
    fn finish(mut self: Box<Self>) -> io::Result<()> {
        self.0.flush()
    }
}

impl Codec for NoopCodec {
    fn extension(&self) -> &'static str {
        ""
    }

    fn encoder(&self, sink: Box<dyn Write>) -> io::Result<Box<dyn FinishWrite>> {
        Ok(Box::new(Passthrough(sink)))
    }

    fn decoder(&self, source: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(source)
    }
}

/// Gzip codec backed by flate2.
#[derive(Debug, Clone, Copy)]
pub struct GzipCodec {
    level: Compression,
}

impl GzipCodec {
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FinishWrite for GzEncoder<Box<dyn Write>> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish()?;
        Ok(())
    }
}

impl Codec for GzipCodec {
    fn extension(&self) -> &'static str {
        ".gz"
    }

    fn encoder(&self, sink: Box<dyn Write>) -> io::Result<Box<dyn FinishWrite>> {
        Ok(Box::new(GzEncoder::new(sink, self.level)))
    }

    fn decoder(&self, source: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(GzDecoder::new(source)))
    }
}

/// Zstd codec. Level 3 by default.
#[derive(Debug, Clone, Copy)]
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new() -> Self {
        Self {
            level: DEFAULT_ZSTD_LEVEL,
        }
    }

    pub fn with_level(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FinishWrite for ZstdEncoder<'static, Box<dyn Write>> {
    fn finish(self: Box<Self>) -> io::Result<()> {
        (*self).finish()?;
        Ok(())
    }
}

impl Codec for ZstdCodec {
    fn extension(&self) -> &'static str {
        ".zst"
    }

    fn encoder(&self, sink: Box<dyn Write>) -> io::Result<Box<dyn FinishWrite>> {
        Ok(Box::new(ZstdEncoder::new(sink, self.level)?))
    }

    fn decoder(&self, source: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(ZstdDecoder::new(source)?))
    }
}
