use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::info;
use seglog::{Codec, GzipCodec, NoopCodec, SegmentPath, SegmentReader, ZstdCodec};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CodecArg {
    None,
    Gzip,
    Zstd,
}

#[derive(Parser)]
#[command(name = "seglog-cat")]
#[command(about = "Dump the records of a log segment to stdout")]
struct Cli {
    /// Segment store root directory
    #[arg(long)]
    root: PathBuf,

    /// Topic name
    #[arg(long)]
    topic: String,

    /// Partition number
    #[arg(long, default_value_t = 0)]
    partition: u32,

    /// Starting offset of the segment (seeds the printed offsets)
    #[arg(long)]
    offset: u64,

    /// Codec the segment was written with
    #[arg(long, value_enum, default_value_t = CodecArg::None)]
    codec: CodecArg,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let path = SegmentPath::new(&cli.root, &cli.topic, cli.partition, cli.offset)
        .map_err(|err| anyhow!(err))?;
    let codec: Box<dyn Codec> = match cli.codec {
        CodecArg::None => Box::new(NoopCodec),
        CodecArg::Gzip => Box::new(GzipCodec::new()),
        CodecArg::Zstd => Box::new(ZstdCodec::new()),
    };

    let mut reader = SegmentReader::open(&path, codec.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count: u64 = 0;
    while let Some(record) = reader.next()? {
        write!(out, "{}\t", record.offset)?;
        out.write_all(&record.value)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    reader.close()?;

    info!("{} records in {}", count, path.file_path(codec.extension()).display());
    Ok(())
}
