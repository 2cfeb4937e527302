use clap::Parser;
use std::path::PathBuf;
use zipbatch_core::Method;
use zipbatch_core::config::{DEFAULT_BATCH_SIZE, DEFAULT_SOURCE_EXTENSION};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pack a flat directory of files into numbered ZIP archives",
    long_about = "Pack a flat directory of files into numbered ZIP archives.\n\n\
        With SOURCE_DIR, OUTPUT_DIR and PREFIX the archived sources are deleted \
        once every archive has been written (see --keep-sources, --dry-run). \
        Without arguments, files from ./input are archived into ./output as \
        batch_NNNN.zip and nothing is deleted."
)]
pub struct Cli {
    /// Directory holding the files to archive
    #[arg(value_name = "SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Where archives are written; created if missing
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Archive name prefix (PREFIX_0001.zip, PREFIX_0002.zip, ...)
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Files per archive
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Only files with this extension are collected
    #[arg(short, long, default_value = DEFAULT_SOURCE_EXTENSION)]
    pub extension: String,

    /// Entry compression: stored, deflated or zstd
    #[arg(long, default_value = "deflated")]
    pub method: Method,

    /// Compression level (deflated 1-9, zstd -7..22)
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// Stamp every entry with 1980-01-01 so reruns are byte-identical
    #[arg(long)]
    pub deterministic: bool,

    /// Do not delete sources after archiving
    #[arg(long)]
    pub keep_sources: bool,

    /// Show what would be written; touch nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// No progress bars or human-readable summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which of the two invocation forms the positional arguments select.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Extended {
        source: PathBuf,
        output: PathBuf,
        prefix: String,
    },
    Legacy,
}

impl Cli {
    /// `None` when only some of the positional arguments were given.
    pub fn invocation(&self) -> Option<Invocation> {
        match (&self.source, &self.output, &self.prefix) {
            (Some(source), Some(output), Some(prefix)) => Some(Invocation::Extended {
                source: source.clone(),
                output: output.clone(),
                prefix: prefix.clone(),
            }),
            (None, None, None) => Some(Invocation::Legacy),
            _ => None,
        }
    }
}
