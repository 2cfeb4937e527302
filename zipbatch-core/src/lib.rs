#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub mod codec;
pub mod domain;
pub mod progress;
pub mod stats;

pub mod pack {
    pub mod batcher;
    pub mod walker;
    pub mod writer;
}

pub mod cleanup;
pub mod pipeline;

// Re-exports: stable API surface
pub use codec::Method;
pub use config::BatchConfig;
pub use domain::{ArchiveRecord, Batch, FileRef};
pub use error::{Result, ZipBatchError};
pub use pack::batcher::{batch_count, partition};
pub use pack::walker::enumerate;
pub use pack::writer::{ArchiveOptions, archive_name, write_archive};
pub use pipeline::run;
pub use progress::{Event, Observer};
pub use stats::Summary;
