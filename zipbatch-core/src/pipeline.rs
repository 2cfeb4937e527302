use std::fs;

use tracing::info;

use crate::cleanup::delete_sources;
use crate::config::BatchConfig;
use crate::domain::ArchiveRecord;
use crate::error::{Result, ZipBatchError};
use crate::pack::batcher::partition;
use crate::pack::walker::enumerate;
use crate::pack::writer::{ArchiveOptions, archive_name, write_archive};
use crate::progress::{Event, Observer};
use crate::stats::Summary;

/// Runs enumerate -> batch -> archive all -> (optionally) delete all.
///
/// Configuration is validated before any I/O. Sources are only removed
/// after every archive has been written; any earlier failure returns with
/// all sources in place.
pub fn run(cfg: &BatchConfig, observer: &mut dyn Observer) -> Result<Summary> {
    cfg.validate()?;

    let files = enumerate(&cfg.source_dir, &cfg.source_extension)?;
    let batches = partition(&files, cfg.batch_size)?;
    info!(
        source = %cfg.source_dir.display(),
        files = files.len(),
        batches = batches.len(),
        "planned batches"
    );
    observer.on_event(&Event::Enumerated {
        files: files.len(),
        batches: batches.len(),
    });

    let mut summary = Summary {
        files_found: files.len(),
        batch_size: cfg.batch_size,
        dry_run: cfg.dry_run,
        ..Default::default()
    };

    if cfg.dry_run {
        summary.archives = batches
            .iter()
            .map(|b| {
                let name = archive_name(&cfg.prefix, b.index, &cfg.archive_extension);
                ArchiveRecord {
                    index: b.index,
                    path: cfg.output_dir.join(&name),
                    name,
                    entries: b.len(),
                    bytes_in: 0,
                    bytes_out: 0,
                }
            })
            .collect();
        info!(archives = summary.archives.len(), "dry run, nothing written");
        return Ok(summary);
    }

    fs::create_dir_all(&cfg.output_dir).map_err(|source| ZipBatchError::OutputDir {
        path: cfg.output_dir.clone(),
        source,
    })?;

    let opts = ArchiveOptions::from(cfg);
    for b in &batches {
        let name = archive_name(&cfg.prefix, b.index, &cfg.archive_extension);
        let record = write_archive(&cfg.output_dir, &name, b, &opts, observer)?;
        summary.archives.push(record);
    }

    if cfg.delete_sources && !files.is_empty() {
        info!(files = files.len(), "removing archived sources");
        summary.files_deleted = delete_sources(&files, observer)?;
    }

    Ok(summary)
}
