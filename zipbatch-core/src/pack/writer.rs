use std::fs::{File, Metadata};
use std::io::{self, Read, Write};
use std::path::Path;

use time::OffsetDateTime;
use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipWriter};

use crate::codec::Method;
use crate::config::{BatchConfig, normalize_extension};
use crate::domain::{ArchiveRecord, Batch};
use crate::error::{Result, ZipBatchError};
use crate::progress::{Event, Observer};

/// Entries at or above this size need the ZIP64 extension.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

#[derive(Clone, Debug, Default)]
pub struct ArchiveOptions {
    pub method: Method,
    pub level: Option<i64>,
    /// When true, every entry gets the ZIP epoch as its timestamp.
    pub deterministic: bool,
}

impl From<&BatchConfig> for ArchiveOptions {
    fn from(cfg: &BatchConfig) -> Self {
        Self {
            method: cfg.method,
            level: cfg.level,
            deterministic: cfg.deterministic,
        }
    }
}

/// `{prefix}_{index:04}.{ext}`, e.g. `batch_0001.zip`.
pub fn archive_name(prefix: &str, index: usize, ext: &str) -> String {
    format!("{prefix}_{index:04}.{}", normalize_extension(ext))
}

/// Which side of an entry copy failed.
#[derive(Debug)]
enum CopyError {
    Read(io::Error),
    Write(io::Error),
}

/// `io::copy` that keeps source read failures apart from archive write
/// failures.
fn copy_entry(src: &mut dyn Read, dst: &mut dyn Write) -> std::result::Result<u64, CopyError> {
    let mut buf = vec![0u8; 1 << 16];
    let mut total = 0u64;
    loop {
        let k = match src.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(k) => k,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        dst.write_all(&buf[..k]).map_err(CopyError::Write)?;
        total += k as u64;
    }
}

fn entry_time(md: &Metadata) -> DateTime {
    md.modified()
        .ok()
        .map(OffsetDateTime::from)
        .and_then(|t| DateTime::try_from(t).ok())
        .unwrap_or_default()
}

/// Writes `batch` to `out_dir/name`, each file stored under its base name.
///
/// The archive is assembled in a temporary file next to its destination and
/// renamed into place once the central directory is written, so a failure
/// never leaves a truncated archive behind. An existing archive of the same
/// name is replaced.
pub fn write_archive(
    out_dir: &Path,
    name: &str,
    batch: &Batch<'_>,
    opts: &ArchiveOptions,
    observer: &mut dyn Observer,
) -> Result<ArchiveRecord> {
    let path = out_dir.join(name);
    let write_err = |source: ZipError| ZipBatchError::WriteArchive {
        path: path.clone(),
        source,
    };

    observer.on_event(&Event::ArchiveStarted {
        index: batch.index,
        name,
        entries: batch.len(),
    });

    let mut builder = tempfile::Builder::new();
    builder.prefix(".zipbatch-").suffix(".part");
    // Same mode `File::create` would give; the default is owner-only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder
        .tempfile_in(out_dir)
        .map_err(|e| write_err(e.into()))?;

    let mut zip = ZipWriter::new(tmp);
    let mut bytes_in = 0u64;

    for f in batch.files {
        let read_err = |source: io::Error| ZipBatchError::ReadEntry {
            path: f.path.clone(),
            source,
        };
        let mut src = File::open(&f.path).map_err(read_err)?;
        let md = src.metadata().map_err(read_err)?;

        let mtime = if opts.deterministic {
            DateTime::default()
        } else {
            entry_time(&md)
        };
        let entry = SimpleFileOptions::default()
            .compression_method(opts.method.zip_method())
            .compression_level(opts.level)
            .last_modified_time(mtime)
            .large_file(md.len() >= ZIP64_THRESHOLD);

        zip.start_file(f.name.as_str(), entry).map_err(write_err)?;
        let n = copy_entry(&mut src, &mut zip).map_err(|e| match e {
            CopyError::Read(e) => read_err(e),
            CopyError::Write(e) => write_err(ZipError::Io(e)),
        })?;
        bytes_in += n;

        debug!(archive = name, entry = %f.name, bytes = n, "added entry");
        observer.on_event(&Event::EntryAdded { name: &f.name });
    }

    let tmp = zip.finish().map_err(write_err)?;
    let file = tmp.persist(&path).map_err(|e| write_err(e.error.into()))?;
    let bytes_out = file.metadata().map_err(|e| write_err(e.into()))?.len();

    let record = ArchiveRecord {
        index: batch.index,
        name: name.to_string(),
        path,
        entries: batch.len(),
        bytes_in,
        bytes_out,
    };
    info!(
        archive = %record.path.display(),
        entries = record.entries,
        bytes_in,
        bytes_out,
        "archive written"
    );
    observer.on_event(&Event::ArchiveFinished(&record));
    Ok(record)
}
