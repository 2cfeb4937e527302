// zipbatch_core/src/domain.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source file and the name it gets inside an archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRef {
    pub path: PathBuf,
    pub name: String,
}

impl FileRef {
    /// Returns `None` for paths without a final component (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            path: path.to_path_buf(),
            name,
        })
    }
}

/// One contiguous slice of the enumerated files, numbered from 1.
#[derive(Clone, Copy, Debug)]
pub struct Batch<'a> {
    pub index: usize,
    pub files: &'a [FileRef],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
    pub entries: usize,
    /// Sum of the source file sizes.
    pub bytes_in: u64,
    /// Archive size on disk; zero for planned (dry-run) records.
    pub bytes_out: u64,
}
