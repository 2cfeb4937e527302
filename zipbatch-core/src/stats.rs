use serde::{Deserialize, Serialize};

use crate::domain::ArchiveRecord;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Summary {
    pub files_found: usize,
    pub batch_size: usize,
    pub archives: Vec<ArchiveRecord>,
    pub files_deleted: usize,
    pub dry_run: bool,
}

impl Summary {
    pub fn bytes_in(&self) -> u64 {
        self.archives.iter().map(|a| a.bytes_in).sum()
    }

    pub fn bytes_out(&self) -> u64 {
        self.archives.iter().map(|a| a.bytes_out).sum()
    }

    /// Output over input size; `None` when nothing was written.
    pub fn compression_ratio(&self) -> Option<f64> {
        let (i, o) = (self.bytes_in(), self.bytes_out());
        (i > 0 && o > 0).then(|| o as f64 / i as f64)
    }
}
