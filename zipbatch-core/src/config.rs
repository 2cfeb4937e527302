use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::codec::Method;
use crate::error::{Result, ZipBatchError};

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_SOURCE_EXTENSION: &str = "txt";
pub const DEFAULT_ARCHIVE_EXTENSION: &str = "zip";

pub const LEGACY_SOURCE_DIR: &str = "input";
pub const LEGACY_OUTPUT_DIR: &str = "output";
pub const LEGACY_PREFIX: &str = "batch";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub batch_size: usize,
    /// Extension of the files to collect, without the leading dot.
    pub source_extension: String,
    pub archive_extension: String,
    pub method: Method,
    pub level: Option<i64>,
    /// When true, entries get the ZIP epoch instead of the source mtime.
    pub deterministic: bool,
    /// Remove every archived source once all archives are written.
    pub delete_sources: bool,
    /// Plan only: no directory creation, no archives, no deletions.
    pub dry_run: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::legacy()
    }
}

impl BatchConfig {
    /// The three-argument invocation. Deletes sources unless told otherwise.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            archive_extension: DEFAULT_ARCHIVE_EXTENSION.to_string(),
            method: Method::default(),
            level: None,
            deterministic: false,
            delete_sources: true,
            dry_run: false,
        }
    }

    /// No-argument mode: `input` -> `output`, prefix `batch`, sources kept.
    pub fn legacy() -> Self {
        Self {
            delete_sources: false,
            ..Self::new(LEGACY_SOURCE_DIR, LEGACY_OUTPUT_DIR, LEGACY_PREFIX)
        }
    }

    /// Checks everything that can be checked without touching the disk.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(ZipBatchError::Config(
                "batch size must be at least 1".to_string(),
            ));
        }
        if self.prefix.is_empty() {
            return Err(ZipBatchError::Config(
                "archive prefix must not be empty".to_string(),
            ));
        }
        if self.prefix.contains(['/', '\\']) || self.prefix == "." || self.prefix == ".." {
            return Err(ZipBatchError::Config(format!(
                "archive prefix must be a plain file name, got {:?}",
                self.prefix
            )));
        }
        for (what, ext) in [
            ("source", &self.source_extension),
            ("archive", &self.archive_extension),
        ] {
            if normalize_extension(ext).is_empty() {
                return Err(ZipBatchError::Config(format!(
                    "{what} extension must not be empty"
                )));
            }
        }
        self.method.check_level(self.level)
    }
}

/// Strips a leading dot so `.txt` and `txt` mean the same filter.
pub fn normalize_extension(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_defaults() {
        let cfg = BatchConfig::legacy();
        assert_eq!(cfg.source_dir, PathBuf::from("input"));
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
        assert_eq!(cfg.prefix, "batch");
        assert_eq!(cfg.batch_size, 1000);
        assert!(!cfg.delete_sources);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn extended_deletes_by_default() {
        let cfg = BatchConfig::new("src", "out", "logs");
        assert!(cfg.delete_sources);
        assert_eq!(cfg.source_extension, "txt");
        assert_eq!(cfg.archive_extension, "zip");
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let cfg = BatchConfig {
            batch_size: 0,
            ..BatchConfig::legacy()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ZipBatchError::Config(_)));
    }

    #[test]
    fn prefix_must_be_a_file_name() {
        for bad in ["", "a/b", "..", "x\\y"] {
            let cfg = BatchConfig::new("src", "out", bad);
            assert!(cfg.validate().is_err(), "prefix {bad:?} accepted");
        }
    }

    #[test]
    fn extension_is_normalized() {
        assert_eq!(normalize_extension(".txt"), "txt");
        assert_eq!(normalize_extension("csv"), "csv");
        let cfg = BatchConfig {
            source_extension: ".".to_string(),
            ..BatchConfig::legacy()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn level_checked_against_method() {
        let cfg = BatchConfig {
            method: Method::Stored,
            level: Some(3),
            ..BatchConfig::legacy()
        };
        assert!(cfg.validate().is_err());
    }
}
