use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zip::CompressionMethod;

use crate::error::ZipBatchError;

/// Per-entry compression method.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Stored,
    #[default]
    Deflated,
    Zstd,
}

impl Method {
    pub fn zip_method(self) -> CompressionMethod {
        match self {
            Method::Stored => CompressionMethod::Stored,
            Method::Deflated => CompressionMethod::Deflated,
            Method::Zstd => CompressionMethod::Zstd,
        }
    }

    /// Levels the zip backends accept; `Stored` takes none.
    pub fn level_range(self) -> Option<(i64, i64)> {
        match self {
            Method::Stored => None,
            Method::Deflated => Some((1, 9)),
            Method::Zstd => Some((-7, 22)),
        }
    }

    pub fn check_level(self, level: Option<i64>) -> Result<(), ZipBatchError> {
        let Some(level) = level else {
            return Ok(());
        };
        match self.level_range() {
            None => Err(ZipBatchError::Config(format!(
                "{self} does not take a compression level"
            ))),
            Some((lo, hi)) if level < lo || level > hi => Err(ZipBatchError::Config(format!(
                "{self} level must be within {lo}..={hi}, got {level}"
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Stored => "stored",
            Method::Deflated => "deflated",
            Method::Zstd => "zstd",
        })
    }
}

impl FromStr for Method {
    type Err = ZipBatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stored" | "store" | "none" => Ok(Method::Stored),
            "deflated" | "deflate" => Ok(Method::Deflated),
            "zstd" | "zst" => Ok(Method::Zstd),
            other => Err(ZipBatchError::Config(format!(
                "unknown compression method: {other}"
            ))),
        }
    }
}
