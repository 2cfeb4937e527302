use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

#[derive(Error, Debug)]
pub enum ZipBatchError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot list source directory {}", .path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write archive {}", .path.display())]
    WriteArchive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("cannot delete {}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl ZipBatchError {
    /// Underlying I/O error kind, when the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::SourceDir { source, .. }
            | Self::OutputDir { source, .. }
            | Self::ReadEntry { source, .. }
            | Self::Delete { source, .. }
            | Self::Io(source) => Some(source.kind()),
            Self::WriteArchive {
                source: ZipError::Io(e),
                ..
            } => Some(e.kind()),
            _ => None,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ZipBatchError>;
