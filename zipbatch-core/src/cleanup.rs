use std::fs;

use tracing::{debug, info};

use crate::domain::FileRef;
use crate::error::{Result, ZipBatchError};
use crate::progress::{Event, Observer};

/// Removes every file in `files`, in order. Stops at the first failure;
/// files already removed stay removed.
pub fn delete_sources(files: &[FileRef], observer: &mut dyn Observer) -> Result<usize> {
    observer.on_event(&Event::CleanupStarted { files: files.len() });

    for (n, f) in files.iter().enumerate() {
        fs::remove_file(&f.path).map_err(|source| {
            info!(deleted = n, remaining = files.len() - n, "cleanup aborted");
            ZipBatchError::Delete {
                path: f.path.clone(),
                source,
            }
        })?;
        debug!(path = %f.path.display(), "deleted source");
        observer.on_event(&Event::Deleted { path: &f.path });
    }

    info!(deleted = files.len(), "sources removed");
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> FileRef {
        let p = dir.join(name);
        fs::write(&p, name).unwrap();
        FileRef::from_path(&p).unwrap()
    }

    #[test]
    fn removes_all_files() {
        let dir = tempdir().unwrap();
        let files: Vec<_> = ["a.txt", "b.txt"].iter().map(|n| touch(dir.path(), n)).collect();
        fs::write(dir.path().join("keep.md"), "k").unwrap();

        assert_eq!(delete_sources(&files, &mut ()).unwrap(), 2);
        assert!(files.iter().all(|f| !f.path.exists()));
        assert!(dir.path().join("keep.md").exists());
    }

    #[test]
    fn empty_list_is_a_no_op() {
        assert_eq!(delete_sources(&[], &mut ()).unwrap(), 0);
    }

    #[test]
    fn failure_stops_sweep_without_rollback() {
        let dir = tempdir().unwrap();
        let a = touch(dir.path(), "a.txt");
        let gone = touch(dir.path(), "b.txt");
        let c = touch(dir.path(), "c.txt");
        fs::remove_file(&gone.path).unwrap();

        let err = delete_sources(&[a.clone(), gone, c.clone()], &mut ()).unwrap_err();
        assert!(matches!(err, ZipBatchError::Delete { .. }));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(!a.path.exists());
        assert!(c.path.exists());
    }
}
