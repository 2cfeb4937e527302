use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::normalize_extension;
use crate::domain::FileRef;
use crate::error::{Result, ZipBatchError};

/// Lists regular files directly inside `dir` whose name ends in `.{ext}`,
/// sorted by file name. Subdirectories and symlinks are skipped.
///
/// Matching is on the name suffix, like a `*.txt` glob, so a file named
/// just `.txt` is included.
pub fn enumerate(dir: &Path, ext: &str) -> Result<Vec<FileRef>> {
    let source_err = |source: io::Error| ZipBatchError::SourceDir {
        path: dir.to_path_buf(),
        source,
    };

    let meta = fs::metadata(dir).map_err(source_err)?;
    if !meta.is_dir() {
        return Err(source_err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    let ext = normalize_extension(ext);
    let suffix = format!(".{ext}");
    let mut files = Vec::new();
    for e in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let e = e.map_err(|e| source_err(e.into()))?;
        if !e.file_type().is_file() {
            continue;
        }
        if !e.file_name().as_encoded_bytes().ends_with(suffix.as_bytes()) {
            continue;
        }
        if let Some(f) = FileRef::from_path(e.path()) {
            files.push(f);
        }
    }

    debug!(dir = %dir.display(), ext, count = files.len(), "enumerated source files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn picks_matching_files_in_name_order() {
        let dir = tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt", "notes.md", "archive.txt.bak"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("nested.txt").join("deep.txt"), "x").unwrap();

        let files = enumerate(dir.path(), "txt").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
        assert!(files.iter().all(|f| f.path.parent() == Some(dir.path())));
    }

    #[test]
    fn leading_dot_in_filter_is_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.csv"), "1").unwrap();
        fs::write(dir.path().join("two.txt"), "2").unwrap();

        let files = enumerate(dir.path(), ".csv").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "one.csv");
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("upper.TXT"), "u").unwrap();
        assert!(enumerate(dir.path(), "txt").unwrap().is_empty());
    }

    #[test]
    fn bare_extension_name_matches() {
        let dir = tempdir().unwrap();
        for name in [".txt", "a.b.txt", "txt", "plain"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let files = enumerate(dir.path(), "txt").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, [".txt", "a.b.txt"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(enumerate(dir.path(), "txt").unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = enumerate(&dir.path().join("absent"), "txt").unwrap_err();
        assert!(matches!(err, ZipBatchError::SourceDir { .. }));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn file_instead_of_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = enumerate(&file, "txt").unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotADirectory));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();

        let files = enumerate(dir.path(), "txt").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "real.txt");
    }
}
