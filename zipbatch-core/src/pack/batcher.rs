use crate::domain::{Batch, FileRef};
use crate::error::{Result, ZipBatchError};

/// Number of batches `total` files split into; zero for an empty input.
pub fn batch_count(total: usize, size: usize) -> usize {
    if size == 0 { 0 } else { total.div_ceil(size) }
}

/// Splits `files` into consecutive batches of `size`, the last one holding
/// the remainder. Order is preserved and indices start at 1.
pub fn partition(files: &[FileRef], size: usize) -> Result<Vec<Batch<'_>>> {
    if size == 0 {
        return Err(ZipBatchError::Config(
            "batch size must be at least 1".to_string(),
        ));
    }
    Ok(files
        .chunks(size)
        .enumerate()
        .map(|(i, files)| Batch {
            index: i + 1,
            files,
        })
        .collect())
}
