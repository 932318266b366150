//! File-based storage implementations.
//!
//! The log collection is stored as a single pretty-printed JSON document.
//! All writes use atomic operations (temp file + fsync + rename) so a reader
//! sees either the previous or the new document, never a partial one.

use std::path::Path;

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::store::error::{StorageError, StorageResult};

mod logs;

pub use logs::FileLogStore;

/// Write `contents` to `tmp_path`, fsync it, then rename it over `path`.
///
/// The parent directory of `path` is created if needed. On failure the temp
/// file is removed and `path` is left untouched.
pub(crate) async fn atomic_write_file(
    tmp_path: &Path,
    path: &Path,
    contents: &[u8],
) -> StorageResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::file_io(parent, e))?;
    }

    if let Err(e) = write_and_sync(tmp_path, contents).await {
        let _ = fs::remove_file(tmp_path).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(tmp_path, path).await {
        let _ = fs::remove_file(tmp_path).await;
        return Err(StorageError::file_io(path, e));
    }

    sync_parent_dir(path).await;
    Ok(())
}

async fn write_and_sync(tmp_path: &Path, contents: &[u8]) -> StorageResult<()> {
    let mut file = File::create(tmp_path)
        .await
        .map_err(|e| StorageError::file_io(tmp_path, e))?;
    file.write_all(contents)
        .await
        .map_err(|e| StorageError::file_io(tmp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| StorageError::file_io(tmp_path, e))?;
    Ok(())
}

/// Persist the rename itself. Failure here only weakens durability, not atomicity.
#[cfg(unix)]
async fn sync_parent_dir(path: &Path) {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match File::open(parent).await {
        Ok(dir) => {
            if let Err(e) = dir.sync_all().await {
                tracing::debug!(path = %parent.display(), error = %e, "Failed to sync directory");
            }
        }
        Err(e) => {
            tracing::debug!(path = %parent.display(), error = %e, "Failed to open directory for sync");
        }
    }
}

#[cfg(not(unix))]
async fn sync_parent_dir(_path: &Path) {}
