//! Locked atomic file writes.
//!
//! # Implementation Strategy
//!
//! 1. Open (creating if needed) a sidecar lock file `.{filename}.lock` next to
//!    the target and take an exclusive advisory lock on it with `fs4`
//! 2. Write content to a temporary file in the same directory and fsync it
//! 3. Atomically rename the temporary file over the target
//! 4. Release the lock
//!
//! The lock file is never renamed or removed, so every writer of the same
//! target contends on the same inode. The temporary file is only touched
//! while the lock is held.
//!
//! # Important Notes
//!
//! - Source and destination must be on the same filesystem for atomic rename
//! - On crash, a temporary file may remain (named `.{filename}.tmp`)
//! - The lock file stays in place after the write

use crate::error::{EnvError, Result};
use fs4::fs_std::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive lock on a target's sidecar lock file, released on drop.
struct WriteLock {
    file: File,
    path: PathBuf,
}

impl WriteLock {
    /// Block until the exclusive lock for `target` is held.
    fn acquire(target: &Path) -> Result<Self> {
        let path = sidecar_path(target, "lock")?;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                EnvError::WriteError(format!(
                    "failed to open lock file '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        FileExt::lock_exclusive(&file).map_err(|e| {
            EnvError::WriteError(format!("failed to lock '{}': {}", target.display(), e))
        })?;

        tracing::debug!(lock = %path.display(), "acquired exclusive lock");
        Ok(Self { file, path })
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to release lock");
        }
    }
}

/// Atomically write bytes to a file while holding its exclusive write lock.
///
/// # Returns
///
/// * `Ok(())` - On successful write
/// * `Err(EnvError::WriteError)` - On lock, write, sync or rename failure
pub fn locked_atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            EnvError::WriteError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let _lock = WriteLock::acquire(path)?;

    let temp_path = sidecar_path(path, "tmp")?;
    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)
}

/// Path of a hidden `.{filename}.{extension}` file next to the target.
fn sidecar_path(target: &Path, extension: &str) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EnvError::WriteError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.{}", filename, extension)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        EnvError::WriteError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        EnvError::WriteError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        EnvError::WriteError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Replace the target with the temporary file.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        EnvError::WriteError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    #[cfg(unix)]
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}
