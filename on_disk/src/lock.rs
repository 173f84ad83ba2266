//! Whole-repository exclusive lock held for the duration of a command.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use gitlet_core::repo::{Error, Result};

/// An exclusive OS-level lock on `.gitlet/lock`.
///
/// Acquisition never blocks: if another process holds the lock, `acquire`
/// fails with `Error::Locked`. The lock is released when this guard is dropped.
#[derive(Debug)]
pub struct RepoLock {
    path: PathBuf,
    file: Option<File>,
}

impl RepoLock {
    /// Takes the lock for the repository whose metadata lives in `gitlet_dir`.
    pub fn acquire(gitlet_dir: &Path) -> Result<RepoLock> {
        let path = gitlet_dir.join("lock");

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!(path = %path.display(), "acquired repository lock");
                Ok(RepoLock {
                    path,
                    file: Some(file),
                })
            }
            Err(e) if is_contended(&e) => Err(Error::Locked),
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Releases the lock before the guard goes out of scope.
    pub fn release(&mut self) -> Result<()> {
        if let Some(file) = self.file.take() {
            file.unlock()?;
        }
        Ok(())
    }
}

impl Drop for RepoLock {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.unlock();
        }
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
