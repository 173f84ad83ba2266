use std::path::Path;

use gitlet_core::repo::Result;
use gitlet_on_disk::{OnDiskRepo, RepoLock};

// Opens the gitlet repository whose working directory is `path`.
//
// Only `path` itself is considered; a `.gitlet` directory in an
// enclosing directory does not count.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::new(path.as_ref())
}

// Opens the repository at `path` and takes its lock. The lock is
// released when the returned `RepoLock` is dropped.
pub fn open_locked<P: AsRef<Path>>(path: P) -> Result<(OnDiskRepo, RepoLock)> {
    let repo = from_path(path)?;
    let lock = repo.lock()?;
    Ok((repo, lock))
}
