//! Named pointers to other repositories, used by fetch, push, and pull.

use std::collections::BTreeMap;
use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use gitlet_core::names;
use gitlet_core::repo::{Error, Result};

use super::{refs, OnDiskRepo};

impl OnDiskRepo {
    fn remotes_dir(&self) -> PathBuf {
        self.gitlet_dir.join("remotes")
    }

    /// Record file for remote `name`, or `None` if `name` can't name a remote.
    fn remote_record(&self, name: &str) -> Option<PathBuf> {
        names::check_branch_name(name).ok()?;
        Some(self.remotes_dir().join(name))
    }

    /// All remote records, mapping name to the remote's `.gitlet` directory as written.
    pub fn remotes(&self) -> Result<BTreeMap<String, PathBuf>> {
        let mut remotes = BTreeMap::new();
        let dir = self.remotes_dir();
        if !dir.is_dir() {
            return Ok(remotes);
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                if !name.starts_with(".tmp") {
                    remotes.insert(name, PathBuf::from(refs::read_text(&entry.path())?));
                }
            }
        }
        Ok(remotes)
    }

    /// Records `path` (the remote's `.gitlet` directory, with `/` as separator)
    /// under `name`. The directory doesn't need to exist yet.
    pub fn add_remote(&self, name: &str, path: &str) -> Result<()> {
        let record = self.remote_record(name).ok_or(Error::InvalidRemoteName)?;
        if record.exists() {
            return Err(Error::RemoteExists);
        }

        let path: String = path
            .chars()
            .map(|c| if c == '/' { MAIN_SEPARATOR } else { c })
            .collect();
        refs::write_text(&record, &path)?;
        debug!(remote = name, path = %path, "added remote");
        Ok(())
    }

    pub fn remove_remote(&self, name: &str) -> Result<()> {
        let record = self.remote_record(name).ok_or(Error::RemoteDoesntExist)?;
        if !record.is_file() {
            return Err(Error::RemoteDoesntExist);
        }

        fs::remove_file(record)?;
        debug!(remote = name, "removed remote");
        Ok(())
    }

    /// Resolves remote `name` to its `.gitlet` directory. Relative paths are
    /// taken relative to this repository's working directory.
    ///
    /// Fails with `RemoteDirNotFound` if there is no such record or the
    /// directory doesn't exist.
    pub fn remote_dir(&self, name: &str) -> Result<PathBuf> {
        let record = self.remote_record(name).ok_or(Error::RemoteDirNotFound)?;
        if !record.is_file() {
            return Err(Error::RemoteDirNotFound);
        }

        let path = PathBuf::from(refs::read_text(&record)?);
        let path = if path.is_absolute() {
            path
        } else {
            self.work_dir.join(path)
        };

        if path.is_dir() {
            Ok(path)
        } else {
            Err(Error::RemoteDirNotFound)
        }
    }

    /// Opens the repository that remote `name` points to.
    pub fn open_remote(&self, name: &str) -> Result<OnDiskRepo> {
        let dir = self.remote_dir(name)?;
        match OnDiskRepo::from_gitlet_dir(&dir) {
            Err(Error::GitletDirDoesntExist(_)) => Err(Error::RemoteDirNotFound),
            result => result,
        }
    }
}
