//! A repository that stores content on the local file system.
//!
//! Everything lives under `<work_dir>/.gitlet/`:
//!
//! ```text
//! .gitlet/
//!   config                     TOML, see `Config`
//!   lock                       held while a command runs, see `RepoLock`
//!   HEAD                       hex ID of the checked-out commit
//!   CURRENT_BRANCH             name of the branch HEAD follows
//!   objects/blobs/<xx>/<38>    zlib-compressed objects, sharded by ID
//!   objects/commits/<xx>/<38>
//!   refs/branches/<name>       hex ID; remote-tracking branches nest as <remote>/<branch>
//!   staging/<sha1(path)>       "<blob id> <path>" for each staged addition
//!   removal/<path>             marker for each staged removal
//!   remotes/<name>             path of another repository's .gitlet directory
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use gitlet_core::index::Index;
use gitlet_core::names;
use gitlet_core::object::{Commit, Id, Kind, Object};
use gitlet_core::repo::{Error, Repo, Result};

use crate::{Config, RepoLock};

mod objects;
mod refs;
mod remotes;
mod staging;

pub use gitlet_core::repo::GITLET_DIR;

/// Implementation of `gitlet_core::repo::Repo` that stores content on the local file system.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    gitlet_dir: PathBuf,
    config: Config,
}

impl OnDiskRepo {
    /// Opens an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.gitlet` directory should
    /// exist at this path. Use `init` to create an empty on-disk repository if
    /// necessary.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let gitlet_dir = work_dir.join(GITLET_DIR);
        if !gitlet_dir.is_dir() {
            return Err(Error::GitletDirDoesntExist(gitlet_dir));
        }

        let config = Config::load(&gitlet_dir)?;
        Ok(OnDiskRepo {
            work_dir,
            gitlet_dir,
            config,
        })
    }

    /// Opens the repository whose metadata directory is `gitlet_dir`.
    /// Its working directory is the parent of `gitlet_dir`.
    pub fn from_gitlet_dir(gitlet_dir: &Path) -> Result<Self> {
        if !gitlet_dir.is_dir() {
            return Err(Error::GitletDirDoesntExist(gitlet_dir.to_path_buf()));
        }

        let work_dir = match gitlet_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let config = Config::load(gitlet_dir)?;
        Ok(OnDiskRepo {
            work_dir,
            gitlet_dir: gitlet_dir.to_path_buf(),
            config,
        })
    }

    /// Creates a new repository in `work_dir` with the default configuration.
    ///
    /// The new repository holds only the initial commit, with the default
    /// branch checked out.
    pub fn init(work_dir: &Path) -> Result<Self> {
        OnDiskRepo::init_with_config(work_dir, Config::default())
    }

    /// Creates a new repository in `work_dir` and records `config` as its configuration.
    pub fn init_with_config(work_dir: &Path, config: Config) -> Result<Self> {
        let gitlet_dir = work_dir.join(GITLET_DIR);
        if gitlet_dir.exists() {
            return Err(Error::GitletDirShouldntExist(gitlet_dir));
        }

        for dir in &["objects/blobs", "objects/commits", "refs/branches", "staging", "removal", "remotes"] {
            fs::create_dir_all(gitlet_dir.join(dir))?;
        }
        config.save(&gitlet_dir)?;

        let mut repo = OnDiskRepo {
            work_dir: work_dir.to_path_buf(),
            gitlet_dir,
            config,
        };

        let initial = repo.put_commit(&Commit::initial())?;
        let branch = repo.config.init.default_branch.clone();
        repo.set_branch(&branch, &initial)?;
        repo.set_current_branch(&branch)?;
        repo.set_head(&initial)?;

        debug!(work_dir = %repo.work_dir.display(), branch = %branch, "initialized repository");
        Ok(repo)
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.gitlet` directory.
    pub fn gitlet_dir(&self) -> &Path {
        self.gitlet_dir.as_path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Takes this repository's exclusive lock. See `RepoLock`.
    pub fn lock(&self) -> Result<RepoLock> {
        RepoLock::acquire(&self.gitlet_dir)
    }

    fn head_path(&self) -> PathBuf {
        self.gitlet_dir.join("HEAD")
    }

    fn current_branch_path(&self) -> PathBuf {
        self.gitlet_dir.join("CURRENT_BRANCH")
    }

    fn branches_dir(&self) -> PathBuf {
        self.gitlet_dir.join("refs/branches")
    }

    /// Reference file for branch `name`, or `None` if `name` can't name a branch.
    fn branch_path(&self, name: &str) -> Option<PathBuf> {
        names::check_ref_name(name).ok()?;
        Some(self.branches_dir().join(name))
    }

    /// Path of working file `name`, or `None` if `name` isn't a plain file
    /// directly inside the working directory.
    fn work_path(&self, name: &str) -> Option<PathBuf> {
        names::check_file_name(name).ok()?;
        Some(self.work_dir.join(name))
    }
}

impl Repo for OnDiskRepo {
    fn put_object(&mut self, object: &Object) -> Result<()> {
        objects::put(&self.gitlet_dir, self.config.core.compression, object)
    }

    fn get_object(&self, kind: Kind, id: &Id) -> Result<Option<Object>> {
        objects::get(&self.gitlet_dir, kind, id)
    }

    fn find_objects(&self, kind: Kind, prefix: &str) -> Result<Vec<Id>> {
        objects::find(&self.gitlet_dir, kind, prefix)
    }

    fn head(&self) -> Result<Id> {
        refs::read_id(&self.head_path())
    }

    fn set_head(&mut self, id: &Id) -> Result<()> {
        refs::write_text(&self.head_path(), &id.to_string())
    }

    fn current_branch(&self) -> Result<String> {
        refs::read_text(&self.current_branch_path())
    }

    fn set_current_branch(&mut self, name: &str) -> Result<()> {
        if self.branch_path(name).is_none() {
            return Err(Error::InvalidBranchName);
        }
        refs::write_text(&self.current_branch_path(), name)
    }

    fn branches(&self) -> Result<BTreeMap<String, Id>> {
        refs::list(&self.branches_dir())
    }

    fn branch(&self, name: &str) -> Result<Option<Id>> {
        match self.branch_path(name) {
            Some(path) if path.is_file() => refs::read_id(&path).map(Some),
            _ => Ok(None),
        }
    }

    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()> {
        let path = self.branch_path(name).ok_or(Error::InvalidBranchName)?;
        refs::write_text(&path, &id.to_string())
    }

    fn remove_branch(&mut self, name: &str) -> Result<()> {
        let path = self.branch_path(name).ok_or(Error::InvalidBranchName)?;
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn index(&self) -> Result<Index> {
        staging::read(&self.gitlet_dir)
    }

    fn set_index(&mut self, index: &Index) -> Result<()> {
        staging::write(&self.gitlet_dir, index)
    }

    fn work_files(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.work_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => {
                    names.insert(name);
                }
                Err(name) => warn!(name = ?name, "skipping working file with non-UTF-8 name"),
            }
        }
        Ok(names)
    }

    fn read_work_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        match self.work_path(path) {
            Some(path) if path.is_file() => Ok(Some(fs::read(path)?)),
            _ => Ok(None),
        }
    }

    fn write_work_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let full_path = self
            .work_path(path)
            .ok_or_else(|| Error::InvalidFileName(path.to_string()))?;
        fs::write(full_path, content)?;
        Ok(())
    }

    fn remove_work_file(&mut self, path: &str) -> Result<()> {
        let path = self
            .work_path(path)
            .ok_or_else(|| Error::InvalidFileName(path.to_string()))?;
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
