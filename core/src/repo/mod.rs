//! Represents an abstract gitlet repository.
//!
//! ## Design Goals
//!
//! Gitlet intends to allow repositories to be stored in multiple different mechanisms.
//! The `gitlet_on_disk` crate provides local on-disk repositories; this module
//! provides an in-memory one (see `gitlet_core::repo::in_memory`). Because every
//! porcelain operation is written against the `Repo` trait rather than a global
//! notion of "the current repository", operations that span two repositories
//! (push, fetch) simply take two `Repo` values.

use std::collections::{BTreeMap, BTreeSet};

use crate::index::Index;
use crate::object::{check_prefix, Blob, Commit, Id, Kind, Object};

mod error;
pub use error::{Error, Result};

pub mod in_memory;

/// Name of the metadata directory inside a working directory.
pub const GITLET_DIR: &str = ".gitlet";

/// Default name of the first branch.
pub const DEFAULT_BRANCH: &str = "master";

/// Minimum number of hex digits accepted as an abbreviated commit ID.
pub const MIN_PREFIX_LEN: usize = 4;

/// Outcome of looking up an object by an abbreviated ID.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Found(Id),
    NotFound,
    Ambiguous(Vec<Id>),
}

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing a gitlet repo.
///
/// The required methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture: object storage,
/// references, the staging index, and the working directory.
///
/// The provided methods on this trait are typed conveniences layered on top of
/// those primitives. The porcelain operations (commit, merge, checkout, ...) live
/// in the other modules of this crate and accept any `Repo`.
pub trait Repo {
    /// Stores an object. Storing an object that already exists is a no-op.
    fn put_object(&mut self, object: &Object) -> Result<()>;

    /// Reads an object by its full ID. Returns `None` if no such object exists.
    fn get_object(&self, kind: Kind, id: &Id) -> Result<Option<Object>>;

    /// Lists the IDs of all stored objects of the given kind whose hex form
    /// starts with `prefix`. An empty prefix lists every object of that kind.
    fn find_objects(&self, kind: Kind, prefix: &str) -> Result<Vec<Id>>;

    /// ID of the commit currently checked out.
    fn head(&self) -> Result<Id>;

    fn set_head(&mut self, id: &Id) -> Result<()>;

    /// Name of the branch HEAD is attached to.
    fn current_branch(&self) -> Result<String>;

    fn set_current_branch(&mut self, name: &str) -> Result<()>;

    /// All branches, including remote-tracking branches named `remote/branch`.
    fn branches(&self) -> Result<BTreeMap<String, Id>>;

    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()>;

    fn remove_branch(&mut self, name: &str) -> Result<()>;

    /// Reads the staging index.
    fn index(&self) -> Result<Index>;

    /// Replaces the staging index.
    fn set_index(&mut self, index: &Index) -> Result<()>;

    /// Names of the plain files directly inside the working directory.
    ///
    /// Working file names are single path segments; see `names::check_file_name`.
    fn work_files(&self) -> Result<BTreeSet<String>>;

    /// Reads a working file. Returns `None` if it doesn't exist.
    fn read_work_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    fn write_work_file(&mut self, path: &str, content: &[u8]) -> Result<()>;

    /// Deletes a working file. Deleting a file that doesn't exist is a no-op.
    fn remove_work_file(&mut self, path: &str) -> Result<()>;

    fn branch(&self, name: &str) -> Result<Option<Id>> {
        Ok(self.branches()?.remove(name))
    }

    fn put_blob(&mut self, blob: &Blob) -> Result<()> {
        self.put_object(blob.as_object())
    }

    fn get_blob(&self, id: &Id) -> Result<Option<Blob>> {
        Ok(self.get_object(Kind::Blob, id)?.and_then(Blob::from_object))
    }

    /// Reads a blob that some commit refers to; a missing blob means the store is damaged.
    fn blob(&self, id: &Id) -> Result<Blob> {
        self.get_blob(id)?
            .ok_or_else(|| Error::CorruptObject(format!("missing blob {}", id)))
    }

    /// Stores a commit and returns its ID.
    fn put_commit(&mut self, commit: &Commit) -> Result<Id> {
        let object = commit.to_object();
        self.put_object(&object)?;
        Ok(*object.id())
    }

    fn get_commit(&self, id: &Id) -> Result<Option<Commit>> {
        match self.get_object(Kind::Commit, id)? {
            Some(object) => Commit::from_object(&object)
                .map(Some)
                .ok_or_else(|| Error::CorruptObject(id.to_string())),
            None => Ok(None),
        }
    }

    /// Reads a commit that is known to exist (a parent, HEAD, a branch tip).
    fn commit(&self, id: &Id) -> Result<Commit> {
        self.get_commit(id)?
            .ok_or_else(|| Error::CorruptObject(format!("missing commit {}", id)))
    }

    fn head_commit(&self) -> Result<Commit> {
        let head = self.head()?;
        self.commit(&head)
    }

    /// Resolves a full or abbreviated commit ID.
    fn lookup_commit(&self, abbrev: &str) -> Result<Lookup> {
        if abbrev.len() < MIN_PREFIX_LEN || check_prefix(abbrev).is_err() {
            return Ok(Lookup::NotFound);
        }

        let mut ids = self.find_objects(Kind::Commit, abbrev)?;
        Ok(match ids.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(ids.remove(0)),
            _ => Lookup::Ambiguous(ids),
        })
    }

    /// Resolves a full or abbreviated commit ID to a commit, reporting
    /// unknown and ambiguous IDs as errors.
    fn resolve_commit(&self, abbrev: &str) -> Result<(Id, Commit)> {
        match self.lookup_commit(abbrev)? {
            Lookup::Found(id) => Ok((id, self.commit(&id)?)),
            Lookup::NotFound => Err(Error::NoSuchCommit),
            Lookup::Ambiguous(_) => Err(Error::AmbiguousCommit),
        }
    }

    /// Snapshot of a working file, or `None` if it doesn't exist.
    fn work_blob(&self, path: &str) -> Result<Option<Blob>> {
        Ok(self.read_work_file(path)?.map(Blob::new))
    }
}
