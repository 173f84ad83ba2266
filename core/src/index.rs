//! The staging index: pending additions and removals consumed by the next commit.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::names;
use crate::object::{Blob, Id};
use crate::repo::{Error, Repo, Result};

/// Two disjoint, path-keyed sets of pending changes.
///
/// A path is never both staged for addition and marked for removal;
/// every mutator keeps the two sets disjoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Index {
    to_add: BTreeMap<String, Id>,
    to_remove: BTreeSet<String>,
}

impl Index {
    pub fn new() -> Index {
        Index::default()
    }

    /// Paths staged for addition, with the blob each should record.
    pub fn staged(&self) -> &BTreeMap<String, Id> {
        &self.to_add
    }

    /// Paths marked for removal.
    pub fn removed(&self) -> &BTreeSet<String> {
        &self.to_remove
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    pub fn is_staged(&self, path: &str) -> bool {
        self.to_add.contains_key(path)
    }

    pub fn is_removed(&self, path: &str) -> bool {
        self.to_remove.contains(path)
    }

    /// Records that the next commit should store `id` for `path`.
    pub fn stage(&mut self, path: &str, id: &Id) {
        self.to_remove.remove(path);
        self.to_add.insert(path.to_string(), *id);
    }

    /// Records that the next commit should stop tracking `path`.
    pub fn mark_removed(&mut self, path: &str) {
        self.to_add.remove(path);
        self.to_remove.insert(path.to_string());
    }

    /// Drops any pending addition for `path`, returning the staged blob ID.
    pub fn unstage(&mut self, path: &str) -> Option<Id> {
        self.to_add.remove(path)
    }

    /// Drops any pending removal for `path`. Returns true if there was one.
    pub fn unmark_removed(&mut self, path: &str) -> bool {
        self.to_remove.remove(path)
    }

    /// Drops every pending change for `path`.
    pub fn forget(&mut self, path: &str) {
        self.unstage(path);
        self.unmark_removed(path);
    }

    /// Applies every pending change to `files`, then empties the index.
    pub fn drain_into(&mut self, files: &mut BTreeMap<String, Id>) {
        for (path, id) in std::mem::take(&mut self.to_add) {
            files.insert(path, id);
        }
        for path in std::mem::take(&mut self.to_remove) {
            files.remove(&path);
        }
    }
}

/// Stages `blob` as the new content of `path`.
///
/// If the content is identical to what HEAD records for `path`, nothing is
/// staged and any pending change for `path` is dropped instead.
pub fn stage<R: Repo + ?Sized>(repo: &mut R, path: &str, blob: &Blob) -> Result<()> {
    let head = repo.head_commit()?;
    let mut index = repo.index()?;

    if head.blob_id(path) == Some(blob.id()) {
        debug!(path, "content matches HEAD; unstaging");
        index.forget(path);
    } else {
        repo.put_blob(blob)?;
        debug!(path, blob = %blob.id(), "staged");
        index.stage(path, blob.id());
    }

    repo.set_index(&index)
}

/// Stages the current content of the working file `path`.
///
/// Only plain files directly inside the working directory can be staged.
pub fn add<R: Repo + ?Sized>(repo: &mut R, path: &str) -> Result<()> {
    if names::check_file_name(path).is_err() {
        return Err(Error::FileDoesntExist);
    }
    let blob = repo.work_blob(path)?.ok_or(Error::FileDoesntExist)?;
    stage(repo, path, &blob)
}

/// Unstages `path` and, if HEAD tracks it, marks it for removal and deletes
/// the working file.
///
/// Fails if `path` is neither staged nor tracked by HEAD.
pub fn remove<R: Repo + ?Sized>(repo: &mut R, path: &str) -> Result<()> {
    // No commit or index can hold such a path.
    if names::check_file_name(path).is_err() {
        return Err(Error::NothingToRemove);
    }

    let head = repo.head_commit()?;
    let mut index = repo.index()?;

    let was_staged = index.unstage(path).is_some();

    if head.tracks(path) {
        index.mark_removed(path);
        repo.remove_work_file(path)?;
        debug!(path, "marked for removal");
    } else if !was_staged {
        return Err(Error::NothingToRemove);
    }

    repo.set_index(&index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history;
    use crate::repo::in_memory::InMemory;

    fn repo_with_committed_file(path: &str, content: &[u8]) -> InMemory {
        let mut r = InMemory::new();
        r.write_work_file(path, content).unwrap();
        add(&mut r, path).unwrap();
        history::commit(&mut r, "add file").unwrap();
        r
    }

    #[test]
    fn sets_stay_disjoint() {
        let mut index = Index::new();
        let id = *Blob::new(b"a".to_vec()).id();

        index.stage("a.txt", &id);
        index.mark_removed("a.txt");
        assert!(!index.is_staged("a.txt"));
        assert!(index.is_removed("a.txt"));

        index.stage("a.txt", &id);
        assert!(index.is_staged("a.txt"));
        assert!(!index.is_removed("a.txt"));
    }

    #[test]
    fn drain_into_applies_and_clears() {
        let a = *Blob::new(b"a".to_vec()).id();
        let b = *Blob::new(b"b".to_vec()).id();

        let mut files = BTreeMap::new();
        files.insert("keep.txt".to_string(), a);
        files.insert("gone.txt".to_string(), a);
        files.insert("change.txt".to_string(), a);

        let mut index = Index::new();
        index.stage("change.txt", &b);
        index.stage("new.txt", &b);
        index.mark_removed("gone.txt");

        index.drain_into(&mut files);

        assert!(index.is_empty());
        assert_eq!(files.get("keep.txt"), Some(&a));
        assert_eq!(files.get("change.txt"), Some(&b));
        assert_eq!(files.get("new.txt"), Some(&b));
        assert_eq!(files.get("gone.txt"), None);
    }

    #[test]
    fn add_stages_new_file() {
        let mut r = InMemory::new();
        r.write_work_file("wug.txt", b"a").unwrap();
        add(&mut r, "wug.txt").unwrap();

        let index = r.index().unwrap();
        let id = *Blob::new(b"a".to_vec()).id();
        assert_eq!(index.staged().get("wug.txt"), Some(&id));
        assert!(r.get_blob(&id).unwrap().is_some());
    }

    #[test]
    fn add_missing_file() {
        let mut r = InMemory::new();
        match add(&mut r, "nope.txt").unwrap_err() {
            Error::FileDoesntExist => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
    }

    #[test]
    fn add_rejects_paths_outside_the_working_directory() {
        let mut r = InMemory::new();
        for path in &["sub/f.txt", ".gitlet/CURRENT_BRANCH", "../up.txt", ".gitlet", ""] {
            r.write_work_file(path, b"a").unwrap();
            match add(&mut r, path).unwrap_err() {
                Error::FileDoesntExist => (),
                err => panic!("Unexpected error response for {:?}: {:?}", path, err),
            }
        }
        assert!(r.index().unwrap().is_empty());
    }

    #[test]
    fn add_identical_to_head_unstages() {
        let mut r = repo_with_committed_file("wug.txt", b"a");

        r.write_work_file("wug.txt", b"b").unwrap();
        add(&mut r, "wug.txt").unwrap();
        assert!(r.index().unwrap().is_staged("wug.txt"));

        r.write_work_file("wug.txt", b"a").unwrap();
        add(&mut r, "wug.txt").unwrap();
        assert!(r.index().unwrap().is_empty());
    }

    #[test]
    fn add_clears_pending_removal() {
        let mut r = repo_with_committed_file("wug.txt", b"a");

        remove(&mut r, "wug.txt").unwrap();
        assert!(r.index().unwrap().is_removed("wug.txt"));

        r.write_work_file("wug.txt", b"a").unwrap();
        add(&mut r, "wug.txt").unwrap();
        assert!(r.index().unwrap().is_empty());
    }

    #[test]
    fn remove_untracked_staged_file_leaves_it_untracked() {
        let mut r = InMemory::new();
        r.write_work_file("wug.txt", b"a").unwrap();
        add(&mut r, "wug.txt").unwrap();

        remove(&mut r, "wug.txt").unwrap();

        let index = r.index().unwrap();
        assert!(index.is_empty());
        // Untracked files stay in the working directory.
        assert_eq!(r.read_work_file("wug.txt").unwrap(), Some(b"a".to_vec()));
    }

    #[test]
    fn remove_tracked_file_marks_for_removal() {
        let mut r = repo_with_committed_file("wug.txt", b"a");

        r.write_work_file("wug.txt", b"b").unwrap();
        add(&mut r, "wug.txt").unwrap();
        remove(&mut r, "wug.txt").unwrap();

        let index = r.index().unwrap();
        assert!(!index.is_staged("wug.txt"));
        assert!(index.is_removed("wug.txt"));
        assert_eq!(r.read_work_file("wug.txt").unwrap(), None);
    }

    #[test]
    fn remove_nested_path() {
        let mut r = InMemory::new();
        r.write_work_file("sub/f.txt", b"a").unwrap();
        match remove(&mut r, "sub/f.txt").unwrap_err() {
            Error::NothingToRemove => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
        assert!(r.read_work_file("sub/f.txt").unwrap().is_some());
    }

    #[test]
    fn remove_without_reason() {
        let mut r = InMemory::new();
        r.write_work_file("wug.txt", b"a").unwrap();
        match remove(&mut r, "wug.txt").unwrap_err() {
            Error::NothingToRemove => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
        assert!(r.read_work_file("wug.txt").unwrap().is_some());
    }
}
