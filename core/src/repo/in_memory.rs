//! A repository that keeps everything in memory.
//!
//! Useful for tests and for exercising the porcelain without touching the
//! file system.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{Repo, Result, DEFAULT_BRANCH};
use crate::index::Index;
use crate::object::{Commit, Id, Kind, Object};

/// Implementation of `gitlet_core::repo::Repo` that stores content in memory.
#[derive(Clone, Debug)]
pub struct InMemory {
    objects: HashMap<(Kind, Id), Object>,
    head: Id,
    current_branch: String,
    branches: BTreeMap<String, Id>,
    index: Index,
    work: BTreeMap<String, Vec<u8>>,
}

impl InMemory {
    /// Creates a repository containing only the initial commit,
    /// with `master` checked out and an empty working directory.
    pub fn new() -> InMemory {
        let initial = Commit::initial().to_object();
        let head = *initial.id();

        let mut objects = HashMap::new();
        objects.insert((Kind::Commit, head), initial);

        let mut branches = BTreeMap::new();
        branches.insert(DEFAULT_BRANCH.to_string(), head);

        InMemory {
            objects,
            head,
            current_branch: DEFAULT_BRANCH.to_string(),
            branches,
            index: Index::default(),
            work: BTreeMap::new(),
        }
    }

    /// Number of objects of the given kind.
    pub fn object_count(&self, kind: Kind) -> usize {
        self.objects.keys().filter(|(k, _)| *k == kind).count()
    }
}

impl Default for InMemory {
    fn default() -> Self {
        InMemory::new()
    }
}

impl Repo for InMemory {
    fn put_object(&mut self, object: &Object) -> Result<()> {
        self.objects
            .entry((object.kind(), *object.id()))
            .or_insert_with(|| object.clone());
        Ok(())
    }

    fn get_object(&self, kind: Kind, id: &Id) -> Result<Option<Object>> {
        Ok(self.objects.get(&(kind, *id)).cloned())
    }

    fn find_objects(&self, kind: Kind, prefix: &str) -> Result<Vec<Id>> {
        let mut ids: Vec<Id> = self
            .objects
            .keys()
            .filter(|(k, id)| *k == kind && id.starts_with(prefix))
            .map(|(_, id)| *id)
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn head(&self) -> Result<Id> {
        Ok(self.head)
    }

    fn set_head(&mut self, id: &Id) -> Result<()> {
        self.head = *id;
        Ok(())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn set_current_branch(&mut self, name: &str) -> Result<()> {
        self.current_branch = name.to_string();
        Ok(())
    }

    fn branches(&self) -> Result<BTreeMap<String, Id>> {
        Ok(self.branches.clone())
    }

    fn set_branch(&mut self, name: &str, id: &Id) -> Result<()> {
        self.branches.insert(name.to_string(), *id);
        Ok(())
    }

    fn remove_branch(&mut self, name: &str) -> Result<()> {
        self.branches.remove(name);
        Ok(())
    }

    fn index(&self) -> Result<Index> {
        Ok(self.index.clone())
    }

    fn set_index(&mut self, index: &Index) -> Result<()> {
        self.index = index.clone();
        Ok(())
    }

    fn work_files(&self) -> Result<BTreeSet<String>> {
        Ok(self.work.keys().cloned().collect())
    }

    fn read_work_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.work.get(path).cloned())
    }

    fn write_work_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        self.work.insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn remove_work_file(&mut self, path: &str) -> Result<()> {
        self.work.remove(path);
        Ok(())
    }
}
