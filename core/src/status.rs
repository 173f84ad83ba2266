//! Summarizes branches, the staging index, and the working directory.

use std::collections::BTreeSet;
use std::fmt;

use crate::repo::{Repo, Result};

/// How a working file differs from what the next commit would record for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Change {
    Modified,
    Deleted,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Modified => write!(f, "modified"),
            Change::Deleted => write!(f, "deleted"),
        }
    }
}

/// Snapshot of repository state as reported by `status`. Every list is sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Status {
    pub current_branch: String,
    pub branches: Vec<String>,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub not_staged: Vec<(String, Change)>,
    pub untracked: Vec<String>,
}

/// Computes the status of `repo`.
pub fn status<R: Repo + ?Sized>(repo: &R) -> Result<Status> {
    let head = repo.head_commit()?;
    let index = repo.index()?;
    let work_files = repo.work_files()?;

    let mut not_staged = Vec::new();
    let mut untracked = Vec::new();

    let paths: BTreeSet<&String> = work_files
        .iter()
        .chain(index.staged().keys())
        .chain(head.files().keys())
        .collect();

    for path in paths {
        let work = repo.work_blob(path)?;
        let work_id = work.as_ref().map(|blob| *blob.id());

        if let Some(staged_id) = index.staged().get(path.as_str()) {
            match work_id {
                None => not_staged.push((path.clone(), Change::Deleted)),
                Some(id) if id != *staged_id => not_staged.push((path.clone(), Change::Modified)),
                Some(_) => (),
            }
        } else if index.is_removed(path) {
            // Recreated after `rm`; the repository no longer tracks it.
            if work_id.is_some() {
                untracked.push(path.clone());
            }
        } else if let Some(head_id) = head.blob_id(path) {
            match work_id {
                None => not_staged.push((path.clone(), Change::Deleted)),
                Some(id) if id != *head_id => not_staged.push((path.clone(), Change::Modified)),
                Some(_) => (),
            }
        } else if work_id.is_some() {
            untracked.push(path.clone());
        }
    }

    Ok(Status {
        current_branch: repo.current_branch()?,
        branches: repo.branches()?.into_iter().map(|(name, _)| name).collect(),
        staged: index.staged().keys().cloned().collect(),
        removed: index.removed().iter().cloned().collect(),
        not_staged,
        untracked,
    })
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            if *branch == self.current_branch {
                write!(f, "*")?;
            }
            writeln!(f, "{}", branch)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged {
            writeln!(f, "{}", path)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed {
            writeln!(f, "{}", path)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.not_staged {
            writeln!(f, "{} ({})", path, change)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked {
            writeln!(f, "{}", path)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::in_memory::InMemory;
    use crate::{branch, history, index};

    #[test]
    fn fresh_repo() {
        let r = InMemory::new();
        let s = status(&r).unwrap();
        assert_eq!(
            s.to_string(),
            "=== Branches ===\n*master\n\n\
             === Staged Files ===\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n\n"
        );
    }

    #[test]
    fn every_section() {
        let mut r = InMemory::new();
        for (path, content) in &[("tracked.txt", "t"), ("gone.txt", "g"), ("edited.txt", "e"), ("rm.txt", "r")] {
            r.write_work_file(path, content.as_bytes()).unwrap();
            index::add(&mut r, path).unwrap();
        }
        history::commit(&mut r, "four files").unwrap();
        branch::create(&mut r, "other-branch").unwrap();

        r.write_work_file("wug.txt", b"staged").unwrap();
        index::add(&mut r, "wug.txt").unwrap();
        r.write_work_file("wug.txt", b"changed after staging").unwrap();

        r.write_work_file("new.txt", b"staged").unwrap();
        index::add(&mut r, "new.txt").unwrap();

        index::remove(&mut r, "rm.txt").unwrap();
        r.remove_work_file("gone.txt").unwrap();
        r.write_work_file("edited.txt", b"changed").unwrap();
        r.write_work_file("random.stuff", b"?").unwrap();

        let s = status(&r).unwrap();
        assert_eq!(s.branches, vec!["master", "other-branch"]);
        assert_eq!(s.staged, vec!["new.txt", "wug.txt"]);
        assert_eq!(s.removed, vec!["rm.txt"]);
        assert_eq!(
            s.not_staged,
            vec![
                ("edited.txt".to_string(), Change::Modified),
                ("gone.txt".to_string(), Change::Deleted),
                ("wug.txt".to_string(), Change::Modified),
            ]
        );
        assert_eq!(s.untracked, vec!["random.stuff"]);

        assert_eq!(
            s.to_string(),
            "=== Branches ===\n*master\nother-branch\n\n\
             === Staged Files ===\nnew.txt\nwug.txt\n\n\
             === Removed Files ===\nrm.txt\n\n\
             === Modifications Not Staged For Commit ===\n\
             edited.txt (modified)\ngone.txt (deleted)\nwug.txt (modified)\n\n\
             === Untracked Files ===\nrandom.stuff\n\n"
        );
    }

    #[test]
    fn staged_then_deleted() {
        let mut r = InMemory::new();
        r.write_work_file("wug.txt", b"a").unwrap();
        index::add(&mut r, "wug.txt").unwrap();
        r.remove_work_file("wug.txt").unwrap();

        let s = status(&r).unwrap();
        assert_eq!(s.not_staged, vec![("wug.txt".to_string(), Change::Deleted)]);
    }

    #[test]
    fn removed_then_recreated_is_untracked() {
        let mut r = InMemory::new();
        r.write_work_file("wug.txt", b"a").unwrap();
        index::add(&mut r, "wug.txt").unwrap();
        history::commit(&mut r, "add wug").unwrap();

        index::remove(&mut r, "wug.txt").unwrap();
        r.write_work_file("wug.txt", b"a").unwrap();

        let s = status(&r).unwrap();
        assert_eq!(s.removed, vec!["wug.txt"]);
        assert_eq!(s.untracked, vec!["wug.txt"]);
        assert!(s.not_staged.is_empty());
    }
}
