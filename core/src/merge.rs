//! Three-way merge of another branch into the current one.
//!
//! Every path is classified independently by comparing the blob it has at the
//! split point, in HEAD, and in the other branch's tip. Conflicts are not
//! errors: the conflicting file is rewritten with both sides and staged, and
//! the merge commit is made anyway.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::object::{Blob, Id};
use crate::repo::{Error, Repo, Result};
use crate::{graph, history, index, worktree};

/// What a merge does to a single path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Leave the current version (or absence) as it is.
    Keep,

    /// Write the other branch's version and stage it.
    TakeTheirs,

    /// Stage the path for removal.
    Remove,

    /// Write both versions into the file and stage the result.
    Conflict,
}

/// Classifies one path given its blob at the split point, in HEAD, and in
/// the other branch. `None` means the path is absent there.
pub fn classify(split: Option<&Id>, cur: Option<&Id>, theirs: Option<&Id>) -> Action {
    if cur == theirs {
        Action::Keep
    } else if split == cur {
        match theirs {
            Some(_) => Action::TakeTheirs,
            None => Action::Remove,
        }
    } else if split == theirs {
        Action::Keep
    } else {
        Action::Conflict
    }
}

/// Builds the content written to a conflicting file. Absent sides render as
/// empty text.
pub fn conflict_content(head: Option<&[u8]>, theirs: Option<&[u8]>) -> Vec<u8> {
    let mut content = b"<<<<<<< HEAD\n".to_vec();
    content.extend_from_slice(head.unwrap_or_default());
    content.extend_from_slice(b"=======\n");
    content.extend_from_slice(theirs.unwrap_or_default());
    content.extend_from_slice(b">>>>>>>\n");
    content
}

/// How a successful merge ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MergeOutcome {
    /// The other branch is already contained in the current one.
    AlreadyAncestor,

    /// The current branch was behind and now points at the other branch's tip.
    FastForwarded,

    /// A merge commit was made.
    Merged { id: Id, conflicted: bool },
}

impl MergeOutcome {
    /// The line reported to the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MergeOutcome::AlreadyAncestor => Some("Given branch is an ancestor of the current branch."),
            MergeOutcome::FastForwarded => Some("Current branch fast-forwarded."),
            MergeOutcome::Merged { conflicted: true, .. } => Some("Encountered a merge conflict."),
            MergeOutcome::Merged { conflicted: false, .. } => None,
        }
    }
}

/// Merges branch `name` into the current branch.
pub fn merge<R: Repo + ?Sized>(repo: &mut R, name: &str) -> Result<MergeOutcome> {
    if !repo.index()?.is_empty() {
        return Err(Error::UncommittedChanges);
    }

    let theirs_id = repo.branch(name)?.ok_or(Error::BranchDoesntExist)?;
    let current = repo.current_branch()?;
    if current == name {
        return Err(Error::MergeWithSelf);
    }

    let head_id = repo.head()?;
    let head = repo.commit(&head_id)?;
    let theirs = repo.commit(&theirs_id)?;

    worktree::check_untracked(&head, theirs.files().keys(), &repo.work_files()?)?;

    let split_id = graph::split_point(repo, &head_id, &theirs_id)?.ok_or(Error::NoCommonAncestor)?;

    if split_id == theirs_id {
        return Ok(MergeOutcome::AlreadyAncestor);
    }

    if split_id == head_id {
        worktree::checkout_commit(repo, &theirs)?;
        repo.set_head(&theirs_id)?;
        repo.set_branch(&current, &theirs_id)?;
        debug!(branch = %current, to = %theirs_id, "fast-forwarded");
        return Ok(MergeOutcome::FastForwarded);
    }

    let split = repo.commit(&split_id)?;
    let paths: BTreeSet<&String> = split
        .files()
        .keys()
        .chain(head.files().keys())
        .chain(theirs.files().keys())
        .collect();

    let mut conflicted = false;

    for path in paths {
        let their_blob = theirs.blob_id(path);
        let action = classify(split.blob_id(path), head.blob_id(path), their_blob);
        trace!(path = %path, ?action, "classified");

        match action {
            Action::Keep => (),
            Action::TakeTheirs => {
                if let Some(blob_id) = their_blob {
                    let blob = repo.blob(blob_id)?;
                    repo.write_work_file(path, blob.content())?;
                    index::stage(repo, path, &blob)?;
                }
            }
            Action::Remove => {
                index::remove(repo, path)?;
            }
            Action::Conflict => {
                let ours = head.blob_id(path).map(|id| repo.blob(id)).transpose()?;
                let other = their_blob.map(|id| repo.blob(id)).transpose()?;
                let content = conflict_content(
                    ours.as_ref().map(Blob::content),
                    other.as_ref().map(Blob::content),
                );
                repo.write_work_file(path, &content)?;
                index::stage(repo, path, &Blob::new(content))?;
                conflicted = true;
            }
        }
    }

    let message = format!("Merged {} into {}.", name, current);
    let id = history::commit_with_parents(repo, &message, Some(&theirs_id))?;

    debug!(commit = %id, conflicted, "merged");
    Ok(MergeOutcome::Merged { id, conflicted })
}
