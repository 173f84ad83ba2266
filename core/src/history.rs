//! Creating commits and reading history back (log, global-log, find).

use std::fmt::Write;

use tracing::debug;

use crate::object::{Commit, Id, Kind};
use crate::repo::{Error, Repo, Result};

/// Records the staged changes as a new commit on the current branch.
///
/// Returns the ID of the new commit.
pub fn commit<R: Repo + ?Sized>(repo: &mut R, message: &str) -> Result<Id> {
    commit_with_parents(repo, message, None)
}

/// Like `commit`, but records `second_parent` as well (merges).
pub fn commit_with_parents<R: Repo + ?Sized>(
    repo: &mut R,
    message: &str,
    second_parent: Option<&Id>,
) -> Result<Id> {
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let mut index = repo.index()?;
    if index.is_empty() {
        return Err(Error::NothingToCommit);
    }

    let head_id = repo.head()?;
    let head = repo.commit(&head_id)?;

    let mut commit = Commit::child_of(&head_id, &head, message);
    index.drain_into(commit.files_mut());
    if let Some(second_parent) = second_parent {
        commit.set_second_parent(second_parent);
    }

    // The commit object goes in before anything points at it.
    let id = repo.put_commit(&commit)?;
    let branch = repo.current_branch()?;
    repo.set_head(&id)?;
    repo.set_branch(&branch, &id)?;
    repo.set_index(&index)?;

    debug!(commit = %id, branch = %branch, "committed");
    Ok(id)
}

/// The current branch's history: HEAD, then first parents back to the initial commit.
pub fn log<R: Repo + ?Sized>(repo: &R) -> Result<Vec<(Id, Commit)>> {
    let mut entries = Vec::new();
    let mut next = Some(repo.head()?);

    while let Some(id) = next {
        let commit = repo.commit(&id)?;
        next = commit.first_parent().copied();
        entries.push((id, commit));
    }

    Ok(entries)
}

/// Every commit ever stored, in store order.
pub fn global_log<R: Repo + ?Sized>(repo: &R) -> Result<Vec<(Id, Commit)>> {
    repo.find_objects(Kind::Commit, "")?
        .into_iter()
        .map(|id| Ok((id, repo.commit(&id)?)))
        .collect()
}

/// IDs of all commits whose message is exactly `message`.
pub fn find<R: Repo + ?Sized>(repo: &R, message: &str) -> Result<Vec<Id>> {
    let ids: Vec<Id> = global_log(repo)?
        .into_iter()
        .filter(|(_, commit)| commit.message() == message)
        .map(|(id, _)| id)
        .collect();

    if ids.is_empty() {
        Err(Error::NoCommitWithMessage)
    } else {
        Ok(ids)
    }
}

/// Formats one log entry:
///
/// ```text
/// ===
/// commit <id>
/// Merge: <first parent> <second parent>   (merge commits only)
/// Date: <timestamp>
/// <message>
///
/// ```
pub fn format_entry(id: &Id, commit: &Commit) -> String {
    let mut s = String::new();

    // Writing to a String can't fail.
    let _ = writeln!(s, "===");
    let _ = writeln!(s, "commit {}", id);
    if let (Some(first), Some(second)) = (commit.first_parent(), commit.second_parent()) {
        let _ = writeln!(s, "Merge: {} {}", first.short(), second.short());
    }
    let _ = writeln!(s, "Date: {}", commit.timestamp());
    let _ = writeln!(s, "{}", commit.message());
    let _ = writeln!(s);

    s
}
