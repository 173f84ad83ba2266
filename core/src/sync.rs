//! Moves history between two repositories: fetch, push, and pull.
//!
//! Each operation takes the local and the remote repository as two separate
//! `Repo` values. Objects are always written before any reference that names
//! them, and an operation that is going to fail does so before writing.

use std::collections::BTreeSet;

use tracing::debug;

use crate::merge::{self, MergeOutcome};
use crate::object::Id;
use crate::repo::{Error, Repo, Result};
use crate::{graph, names, worktree};

/// Name of the local branch that tracks `branch` on remote `remote_name`.
pub fn tracking_branch(remote_name: &str, branch: &str) -> String {
    format!("{}/{}", remote_name, branch)
}

/// Copies `commits` (given parents first) and every blob they refer to from
/// `from` into `to`, skipping commits `to` already has. Returns the number of
/// commits copied.
fn transfer<F, T>(from: &F, to: &mut T, commits: &[Id]) -> Result<usize>
where
    F: Repo + ?Sized,
    T: Repo + ?Sized,
{
    let mut wanted = Vec::new();
    let mut blobs = BTreeSet::new();

    for id in commits {
        if to.get_commit(id)?.is_some() {
            continue;
        }
        let commit = from.commit(id)?;
        blobs.extend(commit.files().values().copied());
        wanted.push(commit);
    }

    for blob_id in &blobs {
        if to.get_blob(blob_id)?.is_none() {
            to.put_blob(&from.blob(blob_id)?)?;
        }
    }

    for commit in &wanted {
        to.put_commit(commit)?;
    }

    debug!(commits = wanted.len(), blobs = blobs.len(), "transferred objects");
    Ok(wanted.len())
}

/// Copies the history of `branch` on `remote` into `local` and points the
/// tracking branch `remote_name/branch` at its tip.
///
/// Returns the fetched tip.
pub fn fetch<L, R>(local: &mut L, remote: &R, remote_name: &str, branch: &str) -> Result<Id>
where
    L: Repo + ?Sized,
    R: Repo + ?Sized,
{
    if names::check_ref_name(branch).is_err() {
        return Err(Error::RemoteBranchDoesntExist);
    }
    let tip = remote.branch(branch)?.ok_or(Error::RemoteBranchDoesntExist)?;

    let commits = graph::missing_commits(remote, &tip, None)?;
    transfer(remote, local, &commits)?;

    let tracking = tracking_branch(remote_name, branch);
    local.set_branch(&tracking, &tip)?;
    debug!(branch = %tracking, tip = %tip, "fetched");
    Ok(tip)
}

/// Sends local HEAD's history to `branch` on `remote`, then checks it out
/// there.
///
/// A missing remote branch starts from the remote's HEAD. The remote branch's
/// tip must be an ancestor of local HEAD; otherwise nothing is written.
/// Returns the number of commits sent.
pub fn push<L, R>(local: &L, remote: &mut R, branch: &str) -> Result<usize>
where
    L: Repo + ?Sized,
    R: Repo + ?Sized,
{
    if names::check_branch_name(branch).is_err() {
        return Err(Error::InvalidBranchName);
    }

    let head_id = local.head()?;
    let remote_tip = match remote.branch(branch)? {
        Some(tip) => tip,
        None => remote.head()?,
    };

    if local.get_commit(&remote_tip)?.is_none() || !graph::is_ancestor(local, &remote_tip, &head_id)? {
        return Err(Error::PullBeforePush);
    }

    let commits = graph::missing_commits(local, &head_id, Some(&remote_tip))?;
    let sent = transfer(local, remote, &commits)?;

    let head = local.commit(&head_id)?;
    worktree::checkout_commit(remote, &head)?;
    remote.set_current_branch(branch)?;
    remote.set_head(&head_id)?;
    remote.set_branch(branch, &head_id)?;

    debug!(branch, head = %head_id, sent, "pushed");
    Ok(sent)
}

/// Fetches `branch` from `remote`, then merges the tracking branch into the
/// current branch.
pub fn pull<L, R>(local: &mut L, remote: &R, remote_name: &str, branch: &str) -> Result<MergeOutcome>
where
    L: Repo + ?Sized,
    R: Repo + ?Sized,
{
    fetch(local, remote, remote_name, branch)?;
    merge::merge(local, &tracking_branch(remote_name, branch))
}
