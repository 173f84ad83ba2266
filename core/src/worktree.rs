//! Reconciles the working directory with a commit: checkout and reset.

use std::collections::BTreeSet;

use tracing::debug;

use crate::index::Index;
use crate::object::Commit;
use crate::repo::{Error, Repo, Result};

/// Fails if any of `target_files` is present in the working directory but
/// not tracked by `head`, i.e. if checking out those files would overwrite
/// something the repository has never seen.
pub fn check_untracked<'a, I>(head: &Commit, target_files: I, work_files: &BTreeSet<String>) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    match target_files
        .into_iter()
        .find(|path| !head.tracks(path) && work_files.contains(*path))
    {
        Some(path) => {
            debug!(path = %path, "untracked file would be overwritten");
            Err(Error::UntrackedFileInTheWay)
        }
        None => Ok(()),
    }
}

/// Replaces the working directory's tracked content with `target`'s and
/// clears the staging index.
///
/// Files tracked by HEAD but not by `target` are deleted; every file tracked
/// by `target` is written. HEAD and branches are not moved.
pub fn checkout_commit<R: Repo + ?Sized>(repo: &mut R, target: &Commit) -> Result<()> {
    let head = repo.head_commit()?;
    let work_files = repo.work_files()?;

    // Nothing is touched until the whole checkout is known to be safe.
    check_untracked(&head, target.files().keys(), &work_files)?;

    for path in head.files().keys() {
        if !target.tracks(path) {
            repo.remove_work_file(path)?;
        }
    }

    for (path, blob_id) in target.files() {
        let blob = repo.blob(blob_id)?;
        repo.write_work_file(path, blob.content())?;
    }

    repo.set_index(&Index::new())?;
    debug!(files = target.files().len(), "checked out commit");
    Ok(())
}

/// Overwrites the working file `path` with its content in `commit`.
///
/// A pending removal of `path` is dropped, since the file is back.
pub fn checkout_file<R: Repo + ?Sized>(repo: &mut R, commit: &Commit, path: &str) -> Result<()> {
    let blob_id = commit.blob_id(path).ok_or(Error::FileNotInCommit)?;
    let blob = repo.blob(blob_id)?;
    repo.write_work_file(path, blob.content())?;

    let mut index = repo.index()?;
    if index.unmark_removed(path) {
        repo.set_index(&index)?;
    }

    Ok(())
}

/// `checkout -- <path>`: restores `path` as HEAD records it.
pub fn checkout_head_file<R: Repo + ?Sized>(repo: &mut R, path: &str) -> Result<()> {
    let head = repo.head_commit()?;
    checkout_file(repo, &head, path)
}

/// `checkout <commit> -- <path>`: restores `path` as an (abbreviated) commit records it.
pub fn checkout_commit_file<R: Repo + ?Sized>(repo: &mut R, abbrev: &str, path: &str) -> Result<()> {
    let (_, commit) = repo.resolve_commit(abbrev)?;
    checkout_file(repo, &commit, path)
}

/// Switches to branch `name`, checking out its tip.
pub fn checkout_branch<R: Repo + ?Sized>(repo: &mut R, name: &str) -> Result<()> {
    let tip = repo.branch(name)?.ok_or(Error::NoSuchBranch)?;
    if repo.current_branch()? == name {
        return Err(Error::AlreadyOnBranch);
    }

    let target = repo.commit(&tip)?;
    checkout_commit(repo, &target)?;

    repo.set_current_branch(name)?;
    repo.set_head(&tip)?;
    debug!(branch = name, head = %tip, "switched branch");
    Ok(())
}

/// Checks out an (abbreviated) commit and moves HEAD and the current branch to it.
pub fn reset<R: Repo + ?Sized>(repo: &mut R, abbrev: &str) -> Result<()> {
    let (id, commit) = repo.resolve_commit(abbrev)?;
    checkout_commit(repo, &commit)?;

    let branch = repo.current_branch()?;
    repo.set_head(&id)?;
    repo.set_branch(&branch, &id)?;
    debug!(branch = %branch, head = %id, "reset");
    Ok(())
}
