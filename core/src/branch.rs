//! Creating and deleting branch pointers.

use tracing::debug;

use crate::names;
use crate::repo::{Error, Repo, Result};

/// Creates branch `name` pointing at HEAD. Does not switch to it.
///
/// `name` must be a single path segment not starting with `.`; names with
/// a `/` are reserved for remote-tracking branches.
pub fn create<R: Repo + ?Sized>(repo: &mut R, name: &str) -> Result<()> {
    if names::check_branch_name(name).is_err() {
        return Err(Error::InvalidBranchName);
    }
    if repo.branch(name)?.is_some() {
        return Err(Error::BranchExists);
    }

    let head = repo.head()?;
    repo.set_branch(name, &head)?;
    debug!(branch = name, at = %head, "created branch");
    Ok(())
}

/// Deletes the pointer `name`. Commits it pointed at are kept.
pub fn delete<R: Repo + ?Sized>(repo: &mut R, name: &str) -> Result<()> {
    if repo.branch(name)?.is_none() {
        return Err(Error::BranchDoesntExist);
    }
    if repo.current_branch()? == name {
        return Err(Error::RemoveCurrentBranch);
    }

    repo.remove_branch(name)?;
    debug!(branch = name, "deleted branch");
    Ok(())
}
