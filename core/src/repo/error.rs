use std::path::PathBuf;

use thiserror::Error;

use crate::object::ParseIdError;

/// Describes the potential error conditions that might arise from gitlet `Repo` operations.
///
/// Variants that describe a user-facing condition display exactly the message
/// the command line reports for it.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    ParseIdError(#[from] ParseIdError),

    #[error("corrupt object {0}")]
    CorruptObject(String),

    #[error("invalid repository configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported repository format version {0}")]
    UnsupportedFormatVersion(u32),

    #[error("working directory {0} does not exist")]
    WorkDirDoesntExist(PathBuf),

    #[error("Not in an initialized Gitlet directory.")]
    GitletDirDoesntExist(PathBuf),

    #[error("A Gitlet version-control system already exists in the current directory.")]
    GitletDirShouldntExist(PathBuf),

    #[error("Another gitlet process is running in this repository.")]
    Locked,

    #[error("File does not exist.")]
    FileDoesntExist,

    #[error("invalid file name {0:?}")]
    InvalidFileName(String),

    #[error("Invalid branch name.")]
    InvalidBranchName,

    #[error("Invalid remote name.")]
    InvalidRemoteName,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("Ambiguous commit id.")]
    AmbiguousCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("A branch with that name does not exist.")]
    BranchDoesntExist,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("Given branch shares no history with the current branch.")]
    NoCommonAncestor,

    #[error("A remote with that name already exists.")]
    RemoteExists,

    #[error("A remote with that name does not exist.")]
    RemoteDoesntExist,

    #[error("Remote directory not found.")]
    RemoteDirNotFound,

    #[error("That remote does not have that branch.")]
    RemoteBranchDoesntExist,

    #[error("Please pull down remote changes before pushing.")]
    PullBeforePush,
}

/// A specialized `Result` type for gitlet `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
