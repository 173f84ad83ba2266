//! Rules for names that gitlet turns into paths: working file names,
//! branch names, and remote names.

use std::result::Result;

/// Reasons why a string can not be accepted as a working file, branch, or remote name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    EmptyName,
    ContainsSeparator,
    ContainsNull,
    DotSegment,
    GitletDir,
}

/// Checks that `name` is a plain file directly inside the working directory.
pub fn check_file_name(name: &str) -> Result<(), NameError> {
    check_segment(name)?;
    if name == "." || name == ".." {
        Err(NameError::DotSegment)
    } else if name == crate::repo::GITLET_DIR {
        Err(NameError::GitletDir)
    } else {
        Ok(())
    }
}

/// Checks a name a user gives to a new branch or remote.
///
/// These are single path segments that don't start with `.`. Slashes are
/// left to remote-tracking branches, which `check_ref_name` accepts.
pub fn check_branch_name(name: &str) -> Result<(), NameError> {
    check_segment(name)?;
    if name.starts_with('.') {
        Err(NameError::DotSegment)
    } else {
        Ok(())
    }
}

/// Checks a stored branch name: one or more `/`-separated segments, each a
/// valid branch name. This covers remote-tracking branches (`remote/branch`).
pub fn check_ref_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::EmptyName);
    }
    name.split('/').try_for_each(check_branch_name)
}

fn check_segment(segment: &str) -> Result<(), NameError> {
    if segment.is_empty() {
        Err(NameError::EmptyName)
    } else if segment.contains('\0') {
        Err(NameError::ContainsNull)
    } else if segment.contains('/') || segment.contains('\\') {
        Err(NameError::ContainsSeparator)
    } else {
        Ok(())
    }
}
