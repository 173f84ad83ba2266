use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use sha1::{Digest, Sha1};
use tracing::debug;

use gitlet_core::index::Index;
use gitlet_core::object::Id;
use gitlet_core::repo::{Error, Result};

use super::refs;

/// File name of the staging entry for `path`.
fn entry_name(path: &str) -> String {
    format!("{:x}", Sha1::digest(path.as_bytes()))
}

pub(super) fn read(gitlet_dir: &Path) -> Result<Index> {
    let mut index = Index::new();

    let staging_dir = gitlet_dir.join("staging");
    if staging_dir.is_dir() {
        for entry in fs::read_dir(&staging_dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with(".tmp") {
                continue;
            }
            let text = fs::read_to_string(entry.path())?;
            let (hex, path) = match text.split_once(' ') {
                Some((hex, path)) if !path.is_empty() => (hex, path),
                _ => return Err(Error::CorruptObject(entry.path().display().to_string())),
            };
            index.stage(path, &Id::from_hex(hex)?);
        }
    }

    let removal_dir = gitlet_dir.join("removal");
    if removal_dir.is_dir() {
        for entry in fs::read_dir(&removal_dir)? {
            if let Ok(path) = entry?.file_name().into_string() {
                index.mark_removed(&path);
            }
        }
    }

    Ok(index)
}

/// Replaces the stored index with `index`.
///
/// New entries are written before stale ones are deleted, so an interrupted
/// write leaves a mix of old and new entries but never an empty index.
/// Reading such a mix keeps the two sets disjoint, with removal winning.
pub(super) fn write(gitlet_dir: &Path, index: &Index) -> Result<()> {
    let staging_dir = gitlet_dir.join("staging");
    let removal_dir = gitlet_dir.join("removal");
    fs::create_dir_all(&staging_dir)?;
    fs::create_dir_all(&removal_dir)?;

    let mut staged_names = BTreeSet::new();
    for (path, id) in index.staged() {
        let name = entry_name(path);
        let entry = format!("{} {}", id, path);
        refs::write_atomic(&staging_dir.join(&name), entry.as_bytes())?;
        staged_names.insert(name);
    }

    // Markers are read by name only; a torn write is still a whole marker.
    for path in index.removed() {
        fs::write(removal_dir.join(path), "remove")?;
    }

    remove_stale(&staging_dir, &staged_names)?;
    remove_stale(&removal_dir, index.removed())?;

    debug!(staged = index.staged().len(), removed = index.removed().len(), "wrote index");
    Ok(())
}

/// Deletes every file in `dir` whose name isn't in `keep`.
fn remove_stale(dir: &Path, keep: &BTreeSet<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let stale = match entry.file_name().into_string() {
            Ok(name) => !keep.contains(&name),
            Err(_) => true,
        };
        if stale {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
