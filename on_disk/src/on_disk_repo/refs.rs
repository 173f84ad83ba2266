use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use gitlet_core::object::Id;
use gitlet_core::repo::{Error, Result};

/// Replaces the file at `path` with `content` by writing a sibling temp file
/// and renaming it into place. Creates missing parent directories.
pub(super) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) => dir,
        None => return Err(Error::IoError(std::io::ErrorKind::InvalidInput.into())),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub(super) fn write_text(path: &Path, text: &str) -> Result<()> {
    trace!(path = %path.display(), value = text, "writing reference");
    write_atomic(path, text.as_bytes())
}

pub(super) fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}

pub(super) fn read_id(path: &Path) -> Result<Id> {
    let text = read_text(path)?;
    Id::from_hex(&text).map_err(|_| Error::CorruptObject(format!("bad reference {}", path.display())))
}

/// Reads every reference under `dir`; nested files are named `<dir>/<name>`.
pub(super) fn list(dir: &Path) -> Result<BTreeMap<String, Id>> {
    let mut refs = BTreeMap::new();
    let mut work: Vec<(PathBuf, String)> = vec![(dir.to_path_buf(), String::new())];

    while let Some((dir, prefix)) = work.pop() {
        if !dir.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            // Temp files from an interrupted write.
            if name.starts_with(".tmp") {
                continue;
            }

            let full_name = format!("{}{}", prefix, name);
            if entry.file_type()?.is_dir() {
                work.push((entry.path(), format!("{}/", full_name)));
            } else {
                refs.insert(full_name, read_id(&entry.path())?);
            }
        }
    }

    Ok(refs)
}
