use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use tracing::{trace, warn};

use gitlet_core::object::{Id, Kind, Object};
use gitlet_core::repo::{Error, Result};

use super::refs;

fn kind_dir(gitlet_dir: &Path, kind: Kind) -> PathBuf {
    gitlet_dir.join("objects").join(kind.dir_name())
}

pub(super) fn object_path(gitlet_dir: &Path, kind: Kind, id: &Id) -> PathBuf {
    let (shard, rest) = id.shard();
    kind_dir(gitlet_dir, kind).join(shard).join(rest)
}

/// Writes `object` unless a file for it already exists.
pub(super) fn put(gitlet_dir: &Path, level: u32, object: &Object) -> Result<()> {
    let path = object_path(gitlet_dir, object.kind(), object.id());
    if path.exists() {
        trace!(id = %object.id(), "object already stored");
        return Ok(());
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(&object.to_bytes())?;
    let compressed = encoder.finish()?;

    refs::write_atomic(&path, &compressed)?;
    trace!(id = %object.id(), kind = %object.kind(), "stored object");
    Ok(())
}

pub(super) fn get(gitlet_dir: &Path, kind: Kind, id: &Id) -> Result<Option<Object>> {
    let path = object_path(gitlet_dir, kind, id);
    if !path.is_file() {
        return Ok(None);
    }

    let compressed = fs::read(&path)?;
    let mut bytes = Vec::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut bytes)?;

    match Object::from_bytes(&bytes) {
        Some(object) if object.kind() == kind && object.id() == id => Ok(Some(object)),
        _ => Err(Error::CorruptObject(path.display().to_string())),
    }
}

/// Lists IDs of stored objects of `kind` whose hex form starts with `prefix`.
pub(super) fn find(gitlet_dir: &Path, kind: Kind, prefix: &str) -> Result<Vec<Id>> {
    let dir = kind_dir(gitlet_dir, kind);
    let mut ids = Vec::new();

    if !dir.is_dir() {
        return Ok(ids);
    }

    for shard in fs::read_dir(&dir)? {
        let shard = shard?;
        let shard_name = match shard.file_name().into_string() {
            Ok(name) if name.len() == 2 && shard.file_type()?.is_dir() => name,
            _ => continue,
        };

        let shard_prefix = prefix.get(..2).unwrap_or(prefix);
        if !shard_name.starts_with(shard_prefix) {
            continue;
        }

        for entry in fs::read_dir(shard.path())? {
            let entry = entry?;
            let hex = match entry.file_name().into_string() {
                Ok(rest) => format!("{}{}", shard_name, rest),
                Err(_) => continue,
            };
            if !hex.starts_with(prefix) {
                continue;
            }
            match Id::from_hex(&hex) {
                Ok(id) => ids.push(id),
                Err(err) => warn!(file = %entry.path().display(), %err, "ignoring stray file in object store"),
            }
        }
    }

    ids.sort();
    Ok(ids)
}
