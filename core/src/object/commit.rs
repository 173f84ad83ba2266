use std::collections::BTreeMap;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Local, Utc};

use super::{parse_utils, Id, Kind, Object};
use crate::names;

/// Message recorded on the root commit of every repository.
pub const INITIAL_MESSAGE: &str = "initial commit";

/// Format of commit timestamps, e.g. `Thu Jan 01 00:00:00 1970 +0000`.
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// An immutable node in the history graph.
///
/// A commit records a message, a timestamp, up to two parents, and a full
/// snapshot mapping each tracked path to the ID of its blob.
///
/// A `Commit` value can be edited freely until it is written to a repository;
/// its ID is derived from its content, so a saved commit can't change without
/// becoming a different commit.
#[derive(Clone, Debug, PartialEq)]
pub struct Commit {
    message: String,
    timestamp: String,
    files: BTreeMap<String, Id>,
    first_parent: Option<Id>,
    second_parent: Option<Id>,
}

impl Commit {
    /// The root commit: no parents, no files, and the Unix epoch (in UTC) as
    /// timestamp, so that every repository starts from the same commit ID.
    pub fn initial() -> Commit {
        let epoch: DateTime<Utc> = UNIX_EPOCH.into();
        Commit {
            message: INITIAL_MESSAGE.to_string(),
            timestamp: epoch.format(DATE_FORMAT).to_string(),
            files: BTreeMap::new(),
            first_parent: None,
            second_parent: None,
        }
    }

    /// Start a new commit on top of `parent`, copying its file snapshot.
    pub fn child_of(parent_id: &Id, parent: &Commit, message: &str) -> Commit {
        Commit {
            message: message.to_string(),
            timestamp: Local::now().format(DATE_FORMAT).to_string(),
            files: parent.files.clone(),
            first_parent: Some(*parent_id),
            second_parent: None,
        }
    }

    pub fn set_second_parent(&mut self, id: &Id) {
        self.second_parent = Some(*id);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Mapping from each tracked path to its blob ID.
    pub fn files(&self) -> &BTreeMap<String, Id> {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut BTreeMap<String, Id> {
        &mut self.files
    }

    /// Returns the blob ID recorded for `path`, if the path is tracked.
    pub fn blob_id(&self, path: &str) -> Option<&Id> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn first_parent(&self) -> Option<&Id> {
        self.first_parent.as_ref()
    }

    pub fn second_parent(&self) -> Option<&Id> {
        self.second_parent.as_ref()
    }

    /// Iterates over the parents, first parent first.
    pub fn parents(&self) -> impl Iterator<Item = &Id> {
        self.first_parent.iter().chain(self.second_parent.iter())
    }

    pub fn has_parent(&self, id: &Id) -> bool {
        self.parents().any(|p| p == id)
    }

    pub fn is_merge(&self) -> bool {
        self.second_parent.is_some()
    }

    /// Serializes this commit into a storable object.
    ///
    /// The content is line-oriented:
    ///
    /// ```text
    /// parent <id>            (zero, one, or two lines)
    /// date <timestamp>
    /// file <blob id> <path>  (one line per tracked path, sorted by path)
    ///
    /// <message>
    /// ```
    pub fn to_object(&self) -> Object {
        let mut content = String::new();

        for parent in self.parents() {
            content.push_str(&format!("parent {}\n", parent));
        }

        content.push_str(&format!("date {}\n", self.timestamp));

        for (path, blob_id) in &self.files {
            content.push_str(&format!("file {} {}\n", blob_id, path));
        }

        content.push('\n');
        content.push_str(&self.message);

        Object::new(Kind::Commit, content.into_bytes())
    }

    /// Computes the ID this commit has (or will have) once stored.
    pub fn id(&self) -> Id {
        *self.to_object().id()
    }

    /// Parses a stored commit object.
    ///
    /// Returns `None` if the object isn't a commit or its content is malformed,
    /// including a tracked path that isn't a plain working file name.
    pub fn from_object(object: &Object) -> Option<Commit> {
        if object.kind() != Kind::Commit {
            return None;
        }

        let content = std::str::from_utf8(object.content()).ok()?;
        let (headers, message) = match content.find("\n\n") {
            Some(n) => (&content[..n], &content[n + 2..]),
            None => return None,
        };

        let mut parents: Vec<Id> = Vec::new();
        let mut timestamp: Option<String> = None;
        let mut files = BTreeMap::new();

        for line in headers.lines() {
            let line = line.as_bytes();

            if let Some(parent_id) = parse_utils::header(line, b"parent") {
                if timestamp.is_some() || parents.len() == 2 {
                    return None;
                }
                parents.push(Id::from_hex(parent_id).ok()?);
            } else if let Some(date) = parse_utils::header(line, b"date") {
                if timestamp.is_some() {
                    return None;
                }
                timestamp = Some(std::str::from_utf8(date).ok()?.to_string());
            } else if let Some(entry) = parse_utils::header(line, b"file") {
                timestamp.as_ref()?;
                let (blob_id, path) = parse_utils::split_once(entry, &b' ');
                let path = std::str::from_utf8(path).ok()?;
                names::check_file_name(path).ok()?;
                let path = path.to_string();
                files.insert(path, Id::from_hex(blob_id).ok()?);
            } else {
                return None;
            }
        }

        let mut parents = parents.into_iter();

        Some(Commit {
            message: message.to_string(),
            timestamp: timestamp?,
            files,
            first_parent: parents.next(),
            second_parent: parents.next(),
        })
    }
}
