//! Represents the gitlet concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.

use sha1::{Digest, Sha1};

mod blob;
pub use blob::Blob;

mod commit;
pub use commit::{Commit, INITIAL_MESSAGE};

mod id;
pub use id::{check_prefix, Id, ParseIdError, SHORT_LEN};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

/// Describes a single object stored (or about to be stored) in a gitlet repository.
///
/// The ID is computed when the object is constructed, so two objects with the
/// same kind and content always carry the same ID.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    id: Id,
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new Object and compute its ID.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        let id = hash(kind, &content);
        Object { id, kind, content }
    }

    /// Parse an object from its canonical byte form (`<kind> <len>\0<content>`).
    ///
    /// Returns `None` if the header is malformed or the length doesn't match.
    pub fn from_bytes(bytes: &[u8]) -> Option<Object> {
        let nul = bytes.iter().position(|b| *b == 0)?;
        let (header, content) = (&bytes[..nul], &bytes[nul + 1..]);

        let (kind, len) = parse_utils::split_once(header, &b' ');
        let kind = Kind::from_bytes(kind)?;
        let len: usize = std::str::from_utf8(len).ok()?.parse().ok()?;

        if len != content.len() {
            return None;
        }

        Some(Object::new(kind, content.to_vec()))
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the content of the object (without header).
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Return the size (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the canonical byte form that the ID is computed over.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = header(self.kind, self.content.len());
        bytes.extend_from_slice(&self.content);
        bytes
    }
}

fn header(kind: Kind, len: usize) -> Vec<u8> {
    format!("{} {}\0", kind, len).into_bytes()
}

fn hash(kind: Kind, content: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(header(kind, content.len()));
    hasher.update(content);

    let mut digest = [0; 20];
    digest.copy_from_slice(&hasher.finalize());
    Id::from_digest(digest)
}
