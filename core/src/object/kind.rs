use std::fmt::{self, Display, Formatter};

/// Describes the fundamental gitlet object type (blob or commit).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Blob,
    Commit,
}

impl Kind {
    /// Name of the directory (under `objects`) that holds objects of this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            Kind::Blob => "blobs",
            Kind::Commit => "commits",
        }
    }

    pub(crate) fn from_bytes(name: &[u8]) -> Option<Kind> {
        match name {
            b"blob" => Some(Kind::Blob),
            b"commit" => Some(Kind::Commit),
            _ => None,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Commit => write!(f, "commit"),
        }
    }
}
