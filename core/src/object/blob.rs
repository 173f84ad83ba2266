use super::{Id, Kind, Object};

/// Snapshot of one file's content at the time it was staged or compared.
///
/// A deleted file has no blob; callers represent that as `Option<Blob>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    object: Object,
}

impl Blob {
    pub fn new(content: Vec<u8>) -> Blob {
        Blob {
            object: Object::new(Kind::Blob, content),
        }
    }

    /// Wraps a stored object, returning `None` if it isn't a blob.
    pub fn from_object(object: Object) -> Option<Blob> {
        match object.kind() {
            Kind::Blob => Some(Blob { object }),
            Kind::Commit => None,
        }
    }

    pub fn id(&self) -> &Id {
        self.object.id()
    }

    pub fn content(&self) -> &[u8] {
        self.object.content()
    }

    pub fn as_object(&self) -> &Object {
        &self.object
    }

    pub fn into_content(self) -> Vec<u8> {
        self.object.content
    }
}
