use std::fmt;

use uuid::Uuid;

/// Location of an uploaded document inside the blob store. Keys are prefixed
/// with a fresh uuid so two uploads of the same filename never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(filename: &str) -> Self {
        Self(format!("{}/{}", Uuid::new_v4(), filename))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
