use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loaded document, keyed by its source path. Immutable after load; a
/// corpus reload replaces the whole set rather than patching entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub path: String,
    pub file_name: String,
    pub mime_type: String,
    pub text: String,
    pub loaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(path: String, file_name: String, mime_type: String, text: String) -> Self {
        Self {
            path,
            file_name,
            mime_type,
            text,
            loaded_at: Utc::now(),
        }
    }
}

/// Descriptor returned by the corpus reload operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub file_name: String,
    pub file_path: String,
    pub mime_type: String,
}

impl From<&Document> for FileDescriptor {
    fn from(document: &Document) -> Self {
        Self {
            file_name: document.file_name.clone(),
            file_path: document.path.clone(),
            mime_type: document.mime_type.clone(),
        }
    }
}
