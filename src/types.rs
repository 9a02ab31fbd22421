use serde::Deserialize;

/// A downloaded template body
#[derive(Debug, Clone)]
pub struct FileContent {
    /// The raw bytes of the template
    pub content: bytes::Bytes,
}

/// One item of a remote directory listing, as returned by the contents API
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    /// File or folder name
    pub name: String,
    /// Kind of entry
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Path relative to the repository root
    #[serde(default)]
    pub path: String,
    /// Raw download URL; `null` for directories
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Type of listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// A discoverable template: canonical name plus the URL of its raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub source_url: String,
}

impl IndexEntry {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
        }
    }
}
