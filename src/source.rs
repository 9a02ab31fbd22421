use async_trait::async_trait;
use crate::{error::Result, types::{FileContent, ListingEntry}};

/// Core abstraction for template hosts
///
/// Implementors list remote directories and download raw template files.
/// Everything is addressed by absolute URL.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// List the contents of the directory behind `endpoint`
    async fn list_directory(&self, endpoint: &str) -> Result<Vec<ListingEntry>>;

    /// Download the raw content at `url`
    ///
    /// Returns `TemplateError::NotFound` if nothing lives there
    async fn fetch_file(&self, url: &str) -> Result<FileContent>;

    /// Get a human-readable identifier for this source (for logging/debugging)
    fn identifier(&self) -> String;
}
