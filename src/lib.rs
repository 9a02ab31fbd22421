pub mod config;
pub mod error;
pub mod github;
pub mod index;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod source;
pub mod types;

pub use config::Config;
pub use error::{Result, TemplateError};
pub use github::GitHubSource;
pub use index::{build_index, filter_listing, NamePattern, TemplateIndex};
pub use output::OutputTarget;
pub use resolver::TemplateResolver;
pub use source::TemplateSource;
pub use types::{EntryType, FileContent, IndexEntry, ListingEntry};
