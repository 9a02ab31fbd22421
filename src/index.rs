use regex::Regex;
use tracing::info;

use crate::{
    error::{TemplateError, Result},
    source::TemplateSource,
    types::{EntryType, IndexEntry, ListingEntry},
};

/// Matches template file names and extracts their canonical name
///
/// A file named `Rust.gitignore` yields `Rust`. Only ASCII alphanumeric
/// names followed by exactly `.<suffix>` qualify.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(suffix: &str) -> Result<Self> {
        let pattern = format!(r"^([a-zA-Z0-9]+)\.{}$", regex::escape(suffix));
        let regex = Regex::new(&pattern).map_err(|e| TemplateError::InvalidConfig {
            message: format!("invalid template suffix {:?}: {}", suffix, e),
        })?;
        Ok(Self { regex })
    }

    /// Canonical name for `file_name`, or `None` if it is not a template
    pub fn extract<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.regex
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Ordered list of discoverable templates
///
/// Entries keep endpoint order, then listing order. Duplicate names from
/// different endpoints are all kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateIndex {
    entries: Vec<IndexEntry>,
}

impl TemplateIndex {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name contains a query, ignoring case
    ///
    /// Query-major: an entry appears once for every query it matches.
    pub fn search<S: AsRef<str>>(&self, queries: &[S]) -> Vec<IndexEntry> {
        self.collect_matches(queries, |name, query| name.contains(query))
    }

    /// Entries whose name equals a query, ignoring case
    pub fn exact_matches<S: AsRef<str>>(&self, queries: &[S]) -> Vec<IndexEntry> {
        self.collect_matches(queries, |name, query| name == query)
    }

    fn collect_matches<S, F>(&self, queries: &[S], matches: F) -> Vec<IndexEntry>
    where
        S: AsRef<str>,
        F: Fn(&str, &str) -> bool,
    {
        let folded: Vec<String> = self.entries.iter().map(|e| e.name.to_lowercase()).collect();
        let mut result = Vec::new();

        for query in queries {
            let query = query.as_ref().to_lowercase();
            for (entry, name) in self.entries.iter().zip(&folded) {
                if matches(name, &query) {
                    result.push(entry.clone());
                }
            }
        }

        result
    }
}

/// Keep the listing items that are downloadable template files
pub fn filter_listing(listing: Vec<ListingEntry>, pattern: &NamePattern) -> Vec<IndexEntry> {
    listing
        .into_iter()
        .filter(|item| item.entry_type == EntryType::File)
        .filter_map(|item| {
            let name = pattern.extract(&item.name)?.to_string();
            let source_url = item.download_url?;
            Some(IndexEntry { name, source_url })
        })
        .collect()
}

/// Query every endpoint in order and concatenate the template entries
///
/// Fails on the first endpoint that cannot be listed; nothing gathered
/// from earlier endpoints is returned.
pub async fn build_index(
    source: &dyn TemplateSource,
    endpoints: &[String],
    pattern: &NamePattern,
) -> Result<TemplateIndex> {
    let mut entries = Vec::new();

    for endpoint in endpoints {
        info!(endpoint = %endpoint, source = %source.identifier(), "fetching template index");
        let listing = source.list_directory(endpoint).await?;
        let found = filter_listing(listing, pattern);
        info!(endpoint = %endpoint, templates = found.len(), "fetched template index");
        entries.extend(found);
    }

    Ok(TemplateIndex::new(entries))
}
