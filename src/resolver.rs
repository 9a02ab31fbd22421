use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    error::Result,
    index::{build_index, NamePattern, TemplateIndex},
    source::TemplateSource,
    types::IndexEntry,
};

/// Lists, searches and merges templates from a single source
///
/// Every operation rebuilds the index from scratch; nothing is kept
/// between calls.
pub struct TemplateResolver {
    source: Arc<dyn TemplateSource>,
    endpoints: Vec<String>,
    suffix: String,
    pattern: NamePattern,
}

impl TemplateResolver {
    /// Create a resolver reading the endpoints and suffix from `config`
    pub fn new(source: Arc<dyn TemplateSource>, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            endpoints: config.endpoints.clone(),
            suffix: config.suffix.clone(),
            pattern: NamePattern::new(&config.suffix)?,
        })
    }

    /// Fetch every configured listing and build a fresh index
    pub async fn build_index(&self) -> Result<TemplateIndex> {
        build_index(self.source.as_ref(), &self.endpoints, &self.pattern).await
    }

    /// Write every template name, each followed by a blank line
    pub async fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        let index = self.build_index().await?;

        for entry in index.entries() {
            writeln!(out, "{}\n", entry.name)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the names matching any query, one per line, and return them
    ///
    /// An index failure is returned as an error, never as an empty result.
    pub async fn search<W: Write>(&self, queries: &[String], out: &mut W) -> Result<Vec<IndexEntry>> {
        let index = self.build_index().await?;
        let result = index.search(queries);

        for entry in &result {
            writeln!(out, "{}", entry.name)?;
        }
        out.flush()?;
        Ok(result)
    }

    /// Download every template named exactly by a query and merge them
    ///
    /// The list of found files is written before any download starts.
    /// Contents are only written once every download has succeeded.
    pub async fn find_and_download<W: Write>(&self, queries: &[String], out: &mut W) -> Result<()> {
        self.find_and_download_with(queries, || Ok(out)).await
    }

    /// Like [`find_and_download`](Self::find_and_download), opening the sink
    /// only once the index has been built
    ///
    /// A failed index build leaves the target untouched.
    pub async fn find_and_download_with<W, F>(&self, queries: &[String], open: F) -> Result<()>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        let index = self.build_index().await?;
        let to_download = index.exact_matches(queries);
        let mut out = open()?;

        writeln!(out, "# Found these files:")?;
        for entry in &to_download {
            writeln!(out, "# {}.{}", entry.name, self.suffix)?;
        }
        out.flush()?;

        let mut parts: Vec<Vec<u8>> = Vec::with_capacity(to_download.len() * 2);
        for entry in &to_download {
            let file = self.source.fetch_file(&entry.source_url).await?;
            info!(template = %entry.name, bytes = file.content.len(), "downloaded template");
            parts.push(format!("\n# {}\n", entry.source_url).into_bytes());
            parts.push(file.content.to_vec());
        }

        out.write_all(&parts.join(&b'\n'))?;
        out.flush()?;
        Ok(())
    }
}
