use std::path::PathBuf;

use crate::error::{TemplateError, Result};

/// Root listing of the upstream template repository
pub const ROOT_ENDPOINT: &str = "https://api.github.com/repos/github/gitignore/contents";

/// Listing of the `Global` subdirectory
pub const GLOBAL_ENDPOINT: &str =
    "https://api.github.com/repos/github/gitignore/contents/Global?ref=master";

pub const DEFAULT_SUFFIX: &str = "gitignore";
pub const DEFAULT_SAVE_PATH: &str = ".gitignore";

/// Comma-separated list of listing endpoints, replacing the defaults
pub const ENDPOINTS_VAR: &str = "GITIGNORE_RESOLVER_ENDPOINTS";
pub const SUFFIX_VAR: &str = "GITIGNORE_RESOLVER_SUFFIX";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listing endpoints, queried in this order
    pub endpoints: Vec<String>,
    /// File suffix identifying templates, without the leading dot
    pub suffix: String,
    /// Target of `--save`, relative to the working directory
    pub save_path: PathBuf,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: vec![ROOT_ENDPOINT.to_string(), GLOBAL_ENDPOINT.to_string()],
            suffix: DEFAULT_SUFFIX.to_string(),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from defaults and process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from defaults and a variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENDPOINTS_VAR) {
            config.endpoints = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(suffix) = lookup(SUFFIX_VAR) {
            config.suffix = suffix.trim().trim_start_matches('.').to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no index could be built from
    pub fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(TemplateError::InvalidConfig {
                message: "at least one listing endpoint is required".to_string(),
            });
        }
        if self.suffix.is_empty() {
            return Err(TemplateError::InvalidConfig {
                message: "template suffix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config.endpoints, vec![ROOT_ENDPOINT, GLOBAL_ENDPOINT]);
        assert_eq!(config.suffix, "gitignore");
        assert_eq!(config.save_path, PathBuf::from(".gitignore"));
        assert!(config.user_agent.starts_with("gitignore-resolver/"));
    }

    #[test]
    fn test_endpoint_override() {
        let config = Config::from_vars(|key| match key {
            ENDPOINTS_VAR => Some("http://a/list, http://b/list ,".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.endpoints, vec!["http://a/list", "http://b/list"]);
    }

    #[test]
    fn test_suffix_override_strips_dot() {
        let config = Config::from_vars(|key| match key {
            SUFFIX_VAR => Some(".dockerignore".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.suffix, "dockerignore");
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Config::from_vars(|key| (key == ENDPOINTS_VAR).then(|| " , ".to_string())),
            Err(TemplateError::InvalidConfig { .. })
        ));
        assert!(matches!(
            Config::from_vars(|key| (key == SUFFIX_VAR).then(String::new)),
            Err(TemplateError::InvalidConfig { .. })
        ));
    }
}
