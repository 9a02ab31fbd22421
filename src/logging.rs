//! Diagnostic output
//!
//! Progress notices and debug traces go through `tracing` and are written to
//! stderr, so they never mix with template output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{TemplateError, Result};

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`
pub const LOG_VAR: &str = "GITIGNORE_RESOLVER_LOG";

/// Filter directive used when [`LOG_VAR`] is unset
pub fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        "info"
    }
}

/// Resolve the filter: env var first, then the quiet flag
pub fn build_env_filter(quiet: bool) -> Result<EnvFilter> {
    match std::env::var(LOG_VAR) {
        Ok(directive) if !directive.trim().is_empty() => {
            EnvFilter::try_new(directive.trim()).map_err(|e| TemplateError::InvalidConfig {
                message: format!("invalid {} directive: {}", LOG_VAR, e),
            })
        }
        _ => Ok(EnvFilter::new(default_directive(quiet))),
    }
}

/// Install the global subscriber; call once at startup
pub fn init_logging(quiet: bool) -> Result<()> {
    let filter = build_env_filter(quiet)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| TemplateError::InvalidConfig {
            message: format!("failed to initialise logging: {}", e),
        })
}
