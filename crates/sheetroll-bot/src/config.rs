//! Bot settings shared by every adapter

use std::time::Duration;

use anyhow::{bail, Result};
use sheetroll::FetchOptions;

/// Settings resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Command prefix, `!` by default
    pub prefix: String,
    pub fetch: FetchOptions,
}

impl BotConfig {
    /// Validate raw settings
    ///
    /// `csv_url_template` replaces the Google export URL when given; it must contain an
    /// `{id}` placeholder.
    pub fn new(
        prefix: &str,
        fetch_timeout_secs: u64,
        csv_url_template: Option<&str>,
    ) -> Result<Self> {
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            bail!("Command prefix must be non-empty and contain no whitespace, got {prefix:?}");
        }
        if fetch_timeout_secs == 0 {
            bail!("Fetch timeout must be at least one second");
        }

        let mut fetch = FetchOptions {
            timeout: Duration::from_secs(fetch_timeout_secs),
            ..Default::default()
        };
        if let Some(template) = csv_url_template {
            if !template.contains("{id}") {
                bail!("CSV URL template must contain an {{id}} placeholder: {template}");
            }
            fetch.url_template = template.to_string();
        }

        Ok(Self {
            prefix: prefix.to_string(),
            fetch,
        })
    }
}
