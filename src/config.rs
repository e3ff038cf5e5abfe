use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::delay::DelayRange;
use crate::scraper::RetryPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperConfig {
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// `env_logger` filter directives
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Wait after a 429 response
    #[serde(default = "default_backoff")]
    pub backoff: DelayRange,

    /// Wait between two consecutive URLs
    #[serde(default = "default_delay")]
    pub delay: DelayRange,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            user_agent: default_user_agent(),
            max_attempts: default_max_attempts(),
            backoff: default_backoff(),
            delay: default_delay(),
        }
    }
}

impl ScraperConfig {
    /// Loads `config_file` if it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let path = config_file.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let file =
            File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
        serde_yaml::from_reader(file).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff: self.backoff,
        }
    }
}

fn default_input_file() -> PathBuf {
    PathBuf::from("plugin_urls.csv")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("plugin_meta_results.csv")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("scraper.log")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_max_attempts() -> u32 {
    RetryPolicy::default().max_attempts
}

fn default_backoff() -> DelayRange {
    RetryPolicy::default().backoff
}

fn default_delay() -> DelayRange {
    DelayRange::new(1, 5)
}
