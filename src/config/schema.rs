/// Configuration schema for the fingerprint run
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the request file handed to the license provider
pub const DEFAULT_OUTPUT_FILE: &str = "machine_request.json";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Where the report is written, relative to the working directory
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Diagnostic log level on stderr: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_file: default_output_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Map `log_level` onto a tracing level
    pub fn tracing_level(&self) -> Option<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "error" => Some(tracing::Level::ERROR),
            "warn" => Some(tracing::Level::WARN),
            "info" => Some(tracing::Level::INFO),
            "debug" => Some(tracing::Level::DEBUG),
            "trace" => Some(tracing::Level::TRACE),
            _ => None,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.output_file.as_os_str().is_empty() {
            return Err("output_file cannot be empty".to_string());
        }

        if self.tracing_level().is_none() {
            return Err(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        Ok(())
    }
}
