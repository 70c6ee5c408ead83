/// Fingerprint report written for the license provider
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use crate::error::{FingerprintError, Result};

/// Request payload sent (out of band) to the license provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintReport {
    pub fingerprint: String,
    /// UTC, microsecond precision, `Z` suffix
    pub generated_at: String,
}

impl FingerprintReport {
    pub fn new(fingerprint: String, now: DateTime<Utc>) -> Self {
        FingerprintReport {
            fingerprint,
            generated_at: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Serialize with four-space indentation
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Write the report, replacing any existing file at `path`
pub fn write_report(report: &FingerprintReport, path: &Path) -> Result<()> {
    let json = report.to_json()?;
    fs::write(path, json).map_err(|source| FingerprintError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
