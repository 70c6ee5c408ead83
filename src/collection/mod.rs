/// Collection module - identifier probing, fingerprinting, and the request file
pub mod sources;
pub mod fingerprint;
pub mod report;

pub use sources::{collect_identifiers, Probe, PROBES};
pub use fingerprint::compute_fingerprint;
pub use report::{write_report, FingerprintReport};

use chrono::Utc;

use crate::config::Config;
use crate::error::{FingerprintError, Result};
use crate::utils::detect_os;

/// Run the whole pipeline once: probe, hash, write
pub fn run(config: &Config) -> Result<FingerprintReport> {
    run_with_probes(config, PROBES)
}

pub fn run_with_probes(config: &Config, probes: &[Probe<'_>]) -> Result<FingerprintReport> {
    config.validate().map_err(FingerprintError::Config)?;

    let host = detect_os();
    tracing::debug!(host = host.name(), "probing identifier sources");

    let ids = collect_identifiers(probes, host);
    if ids.is_empty() {
        tracing::warn!("no machine identifiers found, fingerprint will not be unique");
    }

    let report = FingerprintReport::new(compute_fingerprint(&ids), Utc::now());
    write_report(&report, &config.output_file)?;

    Ok(report)
}
