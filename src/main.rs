/// Machine fingerprint request generator
///
/// Collects host identifiers, hashes them into a fingerprint and writes
/// `machine_request.json` for the license provider to issue a license
/// bound to this machine.

// Module declarations
mod collection;
mod config;
mod error;
mod utils;

use std::process::exit;
use config::Config;

fn main() {
    let config = Config::default();

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level().unwrap_or(tracing::Level::WARN))
        .with_writer(std::io::stderr)
        .init();

    println!("\nCollecting machine identifiers...\n");

    match collection::run(&config) {
        Ok(report) => {
            tracing::debug!(fingerprint = %report.fingerprint, "fingerprint generated");
            println!(
                "\nMachine data file is generated as {}",
                config.output_file.display()
            );
            println!("\nSend this file to the license provider.");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to generate machine data file");
            exit(1);
        }
    }
}
