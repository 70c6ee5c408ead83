/// Identifier sources probed on the host
use std::fs;
use std::path::Path;

use crate::utils::Os;

/// One identifier source: read `path` as `name` when the host runs `os`
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub os: Os,
}

/// Sources in probe order. The order feeds the fingerprint input, so new
/// sources go at the end.
pub const PROBES: &[Probe<'static>] = &[
    // Hardware UUID from the DMI tables, stable across reinstalls
    Probe {
        name: "product_uuid",
        path: "/sys/class/dmi/id/product_uuid",
        os: Os::Linux,
    },
    Probe {
        name: "machine_id",
        path: "/etc/machine-id",
        os: Os::Linux,
    },
];

/// Identifiers that were present, in probe order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    entries: Vec<(String, String)>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identifier; empty values are dropped
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read an identifier file, trimmed
///
/// Any I/O failure (missing file, permission denied, not UTF-8) and an
/// all-whitespace file both come back as `None`.
pub fn read_identifier(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => {
            let value = contents.trim();
            if value.is_empty() {
                tracing::debug!(path = %path.display(), "identifier source is empty");
                None
            } else {
                Some(value.to_string())
            }
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "identifier source unreadable");
            None
        }
    }
}

/// Probe every source that applies to `host`, in order
pub fn collect_identifiers(probes: &[Probe<'_>], host: Os) -> IdentifierSet {
    let mut ids = IdentifierSet::new();

    for probe in probes {
        if probe.os != host {
            tracing::debug!(
                name = probe.name,
                wants = probe.os.name(),
                host = host.name(),
                "skipping probe for other platform"
            );
            continue;
        }

        if let Some(value) = read_identifier(probe.path) {
            tracing::info!(name = probe.name, "identifier collected");
            ids.push(probe.name, value);
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn temp_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_identifier_trims() {
        let file = temp_with("  4c4c4544-0042-3510-8052-b4c04f564433\n");
        assert_eq!(
            read_identifier(file.path()).as_deref(),
            Some("4c4c4544-0042-3510-8052-b4c04f564433")
        );
    }

    #[test]
    fn test_read_identifier_missing_and_blank() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_identifier(dir.path().join("nope")), None);

        let blank = temp_with(" \n\t\n");
        assert_eq!(read_identifier(blank.path()), None);

        // A directory cannot be read as text
        assert_eq!(read_identifier(dir.path()), None);
    }

    #[test]
    fn test_collect_keeps_probe_order() {
        let uuid = temp_with("abc\n");
        let mid = temp_with("def\n");
        let uuid_path = uuid.path().to_str().unwrap();
        let mid_path = mid.path().to_str().unwrap();

        let probes = [
            Probe { name: "product_uuid", path: uuid_path, os: Os::Linux },
            Probe { name: "machine_id", path: mid_path, os: Os::Linux },
        ];

        let ids = collect_identifiers(&probes, Os::Linux);
        let collected: Vec<_> = ids.iter().collect();
        assert_eq!(collected, vec![("product_uuid", "abc"), ("machine_id", "def")]);
    }

    #[test]
    fn test_collect_skips_absent_sources() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("product_uuid");
        let mid = temp_with("def");

        let probes = [
            Probe { name: "product_uuid", path: missing.to_str().unwrap(), os: Os::Linux },
            Probe { name: "machine_id", path: mid.path().to_str().unwrap(), os: Os::Linux },
        ];

        let ids = collect_identifiers(&probes, Os::Linux);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids.get("product_uuid"), None);
        assert_eq!(ids.get("machine_id"), Some("def"));
    }

    #[test]
    fn test_collect_on_other_platform_is_empty() {
        let ids = collect_identifiers(PROBES, Os::Windows);
        assert!(ids.is_empty());

        let ids = collect_identifiers(PROBES, Os::Other);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_default_probe_order() {
        let names: Vec<_> = PROBES.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["product_uuid", "machine_id"]);
        assert!(PROBES.iter().all(|p| p.os == Os::Linux));
    }

    #[test]
    fn test_push_drops_empty_values() {
        let mut ids = IdentifierSet::new();
        ids.push("product_uuid", "");
        assert!(ids.is_empty());
    }
}
