/// Platform-specific utilities
///
/// Detect the host OS so identifier probes can be gated per platform

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Windows,
    MacOS,
    Other,
}

/// Detect current operating system
pub fn detect_os() -> Os {
    #[cfg(target_os = "linux")]
    return Os::Linux;

    #[cfg(target_os = "windows")]
    return Os::Windows;

    #[cfg(target_os = "macos")]
    return Os::MacOS;

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    return Os::Other;
}

impl Os {
    pub fn name(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::MacOS => "macos",
            Os::Other => "other",
        }
    }
}
