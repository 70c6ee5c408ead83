/// Utility modules
pub mod platform;

pub use platform::{detect_os, Os};
