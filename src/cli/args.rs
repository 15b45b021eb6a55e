use std::path::PathBuf;

use super::errors::InvalidInvocation;

/// Positional arguments accepted by the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Directory containing the raw binary recording
    pub data_dir: PathBuf,
    /// Path to the probe description file
    pub probe_path: PathBuf,
}

impl CliArgs {
    /// Parse a full argv slice (program name at index 0).
    ///
    /// Exactly two user-supplied arguments are accepted; any other count
    /// yields the usage report instead.
    pub fn from_argv(argv: &[String]) -> Result<Self, InvalidInvocation> {
        match argv {
            [_, data_dir, probe_path] => Ok(Self {
                data_dir: PathBuf::from(data_dir),
                probe_path: PathBuf::from(probe_path),
            }),
            _ => Err(InvalidInvocation::new(argv)),
        }
    }
}
