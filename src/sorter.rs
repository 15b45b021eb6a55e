//! The delegation seam to the external spike sorter.
//! Defines the `Settings` record handed to the sorter, the `SpikeSorter`
//! trait, and the subprocess-backed `Kilosort4Command` implementation.
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::io::ProbeDescriptor;

/// Errors encountered while delegating to the external sorter
#[derive(Debug, Error)]
pub enum SorterError {
    #[error("failed to launch sorter program `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to stage probe hand-off file: {0}")]
    Staging(#[from] std::io::Error),
    #[error("failed to encode probe hand-off file: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("sorter exited unsuccessfully: {status}")]
    Failed { status: ExitStatus },
}

/// The settings record passed to the sorter alongside the probe.
///
/// Constructed once via [`Settings::for_probe`], which ties `n_chan_bin` to
/// the probe descriptor the sorter will actually receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub n_chan_bin: u32,
}

impl Settings {
    pub fn for_probe(data_dir: &Path, probe: &ProbeDescriptor) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            n_chan_bin: probe.n_chan,
        }
    }
}

/// Abstraction over the external sorting entry point.
///
/// The call is synchronous and may run for an unbounded duration; the sorter
/// owns everything it writes under `<data_dir>/kilosort4`.
pub trait SpikeSorter {
    fn run(&self, settings: &Settings, probe: &ProbeDescriptor) -> Result<(), SorterError>;
}

/// Runs the Kilosort4 sorter as an external program, blocking until it exits.
///
/// The probe descriptor is staged into a temporary JSON file so the child can
/// re-load the exact descriptor this process parsed.
#[derive(Debug, Clone)]
pub struct Kilosort4Command {
    program: OsString,
}

impl Default for Kilosort4Command {
    fn default() -> Self {
        Self {
            program: OsString::from("kilosort4"),
        }
    }
}

impl Kilosort4Command {
    /// Use a different sorter executable than the default `kilosort4`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SpikeSorter for Kilosort4Command {
    fn run(&self, settings: &Settings, probe: &ProbeDescriptor) -> Result<(), SorterError> {
        let mut probe_file = tempfile::Builder::new()
            .prefix("kilorun-probe-")
            .suffix(".json")
            .tempfile()?;
        serde_json::to_writer(&mut probe_file, probe)?;
        probe_file.flush().map_err(SorterError::Staging)?;

        info!(
            "Delegating to sorter {:?}: data_dir={:?} n_chan_bin={}",
            self.program, settings.data_dir, settings.n_chan_bin
        );

        let status = Command::new(&self.program)
            .arg("--data-dir")
            .arg(&settings.data_dir)
            .arg("--probe")
            .arg(probe_file.path())
            .arg("--n-chan-bin")
            .arg(settings.n_chan_bin.to_string())
            .status()
            .map_err(|source| SorterError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SorterError::Failed { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(n_chan: u32) -> ProbeDescriptor {
        ProbeDescriptor {
            chan_map: (0..n_chan).collect(),
            xc: vec![0.0; n_chan as usize],
            yc: vec![0.0; n_chan as usize],
            kcoords: vec![0.0; n_chan as usize],
            n_chan,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn settings_track_the_probe_channel_count() {
        let settings = Settings::for_probe(Path::new("/data/run1"), &probe(64));
        assert_eq!(settings.data_dir, Path::new("/data/run1"));
        assert_eq!(settings.n_chan_bin, 64);
    }

    #[test]
    fn successful_child_exit_maps_to_ok() {
        let sorter = Kilosort4Command::with_program("true");
        let settings = Settings::for_probe(Path::new("/tmp"), &probe(4));
        sorter.run(&settings, &probe(4)).unwrap();
    }

    #[test]
    fn failing_child_exit_maps_to_failed() {
        let sorter = Kilosort4Command::with_program("false");
        let settings = Settings::for_probe(Path::new("/tmp"), &probe(4));
        match sorter.run(&settings, &probe(4)) {
            Err(SorterError::Failed { status }) => assert!(!status.success()),
            other => panic!("expected sorter failure, got {other:?}"),
        }
    }

    #[test]
    fn unknown_program_maps_to_launch_error() {
        let sorter = Kilosort4Command::with_program("kilorun-no-such-sorter");
        let settings = Settings::for_probe(Path::new("/tmp"), &probe(4));
        match sorter.run(&settings, &probe(4)) {
            Err(SorterError::Launch { program, .. }) => {
                assert_eq!(program, "kilorun-no-such-sorter");
            }
            other => panic!("expected launch error, got {other:?}"),
        }
    }
}
