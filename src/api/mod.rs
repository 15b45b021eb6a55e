//! High-level, ergonomic library API: the launch sequence behind the CLI.
//! Prefer [`run_kilosort4`] when embedding; [`run_spike_sorting`] accepts
//! substitute collaborators for the probe loader and the sorter.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::io::{JsonProbeLoader, ProbeLoader};
use crate::sorter::{Kilosort4Command, Settings, SpikeSorter};

/// Name of the results subdirectory created inside the data directory.
pub const OUTPUT_SUBDIR: &str = "kilosort4";

/// The directory the sorter writes its results into.
pub fn output_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(OUTPUT_SUBDIR)
}

/// Run the full launch sequence with injectable collaborators.
///
/// Steps, in order: load the probe, derive the settings record from it,
/// create `<data_dir>/kilosort4` (idempotently, with parents), then hand
/// settings and probe to the sorter. The first failing step aborts the
/// sequence; nothing is retried or cleaned up.
pub fn run_spike_sorting(
    data_dir: &Path,
    probe_path: &Path,
    loader: &dyn ProbeLoader,
    sorter: &dyn SpikeSorter,
) -> Result<()> {
    let probe = loader.load(probe_path)?;
    let settings = Settings::for_probe(data_dir, &probe);

    let results_dir = output_dir(data_dir);
    fs::create_dir_all(&results_dir)?;
    info!("Results directory: {:?}", results_dir);

    sorter.run(&settings, &probe)?;
    info!("Sorter finished for {:?}", data_dir);
    Ok(())
}

/// Run Kilosort4 over `data_dir` using the probe described at `probe_path`.
pub fn run_kilosort4(data_dir: &Path, probe_path: &Path) -> Result<()> {
    run_spike_sorting(
        data_dir,
        probe_path,
        &JsonProbeLoader,
        &Kilosort4Command::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::io::{ProbeDescriptor, ProbeError};
    use crate::sorter::SorterError;
    use std::cell::RefCell;
    use std::io::Write;

    struct StubLoader {
        n_chan: u32,
    }

    impl ProbeLoader for StubLoader {
        fn load(&self, _path: &Path) -> std::result::Result<ProbeDescriptor, ProbeError> {
            Ok(ProbeDescriptor {
                chan_map: (0..self.n_chan).collect(),
                xc: vec![0.0; self.n_chan as usize],
                yc: vec![0.0; self.n_chan as usize],
                kcoords: vec![0.0; self.n_chan as usize],
                n_chan: self.n_chan,
                extra: serde_json::Map::new(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingSorter {
        calls: RefCell<Vec<Settings>>,
    }

    impl SpikeSorter for RecordingSorter {
        fn run(
            &self,
            settings: &Settings,
            probe: &ProbeDescriptor,
        ) -> std::result::Result<(), SorterError> {
            assert_eq!(settings.n_chan_bin, probe.n_chan);
            self.calls.borrow_mut().push(settings.clone());
            Ok(())
        }
    }

    #[test]
    fn sorter_receives_settings_matching_the_probe() {
        let data_dir = tempfile::tempdir().unwrap();
        let sorter = RecordingSorter::default();

        run_spike_sorting(
            data_dir.path(),
            Path::new("ignored.json"),
            &StubLoader { n_chan: 64 },
            &sorter,
        )
        .unwrap();

        let calls = sorter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].data_dir, data_dir.path());
        assert_eq!(calls[0].n_chan_bin, 64);
        assert!(output_dir(data_dir.path()).is_dir());
    }

    #[test]
    fn directory_creation_is_idempotent_across_runs() {
        let data_dir = tempfile::tempdir().unwrap();
        let sorter = RecordingSorter::default();
        let loader = StubLoader { n_chan: 16 };

        for _ in 0..2 {
            run_spike_sorting(data_dir.path(), Path::new("ignored.json"), &loader, &sorter)
                .unwrap();
        }
        assert_eq!(sorter.calls.borrow().len(), 2);
    }

    #[test]
    fn missing_probe_aborts_before_any_side_effect() {
        let data_dir = tempfile::tempdir().unwrap();
        let sorter = RecordingSorter::default();

        let result = run_spike_sorting(
            data_dir.path(),
            &data_dir.path().join("absent.json"),
            &JsonProbeLoader,
            &sorter,
        );

        assert!(matches!(result, Err(Error::Probe(_))));
        assert!(sorter.calls.borrow().is_empty());
        assert!(!output_dir(data_dir.path()).exists());
    }

    #[test]
    fn uncreatable_results_dir_aborts_before_delegation() {
        let parent = tempfile::tempdir().unwrap();
        // Occupy the data_dir path with a regular file so create_dir_all fails.
        let data_dir = parent.path().join("run1");
        let mut blocker = std::fs::File::create(&data_dir).unwrap();
        blocker.write_all(b"not a directory").unwrap();

        let sorter = RecordingSorter::default();
        let result = run_spike_sorting(
            &data_dir,
            Path::new("ignored.json"),
            &StubLoader { n_chan: 8 },
            &sorter,
        );

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(sorter.calls.borrow().is_empty());
    }
}
