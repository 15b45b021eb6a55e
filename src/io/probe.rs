use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors encountered when loading probe description files
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error reading probe file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("probe parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported probe file format `{0}` (expected a .json probe)")]
    UnsupportedFormat(String),
}

/// An electrode probe description in the Kilosort4 JSON probe format.
///
/// The launcher itself only consults [`n_chan`](Self::n_chan); the channel map
/// and contact geometry are carried through untouched so the descriptor handed
/// to the sorter is the one that was actually loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeDescriptor {
    #[serde(rename = "chanMap")]
    pub chan_map: Vec<u32>,
    pub xc: Vec<f64>,
    pub yc: Vec<f64>,
    pub kcoords: Vec<f64>,
    pub n_chan: u32,
    /// Any further keys present in the probe file, kept so re-encoding the
    /// descriptor reproduces the full record and not just the known fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Abstraction over the probe-loading step so the driver can be exercised
/// with a substitute in tests.
pub trait ProbeLoader {
    fn load(&self, path: &Path) -> Result<ProbeDescriptor, ProbeError>;
}

/// Loads probes from Kilosort4-style `.json` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonProbeLoader;

impl ProbeLoader for JsonProbeLoader {
    fn load(&self, path: &Path) -> Result<ProbeDescriptor, ProbeError> {
        load_probe(path)
    }
}

/// Load a probe description from a `.json` probe file.
///
/// Field values are not re-validated here: a missing or ill-typed field
/// surfaces as a deserialization error, and semantic checks (channel layout
/// versus the binary data) are the sorter's concern.
pub fn load_probe(path: &Path) -> Result<ProbeDescriptor, ProbeError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {}
        other => {
            return Err(ProbeError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ));
        }
    }

    let raw = fs::read_to_string(path).map_err(|source| ProbeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let probe: ProbeDescriptor = serde_json::from_str(&raw)?;
    info!(
        "Loaded probe {:?}: {} channels, {} mapped contacts",
        path,
        probe.n_chan,
        probe.chan_map.len()
    );
    Ok(probe)
}
