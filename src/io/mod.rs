//! I/O layer for reading probe description files.
//! Provides the `probe` reader for Kilosort4-style JSON probes and the
//! `ProbeLoader` abstraction the driver delegates through.
pub mod probe;
pub use probe::{JsonProbeLoader, ProbeDescriptor, ProbeError, ProbeLoader, load_probe};
