#![doc = r#"
kilorun — a launcher for the Kilosort4 spike sorter.

This crate provides the glue between a raw electrophysiology recording and an
external spike-sorting run: it loads an electrode probe description, derives
the channel count, assembles the sorter settings, prepares the results
directory, and delegates to the sorter. All substantive computation (spike
detection, clustering, template matching) happens inside the external sorter;
this crate deliberately performs none of it. It powers the kilorun CLI and can
be embedded in your own Rust applications.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> kilorun::Result<()> {
    kilorun::run_kilosort4(Path::new("/data/run1"), Path::new("/probes/probeA.json"))
}
```

Substituting collaborators
--------------------------
The probe loader and the sorter sit behind narrow traits so the launch logic
can be driven with stand-ins:

```rust,no_run
use std::path::Path;
use kilorun::{run_spike_sorting, JsonProbeLoader, Kilosort4Command};

fn main() -> kilorun::Result<()> {
    let sorter = Kilosort4Command::with_program("/opt/kilosort4/bin/kilosort4");
    run_spike_sorting(
        Path::new("/data/run1"),
        Path::new("/probes/probeA.json"),
        &JsonProbeLoader,
        &sorter,
    )
}
```

Error handling
--------------
All public functions return `kilorun::Result<T>`; match on `kilorun::Error`
to handle specific cases, e.g. probe-loader or sorter errors. Failures are
fatal by design: nothing is retried, and partially created state is left in
place for inspection.

Useful modules
--------------
- [`api`] — high-level entry points and the results-directory convention.
- [`io`] — probe descriptor and the JSON probe loader.
- [`sorter`] — the `Settings` record and the delegation seam.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod error;
pub mod io;
pub mod sorter;

// Curated public API surface
pub use api::{OUTPUT_SUBDIR, output_dir, run_kilosort4, run_spike_sorting};
pub use error::{Error, Result};
pub use io::{JsonProbeLoader, ProbeDescriptor, ProbeError, ProbeLoader, load_probe};
pub use sorter::{Kilosort4Command, Settings, SorterError, SpikeSorter};
