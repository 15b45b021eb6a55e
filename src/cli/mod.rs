//! Command Line Interface (CLI) layer for kilorun.
//!
//! This module defines argument handling (`args`), the invalid-invocation
//! report (`errors`), and the orchestration logic (`runner`) that wires the
//! two positional arguments to the launch sequence exposed via
//! `kilorun::api`.
//!
//! If you are embedding kilorun into another application, prefer using the
//! high-level `kilorun::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
