//! kilorun CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: check arity, dispatch to
//! the launch sequence, and exit with appropriate status. For programmatic
//! use, prefer the library API (`kilorun::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().collect();
    let args = match cli::CliArgs::from_argv(&argv) {
        Ok(args) => args,
        Err(report) => {
            print!("{report}");
            std::process::exit(1);
        }
    };
    cli::run(args)
}
