use tracing::info;
use tracing_subscriber::EnvFilter;

use kilorun::api;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Data directory: {:?}", args.data_dir);
    info!("Probe file: {:?}", args.probe_path);

    api::run_kilosort4(&args.data_dir, &args.probe_path)?;
    Ok(())
}
