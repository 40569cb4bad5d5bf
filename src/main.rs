mod config;
mod convert;

use clap::Parser;
use config::Cli;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("certline=info".parse()?),
        )
        .init();

    let config = Cli::parse().into_config();
    info!(
        source = %config.source_path.display(),
        dest = %config.dest_path.display(),
        "converting certificate chain"
    );

    let summary = convert::convert(&config, &mut std::io::stdout().lock())
        .inspect_err(|e| tracing::error!("conversion failed: {e}"))?;

    info!(
        bytes_in = summary.bytes_in,
        bytes_out = summary.bytes_out,
        newlines = summary.newlines,
        "conversion finished"
    );
    Ok(())
}
