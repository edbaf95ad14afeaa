use std::process::ExitCode;

use clap::Parser;

use isolated_serve::config::{Cli, ServerConfig};
use isolated_serve::lifecycle::{shutdown_channel, signals, Server};
use isolated_serve::observability::logging;
use isolated_serve::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    // Argument errors exit with clap's usage status before anything else runs.
    let cli = Cli::parse();

    logging::init();

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Fatal error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ServeError> {
    let config = ServerConfig::from_cli(&cli)?;

    tracing::info!(
        bind_address = %config.bind_address(),
        port = config.port(),
        served_root = %config.served_root().display(),
        "Configuration loaded"
    );

    // Handlers go in before the socket exists so an early Ctrl+C still exits 0.
    let (trigger, shutdown) = shutdown_channel();
    if let Err(err) = signals::install(trigger) {
        tracing::warn!(error = %err, "Failed to install signal handlers");
    }

    let server = Server::bind(config).await?;
    println!("{}", server.banner());

    server.run(shutdown).await
}
