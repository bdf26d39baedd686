use std::process::ExitCode;

use clap::Parser;
use fontshelf_lib::bootstrap::resolve_config;
use fontshelf_lib::bootstrap::tracing::init_tracing_subscriber;
use fontshelf_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.clone(), cli.data_dir.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = config.log_to_file.then(|| config.data_dir.join("logs"));
    if let Err(err) = init_tracing_subscriber(log_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match cli::run(cli, &config).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
