use anyhow::Result;
use clap::Parser;
use cursogen_core::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        2.. => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default()?,
    };

    match cli.command {
        Commands::Process(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::process::execute(args, config))?;
        }
        Commands::Status(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::status::execute(args, config))?;
        }
        Commands::Show(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::show::execute(args, config))?;
        }
        Commands::Feedback(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::commands::feedback::execute(args, config))?;
        }
    }

    Ok(())
}
