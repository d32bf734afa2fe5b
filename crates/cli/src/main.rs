use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;
mod password;

use commands::Commands;

#[derive(Parser)]
#[command(name = "skeletonkey")]
#[command(about = "Provision and verify skeleton keys held in a shared cache", long_about = None)]
#[command(version)]
struct Cli {
    /// Cache gateway URL (overrides SKELETONKEY_ENDPOINT and the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Tenant identifier (overrides SKELETONKEY_TENANT and the config file)
    #[arg(long, global = true)]
    tenant: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use a throwaway in-process cache instead of the gateway
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    logging::init()?;

    let cli = Cli::parse();
    let context = commands::Context::resolve(&cli)?;
    cli.command.execute(&context).await
}
