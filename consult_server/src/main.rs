use clap::Parser;
use consult_core::{Config, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "consult-server")]
#[command(about = "Fitness and nutrition consultation HTTP service", long_about = None)]
struct Cli {
    /// Config file (defaults to the standard config path)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override listen host
    #[arg(long)]
    host: Option<String>,

    /// Override listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    consult_core::logging::init_with_level(&config.logging.level);

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    consult_server::serve(&config.server).await
}
