#![doc = include_str!("../README.md")]

mod config;
mod generate;
mod http;
mod telemetry;

use clap::Parser;
use config::{Cli, Command, ServerConfig};
use telemetry::init_telemetry;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_telemetry()?;

    match cli.command {
        Command::Generate(args) => generate::run(&args, &mut std::io::stdout().lock()),
        Command::Server(args) => {
            let config = ServerConfig::try_from(args)?;
            http::serve(config).await
        }
    }
}
