use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ssid::{Ssid, SsidConfig};
use std::net::{IpAddr, SocketAddr};

/// Command-line interface for the `idgen` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "idgen",
    version,
    about = "Generates short, time-ordered 63-bit IDs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generates a batch of IDs and prints them, one per line.
    Generate(GenerateArgs),

    /// Starts the HTTP server.
    Server(ServerArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The number of IDs to generate.
    ///
    /// Batches are capped by the sequence field: at most 32767 IDs per call.
    #[arg(short, long, default_value_t = 1)]
    pub count: u16,

    /// The generator ID encoded into every ID (0-255).
    #[arg(short, long, default_value_t = 0)]
    pub generator: u16,

    /// Pick a random generator ID instead of using `--generator`.
    #[arg(short = 'r', long = "generator-rand", default_value_t = false)]
    pub generator_rand: bool,
}

impl GenerateArgs {
    /// Builds the generator config, sampling the generator ID when
    /// `--generator-rand` is set.
    pub fn config(&self) -> SsidConfig {
        let generator_id = if self.generator_rand {
            random_generator_id()
        } else {
            self.generator
        };
        SsidConfig::new(generator_id)
    }
}

/// Uniformly samples a generator ID that fits the generator ID field.
pub fn random_generator_id() -> u16 {
    rand::random_range(0..=Ssid::GENERATOR_ID_MASK as u16)
}

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// IP address to bind.
    #[arg(long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl TryFrom<ServerArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: ServerArgs) -> Result<Self, Self::Error> {
        let ip: IpAddr = args
            .host
            .parse()
            .with_context(|| format!("invalid host address `{}`", args.host))?;

        Ok(Self {
            addr: SocketAddr::new(ip, args.port),
        })
    }
}
