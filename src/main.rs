use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// jungdam - contact form relay
#[derive(Parser)]
#[command(name = "jungdam")]
#[command(about = "Relays website contact submissions by email", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit the contact form from the terminal
    Send(cli::send::SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = jungdam::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    jungdam::observability::init_observability(
        "jungdam",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Send(args) => cli::send::send(config, args).await,
    }
}
