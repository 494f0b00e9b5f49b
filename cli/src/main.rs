use clap::Parser;
use tracing_subscriber::EnvFilter;

mod decipher;
mod error;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "mitate")]
#[command(version, about = "Describe keys, certificates, tokens and UUIDs", long_about = None)]
struct Cli {
    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    config: decipher::Config,
}

fn initialize_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.verbose);
    decipher::execute(cli.config)
}
