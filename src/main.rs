//! Resistor Code - resistor color-band calculator
//!
//! Decodes band colors into resistance and tolerance, and encodes a
//! resistance into the closest band colors.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resistor_code::cli::{
    BandsArgs, CliResult, ColorsArgs, ConfigArgs, DecodeArgs, EncodeArgs, ExitCode,
};
use resistor_code::constants::APP_BINARY_NAME;

/// Resistor color-code calculator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode band colors into resistance and tolerance
    Decode(DecodeArgs),
    /// Find the band colors closest to a resistance
    Encode(EncodeArgs),
    /// List band colors and the values they encode
    Colors(ColorsArgs),
    /// Show each band position and the colors allowed there
    Bands(BandsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Decode(args) => args.execute(),
            Self::Encode(args) => args.execute(),
            Self::Colors(args) => args.execute(),
            Self::Bands(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
