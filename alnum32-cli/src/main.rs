mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "alnum32")]
#[command(about = "Alnum32 - lowercase alphanumeric Base32 codec", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode raw bytes into alnum32 text
    Encode {
        /// Input file with raw bytes
        #[arg(short, long)]
        input: String,

        /// Output file for the encoded text (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode alnum32 text back into raw bytes
    Decode {
        /// Input file with encoded text
        #[arg(short, long)]
        input: String,

        /// Output file for the decoded bytes (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode { input, output } => commands::encode::execute(&input, output.as_deref()),

        Commands::Decode { input, output } => commands::decode::execute(&input, output.as_deref()),
    }
}
