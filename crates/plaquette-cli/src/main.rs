//! Plaquette Command-Line Interface
//!
//! Builds surface-code patch circuits and prints them.
//!
//! ```text
//!   A   D───A───D
//!       │   │   │
//!   D───A───D───A
//!   │   │   │
//!   A───D───A
//!
//!        P L A Q U E T T E
//!   Surface-code patch circuits
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{cycle, encode, memory, version};

/// Plaquette - surface-code encoding and stabilizer measurement circuits
#[derive(Parser)]
#[command(name = "plaquette")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// How a generated circuit is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status lines and a text diagram
    Text,
    /// The circuit as JSON, nothing else on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the logical |0> preparation circuit
    Encode {
        /// Layout file (YAML or JSON); defaults to the distance-2 patch
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Build one stabilizer measurement cycle
    Cycle {
        /// Layout file (YAML or JSON); defaults to the distance-2 patch
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Build a memory experiment: encoding followed by repeated cycles
    Memory {
        /// Number of stabilizer rounds
        #[arg(short, long, default_value = "3")]
        rounds: usize,

        /// Layout file (YAML or JSON); defaults to the distance-2 patch
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode { layout, format } => encode::execute(layout.as_deref(), format),

        Commands::Cycle { layout, format } => cycle::execute(layout.as_deref(), format),

        Commands::Memory {
            rounds,
            layout,
            format,
        } => memory::execute(rounds, layout.as_deref(), format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
