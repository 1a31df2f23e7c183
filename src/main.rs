//! appgen - Generate OpenShift application manifests from a descriptor
//!
//! Reads a normalized application descriptor and prints the image stream,
//! build pipeline, deployment, service, and route manifests it implies.
//! Nothing is submitted anywhere; pipe the output into whatever applies
//! manifests to your cluster.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use appgen::cli::{OutputFormat, handle_generate, handle_route, init_logging};

/// Generate OpenShift application manifests from a descriptor
#[derive(Parser, Debug)]
#[command(name = "appgen")]
#[command(about = "Generate OpenShift application manifests from a descriptor", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full manifest set for an application descriptor
    Generate {
        /// Descriptor file (YAML or JSON)
        #[arg(long, short = 'f')]
        file: PathBuf,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "yaml")]
        output: OutputFormat,
    },
    /// Create a route for an existing service
    Route {
        /// Route request file (YAML or JSON)
        #[arg(long, short = 'f')]
        file: PathBuf,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "yaml")]
        output: OutputFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);

    match args.command {
        Command::Generate { file, output } => handle_generate(&file, output),
        Command::Route { file, output } => handle_route(&file, output),
    }
}
