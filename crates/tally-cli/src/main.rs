//! tally: Checksum registry generator

use clap::{Parser, Subcommand};
use tally_cli::commands::{self, CheckArgs, RegisterArgs};
use tally_cli::logging::setup_logging;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Checksum registry generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a JSON summary on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Defaults to `register` with the built-in directory list
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a <name>-registry.txt file next to each directory
    Register(RegisterArgs),

    /// Verify a directory against its registry file
    Check(CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Some(Commands::Register(args)) => commands::register::run(&args, cli.json)?,
        Some(Commands::Check(args)) => commands::check::run(&args, cli.json)?,
        None => commands::register::run(&RegisterArgs::default(), cli.json)?,
    }

    Ok(())
}
