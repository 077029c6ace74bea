mod commands;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{interface::InterfaceArgs, parse::ParseArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rosidl-dump", about = "Dump ROS 2 IDL files as JSON")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed IDL tree of one file
    Parse(ParseArgs),
    /// Print the interface model of one or more `<base_dir>:<relative_path>` files
    Interface(InterfaceArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse(args) => args.run(),
        Commands::Interface(args) => args.run(),
    }
}
