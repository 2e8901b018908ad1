pub mod init;
pub mod probe;
pub mod seed;
pub mod serve;
pub mod stats;
pub mod teachers;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Rebuild the database with the sample dataset")]
    Seed,
    #[command(about = "Start the HTTP booking server")]
    Serve(serve::ServeArgs),
    #[command(about = "List registered teachers")]
    Teachers,
    #[command(about = "Print lesson statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Exercise the endpoints of a running server")]
    Probe(probe::ProbeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Seed => seed::cmd(),
            Commands::Serve(args) => serve::cmd(args),
            Commands::Teachers => teachers::cmd(),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Probe(args) => probe::cmd(args),
        }
    }
}
