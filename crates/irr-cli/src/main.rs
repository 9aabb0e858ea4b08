//! IRR CLI - Inter-rater reliability for two raters
//!
//! Usage:
//!   irr compute [--config FILE | --dir DIR] [--json]   - Compute agreement
//!   irr check   [--config FILE | --dir DIR] [--json]   - Validate inputs only
//!   irr init [dir]                                     - Scaffold a project

use clap::{Parser, Subcommand};
use irr_cli::commands::{CheckCommand, ComputeCommand, InitCommand};

#[derive(Parser)]
#[command(name = "irr")]
#[command(about = "IRR - Cohen's kappa and Krippendorff's alpha for multi-label coding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute agreement between two raters
    Compute(ComputeCommand),
    /// Validate vocabulary and rater files without computing
    Check(CheckCommand),
    /// Initialize a new IRR project
    Init(InitCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    irr_cli::logging::init(cli.verbose);

    match cli.command {
        Commands::Compute(cmd) => cmd.run(cli.json).await,
        Commands::Check(cmd) => cmd.run(cli.json).await,
        Commands::Init(cmd) => cmd.run(),
    }
}
