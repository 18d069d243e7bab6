mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, check, init, normalize, show, ApplyArgs, CheckArgs, InitArgs, NormalizeArgs, ShowArgs,
};
use config::Config;
use tracing::level_filters::LevelFilter;

/// Workout CLI - edit hierarchical workout documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "workout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every applied mutation (overrides the configured log level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default workout.config.json
    Init(InitArgs),

    /// Fill in missing ids
    Normalize(NormalizeArgs),

    /// Check id invariants of one file or a directory of .json files
    Check(CheckArgs),

    /// Apply a script of mutations to a workout
    Apply(ApplyArgs),

    /// Print the block/superset/exercise tree
    Show(ShowArgs),
}

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        config.log_level.parse().unwrap_or(LevelFilter::WARN)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Normalize(args) => normalize(args, &config),
        Command::Check(args) => check(args),
        Command::Apply(args) => apply(args, &config),
        Command::Show(args) => show(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
