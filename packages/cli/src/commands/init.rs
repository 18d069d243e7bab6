use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Rest between superset rounds for new supersets, in seconds
    #[arg(long)]
    pub superset_rest: Option<u32>,

    /// Exercise type given to new exercises
    #[arg(long)]
    pub exercise_type: Option<String>,

    /// Replace an existing config file
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} is already present (pass --force to replace it)",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        return Ok(());
    }

    let config = initial_config(&args);
    write_config(&config_path, &config)?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    println!(
        "   new supersets rest {}s, new exercises {}x{} ({})",
        config.defaults.superset_rest_sec,
        config.defaults.exercise_sets,
        config.defaults.exercise_reps,
        config.defaults.exercise_type
    );

    Ok(())
}

fn initial_config(args: &InitArgs) -> Config {
    let mut config = Config::default();
    if let Some(rest) = args.superset_rest {
        config.defaults.superset_rest_sec = rest;
    }
    if let Some(kind) = &args.exercise_type {
        config.defaults.exercise_type = kind.clone();
    }
    config
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))
}
