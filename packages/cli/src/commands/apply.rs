use crate::commands::{build_editor, read_workout, write_workout};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use workout_editor::{validate, EditSession, EditorError, Mutation};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Workout JSON file
    pub input: PathBuf,

    /// JSON array of mutations, e.g. [{"op": "add_block"}]
    #[arg(short, long)]
    pub script: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Apply the whole script as one step; nothing is written if any mutation fails
    #[arg(long)]
    pub atomic: bool,
}

pub fn apply(args: ApplyArgs, config: &Config) -> Result<()> {
    let workout = read_workout(&args.input)?;
    let script = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read {}", args.script.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid mutation script in {}", args.script.display()))?;

    let mut session = EditSession::with_editor(build_editor(config), workout)
        .with_undo_levels(config.undo_levels);

    let total = mutations.len();
    if args.atomic {
        let description = args.script.display().to_string();
        session
            .apply_all(mutations, Some(description.as_str()))
            .context("Script rolled back")?;
    } else {
        let mut skipped = 0;
        for (index, mutation) in mutations.into_iter().enumerate() {
            let name = mutation.name();
            let result = session
                .apply(mutation)
                .with_context(|| format!("mutation #{} ({})", index + 1, name))?;
            if !result.changed {
                skipped += 1;
                tracing::debug!("mutation #{} ({}) changed nothing", index + 1, name);
            }
        }
        if skipped > 0 {
            eprintln!("{} {} mutation(s) changed nothing", "⚠️".yellow(), skipped);
        }
    }

    validate(session.workout()).map_err(EditorError::from)?;
    write_workout(session.workout(), args.output.as_deref())?;

    if let Some(output) = &args.output {
        println!(
            "{} Applied {} mutation(s) → {} (version {})",
            "✓".green(),
            total,
            output.display(),
            session.version()
        );
    }

    Ok(())
}
