use crate::commands::{build_editor, read_workout, write_workout};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Workout JSON file
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn normalize(args: NormalizeArgs, config: &Config) -> Result<()> {
    let workout = read_workout(&args.input)?;
    let missing = workout.missing_id_count();

    let editor = build_editor(config);
    let normalized = editor.normalize(&workout);
    write_workout(&normalized, args.output.as_deref())?;

    if args.output.is_some() {
        if missing == 0 {
            println!("{} {} already normalized", "✓".green(), args.input.display());
        } else {
            println!(
                "{} {} - assigned {} id(s)",
                "✓".green(),
                args.input.display(),
                missing
            );
        }
    }

    Ok(())
}
