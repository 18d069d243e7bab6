pub mod apply;
pub mod check;
pub mod init;
pub mod normalize;
pub mod show;

pub use apply::{apply, ApplyArgs};
pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use normalize::{normalize, NormalizeArgs};
pub use show::{show, ShowArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use workout_editor::{Editor, IdGenerator, Workout};

/// Read and parse a workout JSON file
pub fn read_workout(path: &Path) -> Result<Workout> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("Invalid workout JSON in {}", path.display()))
}

/// Write pretty JSON to `output`, or to stdout when no output is given
pub fn write_workout(workout: &Workout, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(workout)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn build_editor(config: &Config) -> Editor<IdGenerator> {
    Editor::new().with_defaults(config.defaults.clone())
}
