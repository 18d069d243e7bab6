use crate::commands::read_workout;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use workout_editor::{Block, Exercise};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Workout JSON file
    pub input: PathBuf,

    /// Print node ids next to each entry
    #[arg(long)]
    pub ids: bool,
}

pub fn show(args: ShowArgs) -> Result<()> {
    let workout = read_workout(&args.input)?;

    let title = if workout.title.is_empty() {
        "(untitled)"
    } else {
        workout.title.as_str()
    };
    println!("{} {}", title.bold(), format!("[{}]", workout.source).dimmed());

    for (b, block) in workout.blocks.iter().enumerate() {
        println!("{}", block_line(b, block, args.ids));

        for (e, exercise) in block.exercises.iter().enumerate() {
            println!("    {}", exercise_line(e, exercise, args.ids));
        }

        for (s, superset) in block.supersets.iter().enumerate() {
            let mut header = format!("superset {}", s).cyan().to_string();
            if let Some(rest) = superset.rest_between_sec {
                header.push_str(&format!(" rest {}s", rest).dimmed().to_string());
            }
            if args.ids {
                header.push_str(&id_suffix(&superset.id));
            }
            println!("    {}", header);

            for (e, exercise) in superset.exercises.iter().enumerate() {
                println!("        {}", exercise_line(e, exercise, args.ids));
            }
        }
    }

    println!();
    println!(
        "   {} block(s), {} exercise(s)",
        workout.blocks.len(),
        workout.exercise_count()
    );

    Ok(())
}

fn block_line(index: usize, block: &Block, ids: bool) -> String {
    let mut line = format!("{} {}", format!("{}.", index).dimmed(), block.label.green().bold());
    if let Some(structure) = block.structure {
        let name = serde_json::to_value(structure)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        line.push_str(&format!(" ({})", name).dimmed().to_string());
    }
    if ids {
        line.push_str(&id_suffix(&block.id));
    }
    line
}

fn exercise_line(index: usize, exercise: &Exercise, ids: bool) -> String {
    let mut line = format!("{} {}", format!("{}.", index).dimmed(), exercise.name);

    let prescription = match (exercise.sets, exercise.reps, &exercise.reps_range) {
        (Some(sets), Some(reps), _) => Some(format!("{}x{}", sets, reps)),
        (Some(sets), None, Some(range)) => Some(format!("{}x{}", sets, range)),
        (None, Some(reps), _) => Some(format!("{} reps", reps)),
        (None, None, Some(range)) => Some(format!("{} reps", range)),
        _ => None,
    };
    if let Some(prescription) = prescription {
        line.push_str(&format!(" {}", prescription.yellow()));
    }
    if let Some(distance) = exercise.distance_m {
        line.push_str(&format!(" {}m", distance).yellow().to_string());
    }
    if let Some(duration) = exercise.duration_sec {
        line.push_str(&format!(" {}s", duration).yellow().to_string());
    }
    if ids {
        line.push_str(&id_suffix(&exercise.id));
    }
    line
}

fn id_suffix(id: &str) -> String {
    if id.is_empty() {
        format!(" {}", "<no id>".red())
    } else {
        format!(" {}", format!("#{}", id).dimmed())
    }
}
