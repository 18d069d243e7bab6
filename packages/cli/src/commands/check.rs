use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use workout_editor::{validate, InvariantViolation, Workout};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Workout .json file or directory to check
    pub input: PathBuf,

    /// Also list files that pass
    #[arg(short, long)]
    pub list: bool,
}

/// Outcome of checking one file
enum FileStatus {
    Valid,
    Unparsable(String),
    Invalid(Vec<InvariantViolation>),
}

pub fn check(args: CheckArgs) -> Result<()> {
    println!("🔍 {} workout documents", "Checking".green().bold());
    println!("   Input: {}", args.input.display());
    println!();

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        let files = find_json_files(&args.input);
        println!("   Found {} .json files", files.len());
        println!();
        files
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    let mut failed = 0;
    let mut total_violations = 0;

    for file in &files {
        match check_file(file)? {
            FileStatus::Valid => {
                if args.list {
                    println!("{} {}", "✓".green(), file.display());
                }
            }
            FileStatus::Unparsable(message) => {
                failed += 1;
                eprintln!("{} Failed to parse {}: {}", "✗".red(), file.display(), message);
            }
            FileStatus::Invalid(violations) => {
                failed += 1;
                total_violations += violations.len();
                println!("{}", file.display());
                for violation in &violations {
                    let label = match violation {
                        InvariantViolation::MissingId { .. } => "missing-id".yellow().bold(),
                        InvariantViolation::DuplicateId { .. } => "duplicate-id".red().bold(),
                    };
                    println!("  {} {}", label, violation);
                }
                println!();
            }
        }
    }

    println!(
        "✨ {} Check complete!",
        if failed > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files.len());

    if failed > 0 {
        println!("   {} {}", "Violations:".red(), total_violations);
        if total_violations > 0 {
            println!("   {} run `workout normalize` to repair ids", "💡".dimmed());
        }
        return Err(anyhow::anyhow!("{} of {} file(s) failed the check", failed, files.len()));
    }

    println!("   {} No issues found!", "✓".green());
    Ok(())
}

fn check_file(path: &Path) -> Result<FileStatus> {
    let source = fs::read_to_string(path)?;

    let workout: Workout = match serde_json::from_str(&source) {
        Ok(workout) => workout,
        Err(err) => return Ok(FileStatus::Unparsable(err.to_string())),
    };

    Ok(match validate(&workout) {
        Ok(()) => FileStatus::Valid,
        Err(violations) => FileStatus::Invalid(violations),
    })
}

fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false))
        .filter(|path| {
            path.file_name()
                .map(|name| name != crate::config::DEFAULT_CONFIG_NAME)
                .unwrap_or(true)
        })
        .collect();
    files.sort();
    files
}
