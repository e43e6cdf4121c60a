use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::indexer::{BuildOptions, run_index_build};
use crate::models::{RunOutcome, StudentReport};
use crate::utils::{OsFileSystem, SystemClock, display_relative};

#[derive(Parser)]
#[command(name = "student-index")]
#[command(version = "0.1.0")]
#[command(
    about = "Rebuild index.json for every student under data/students",
    long_about = None
)]
pub struct Cli {
    /// Directory containing data/students (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build every index but don't write any files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    let options = BuildOptions { dry_run: cli.dry_run };

    let outcome = run_index_build(&OsFileSystem, &SystemClock, &root, options, |report| {
        print_student_line(&root, report, options.dry_run)
    })?;

    match outcome {
        RunOutcome::NothingToDo => {
            println!("No data/students directory. Nothing to do.");
        }
        RunOutcome::Completed(summary) => {
            println!("Done. Students processed: {}", summary.students_processed());
        }
    }

    Ok(())
}

fn print_student_line(root: &Path, report: &StudentReport, dry_run: bool) {
    let marker = if dry_run { "(dry run) " } else { "" };
    println!(
        "{}✅ {}: {} sets -> {}",
        marker,
        report.student_id,
        report.set_count,
        display_relative(root, &report.index_path)
    );
}
