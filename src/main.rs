use std::path::PathBuf;

use clap::Parser;
use study_quiz::{Config, Quiz, QuizError, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder scanned for .csv question sets
    #[arg(short, long, env = "QUIZ_QUESTIONS_DIR")]
    questions_dir: Option<PathBuf>,

    /// Open this CSV file on the Custom Study page
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML config file (defaults to ./quiz.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,

    /// Print the final score summary as JSON after exiting
    #[arg(long)]
    summary_json: bool,
}

fn run(args: Args) -> Result<(), QuizError> {
    let config = Config::load(args.config.as_deref())?.with_overrides(
        args.questions_dir,
        args.log_file,
        args.log_level,
    );
    logging::init(&config)?;
    tracing::info!(questions_dir = %config.questions_dir.display(), "starting quiz");

    let mut quiz = Quiz::new(&config);
    if let Some(file) = &args.file {
        quiz = quiz.with_custom_file(file);
    }

    let summary = quiz.run()?;
    if args.summary_json {
        if let Some(summary) = summary {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
