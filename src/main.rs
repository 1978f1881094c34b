mod repl;

use std::{fs, path::PathBuf};

use abacus_rs::Interpreter;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// evaluate a file one statement per line
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run { file }) => run_file(&file),
        None => {
            repl::start();
            Ok(())
        }
    }
}

fn run_file(file: &PathBuf) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;

    let mut interpreter = Interpreter::new();
    for (number, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let result = interpreter
            .evaluate_statement(line)
            .with_context(|| format!("line {}: {}", number + 1, line))?;
        if let Some(value) = result {
            println!("{}", value);
        }
    }
    Ok(())
}
