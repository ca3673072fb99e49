use std::path::PathBuf;

use anyhow::Result;
use booktools::count_words_in_files;
use booktools_cli::{emit, finish, init_tracing, parse_args, LogArgs};
use clap::Parser;

/// Count prose words across markdown files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Markdown files to count
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    finish("wordcount", run());
}

fn run() -> Result<i32> {
    let cli: Cli = parse_args();
    init_tracing(&cli.log);

    let total = count_words_in_files(&cli.files)?;
    emit(&format!("{total}\n"))?;
    Ok(0)
}
