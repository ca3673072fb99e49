use std::path::PathBuf;

use anyhow::Result;
use booktools::scan_gloss;
use booktools_cli::{emit, finish, init_tracing, parse_args, render_lines, LogArgs};
use clap::Parser;

/// Print the prose in markdown chapters that links into the glossary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Markdown files to scan
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    finish("showgloss", run());
}

fn run() -> Result<i32> {
    let cli: Cli = parse_args();
    init_tracing(&cli.log);

    let references = scan_gloss(&cli.files)?;
    emit(&render_lines(&references))?;
    Ok(0)
}
