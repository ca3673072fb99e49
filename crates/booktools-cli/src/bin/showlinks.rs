use std::path::PathBuf;

use anyhow::Result;
use booktools::scan_links;
use booktools_cli::{
    emit, finish, init_tracing, parse_args, render_json, render_lines, LogArgs, OutputFormat,
};
use clap::Parser;

/// List the distinct markdown link targets used across files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Files to scan
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    finish("showlinks", run());
}

fn run() -> Result<i32> {
    let cli: Cli = parse_args();
    init_tracing(&cli.log);

    let targets = scan_links(&cli.files)?;

    let rendered = match cli.format {
        OutputFormat::Plain => render_lines(&targets),
        OutputFormat::Json => render_json(&targets)?,
    };
    emit(&rendered)?;
    Ok(0)
}
