use std::path::PathBuf;

use anyhow::Result;
use booktools::check_toc;
use booktools_cli::{emit, finish, init_tracing, parse_args, render_json, LogArgs, OutputFormat};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Compare a book's table of contents with its chapter files",
    long_about = None
)]
struct Cli {
    /// Book configuration with a `toc` section (lessons, bib, extras)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Chapter files, given as <dir>/<name>.<ext>
    #[arg(value_name = "CHAPTER", required = true)]
    chapters: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Exit with status 1 when configuration and files disagree
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    finish("checktoc", run());
}

fn run() -> Result<i32> {
    let cli: Cli = parse_args();
    init_tracing(&cli.log);

    let report = check_toc(&cli.config, &cli.chapters)?;

    let rendered = match cli.format {
        OutputFormat::Plain => report.render_plain(),
        OutputFormat::Json => render_json(&report)?,
    };
    emit(&rendered)?;

    if cli.strict && !report.is_clean() {
        return Ok(1);
    }
    Ok(0)
}
