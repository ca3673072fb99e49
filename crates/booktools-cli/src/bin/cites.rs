use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use booktools::rewrite_stream;
use booktools_cli::{finish, init_tracing, parse_args, should_ignore_pipe_error, LogArgs};
use clap::Parser;

/// Expand `\hyperlink{BIB}{key,...}` citation groups read from stdin
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    finish("cites", run());
}

fn run() -> Result<i32> {
    let cli: Cli = parse_args();
    init_tracing(&cli.log);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = BufWriter::new(stdout.lock());

    match rewrite_stream(&mut reader, &mut writer) {
        Ok(_) => Ok(0),
        Err(err) if should_ignore_pipe_error(&err) => Ok(0),
        Err(err) => Err(err).context("Failed to rewrite citations"),
    }
}
