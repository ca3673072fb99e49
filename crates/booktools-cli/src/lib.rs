//! Plumbing shared by the booktools binaries: argument parsing, logging,
//! output and exit codes.

use std::io::{self, IsTerminal, Write};
use std::process;

use anyhow::{Context, Result};
use booktools::{BookError, ExitCode};
use clap::{Args, Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Rendering used for report output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Logging flags accepted by every tool.
#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Log progress to stderr (RUST_LOG is honoured as well)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the command line, exiting with the usage status on bad arguments.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::Usage.code()
            } else {
                ExitCode::Success.code()
            };
            let _ = err.print();
            process::exit(code);
        }
    }
}

/// Install a stderr subscriber; stdout is reserved for tool output.
///
/// `RUST_LOG` decides the filter, falling back to `warn`; `--verbose`
/// forces `debug` on top of it.
pub fn init_tracing(args: &LogArgs) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    let filter = if args.verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Write `rendered` to stdout, treating a closed pipe as success.
pub fn emit(rendered: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(rendered.as_bytes()) {
        Ok(_) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
        Err(err) => return Err(err).context("Failed to write output"),
    }

    match handle.flush() {
        Ok(_) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

/// Render one value per line.
pub fn render_lines<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for value in values {
        out.push_str(value.as_ref());
        out.push('\n');
    }
    out
}

/// Render `value` as pretty JSON followed by a newline.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    out.push('\n');
    Ok(out)
}

pub fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

/// Process status for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BookError>()
        .map(|book_err| book_err.exit_code().code())
        .unwrap_or(1)
}

/// Terminate the process with the outcome of `run`.
pub fn finish(tool: &str, outcome: Result<i32>) -> ! {
    match outcome {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{tool} error: {err}");
            process::exit(exit_code_for(&err));
        }
    }
}
