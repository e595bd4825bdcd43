//! Command-line argument parsing

use crate::{
    config::{DEFAULT_PRECISION, DEFAULT_TIMEZONE},
    core::Precision,
};
use clap::{CommandFactory, Parser, error::ErrorKind};
use std::{ffi::OsString, process};

/// Convert seconds since the UNIX epoch into ISO 8601 local time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "datetime", allow_negative_numbers = true)]
pub struct Args {
    /// Seconds since the UNIX epoch (only without -s)
    pub epoch: Option<String>,

    /// Timezone to render the local time in
    #[arg(short = 'z', long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Precision of the time of day (hours, minutes, seconds, milliseconds, microseconds)
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRECISION, value_parser = parse_precision)]
    pub precision: Precision,

    /// Read epochs from standard input, one per line
    #[arg(short = 's', long)]
    pub stream: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

fn parse_precision(value: &str) -> Result<Precision, String> {
    value.parse()
}

/// Rewrite `-.5` as `-0.5`
///
/// clap only takes a hyphen value for a negative number when a digit follows
/// the `-`, so a fraction without a leading zero would be read as a flag.
fn expand_negative_fraction(arg: OsString) -> OsString {
    match arg.to_str().and_then(|s| s.strip_prefix("-.")) {
        Some(rest)
            if rest.starts_with(|c: char| c.is_ascii_digit())
                && format!("0.{rest}").parse::<f64>().is_ok() =>
        {
            OsString::from(format!("-0.{rest}"))
        }
        _ => arg,
    }
}

/// Parse `argv` (including the program name) without exiting
pub fn try_parse_args_from<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Args::try_parse_from(
        argv.into_iter()
            .map(|arg| expand_negative_fraction(arg.into())),
    )
}

/// Parse command line arguments
///
/// Help and version requests exit with 0. Any other parse failure is a usage
/// error: the message and the full help go to stderr and the process exits
/// with 1.
pub fn parse_args() -> Args {
    match try_parse_args_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let message = err.to_string();
            let message = message.lines().next().unwrap_or_default();
            exit_with_usage(message.trim_start_matches("error: "))
        }
    }
}

/// Print `message` and the full help to stderr, then exit with status 1
pub fn exit_with_usage(message: &str) -> ! {
    eprintln!("{}", Args::command().render_help());
    eprintln!("error: {message}");
    process::exit(1)
}
