//! Resolved run configuration
//!
//! Validates the parsed arguments into a [`Config`]: exactly one of a
//! positional epoch or `--stream` must be given.

use crate::{
    cli::Args,
    core::{Precision, parse_epoch},
    error::DatetimeError,
};

/// Timezone used when `-z` is not given
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Precision used when `-p` is not given
pub const DEFAULT_PRECISION: Precision = Precision::Microseconds;

/// Where epochs come from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// A single epoch given on the command line
    Positional(f64),
    /// Epochs read from standard input, one per line
    Stream,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Source of epoch values
    pub mode: Mode,
    /// IANA timezone identifier for the rendered local time
    pub timezone: String,
    /// Precision of the rendered time of day
    pub precision: Precision,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, DatetimeError> {
        let mode = match (&args.epoch, args.stream) {
            (Some(_), true) => {
                return Err(DatetimeError::usage(
                    "an epoch argument cannot be combined with --stream",
                ));
            }
            (None, false) => {
                return Err(DatetimeError::usage(
                    "either an epoch argument or --stream is required",
                ));
            }
            (Some(epoch), false) => Mode::Positional(parse_epoch(epoch, None)?),
            (None, true) => Mode::Stream,
        };

        Ok(Self {
            debug: args.debug,
            mode,
            timezone: args.timezone.clone(),
            precision: args.precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::try_parse_args_from;

    fn config_from(argv: &[&str]) -> Result<Config, DatetimeError> {
        let mut full = vec!["datetime"];
        full.extend_from_slice(argv);
        Config::from_args(&try_parse_args_from(full).unwrap())
    }

    #[test]
    fn test_positional_mode() {
        let config = config_from(&["-z", "UTC", "-p", "seconds", "1.5"]).unwrap();
        assert_eq!(config.mode, Mode::Positional(1.5));
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.precision, Precision::Seconds);

        let config = config_from(&["-z", "UTC", "-.5"]).unwrap();
        assert_eq!(config.mode, Mode::Positional(-0.5));
    }

    #[test]
    fn test_stream_mode_uses_defaults() {
        let config = config_from(&["--stream"]).unwrap();
        assert_eq!(
            config,
            Config {
                debug: false,
                mode: Mode::Stream,
                timezone: DEFAULT_TIMEZONE.to_string(),
                precision: DEFAULT_PRECISION,
            }
        );
    }

    #[test]
    fn test_mode_exclusivity() {
        assert!(config_from(&[]).unwrap_err().is_usage());
        assert!(config_from(&["-z", "UTC"]).unwrap_err().is_usage());
        assert!(config_from(&["-s", "0"]).unwrap_err().is_usage());
        assert!(config_from(&["-s", "-.5"]).unwrap_err().is_usage());
    }

    #[test]
    fn test_invalid_positional_epoch() {
        let err = config_from(&["yesterday"]).unwrap_err();
        assert!(!err.is_usage());
        assert!(matches!(err, DatetimeError::EpochParse { line: None, .. }));
    }
}
