//! Rendering precision for the time-of-day component

use std::{fmt, str::FromStr};

/// Granularity at which the rendered time of day is truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

impl Precision {
    /// All accepted precisions, coarsest first
    pub const ALL: [Precision; 5] = [
        Precision::Hours,
        Precision::Minutes,
        Precision::Seconds,
        Precision::Milliseconds,
        Precision::Microseconds,
    ];

    /// Name used on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Hours => "hours",
            Precision::Minutes => "minutes",
            Precision::Seconds => "seconds",
            Precision::Milliseconds => "milliseconds",
            Precision::Microseconds => "microseconds",
        }
    }

    /// chrono format string for the local date and time, without offset
    pub(crate) fn format_str(self) -> &'static str {
        match self {
            Precision::Hours => "%Y-%m-%d %H",
            Precision::Minutes => "%Y-%m-%d %H:%M",
            Precision::Seconds => "%Y-%m-%d %H:%M:%S",
            Precision::Milliseconds => "%Y-%m-%d %H:%M:%S%.3f",
            Precision::Microseconds => "%Y-%m-%d %H:%M:%S%.6f",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(Precision::Hours),
            "minutes" => Ok(Precision::Minutes),
            "seconds" => Ok(Precision::Seconds),
            "milliseconds" => Ok(Precision::Milliseconds),
            "microseconds" => Ok(Precision::Microseconds),
            other => Err(format!(
                "invalid precision '{}' (choose from {})",
                other,
                Precision::ALL.map(Precision::as_str).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for precision in Precision::ALL {
            assert_eq!(precision.as_str().parse::<Precision>(), Ok(precision));
        }
    }

    #[test]
    fn test_reject_unknown_precision() {
        let err = "foo".parse::<Precision>().unwrap_err();
        assert!(err.contains("'foo'"));
        assert!(err.contains("hours, minutes, seconds, milliseconds, microseconds"));

        // Matching is exact
        assert!("Seconds".parse::<Precision>().is_err());
        assert!("second".parse::<Precision>().is_err());
        assert!("".parse::<Precision>().is_err());
    }
}
