//! Epoch to local-time conversion
//!
//! Turns seconds since the UNIX epoch into ISO 8601 local time strings with a
//! space separator and an explicit UTC offset, e.g.
//! `2023-11-14 23:13:20.000000+01:00`.

use crate::{
    core::{precision::Precision, timezone::ZoneProvider},
    error::{DatetimeError, Result},
};
use chrono::{DateTime, Datelike, Offset, TimeZone, Utc};
use std::{
    fmt,
    io::{BufRead, Write},
};
use tracing::{debug, instrument};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Years a rendered date may carry, in UTC and in local time
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Parse an epoch value given as ASCII decimal text
///
/// Surrounding whitespace is ignored. `line` is the 1-based input line when
/// the value comes from a stream.
pub fn parse_epoch(text: &str, line: Option<usize>) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| DatetimeError::epoch_parse(text.trim(), line, e))
}

/// The UTC instant `epoch` seconds after 1970-01-01T00:00:00Z
///
/// The fraction is rounded to the nearest microsecond, ties to even. Instants
/// whose UTC year falls outside 1..=9999 are out of range.
pub fn utc_instant(epoch: f64) -> Result<DateTime<Utc>> {
    if !epoch.is_finite() {
        return Err(DatetimeError::out_of_range(epoch));
    }

    let mut seconds = epoch.floor();
    let mut micros = ((epoch - seconds) * MICROS_PER_SECOND).round_ties_even();
    if micros >= MICROS_PER_SECOND {
        seconds += 1.0;
        micros -= MICROS_PER_SECOND;
    }

    // i64::MAX is not representable as f64; stay well inside it
    if seconds.abs() >= 1e15 {
        return Err(DatetimeError::out_of_range(epoch));
    }

    DateTime::from_timestamp(seconds as i64, micros as u32 * 1_000)
        .filter(|utc| YEAR_RANGE.contains(&utc.year()))
        .ok_or_else(|| DatetimeError::out_of_range(epoch))
}

/// UTC offset rendered as `+HH:MM`, or `+HH:MM:SS` when seconds are present
struct OffsetSuffix(i32);

impl fmt::Display for OffsetSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let total = self.0.unsigned_abs();
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
        write!(f, "{sign}{hours:02}:{minutes:02}")?;
        if seconds != 0 {
            write!(f, ":{seconds:02}")?;
        }
        Ok(())
    }
}

/// Converts epochs into one timezone at one precision
///
/// The zone is resolved once and reused for every conversion.
#[derive(Debug, Clone)]
pub struct Converter<Z: TimeZone> {
    zone: Z,
    precision: Precision,
}

impl<Z: TimeZone> Converter<Z> {
    /// Create a converter for an already resolved zone
    pub fn new(zone: Z, precision: Precision) -> Self {
        Self { zone, precision }
    }

    /// Resolve `timezone` through `provider` and create a converter for it
    pub fn resolve<P>(provider: &P, timezone: &str, precision: Precision) -> Result<Self>
    where
        P: ZoneProvider<Zone = Z>,
    {
        Ok(Self::new(provider.resolve(timezone)?, precision))
    }

    /// Precision every conversion is rendered at
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Render `epoch` as local time in the configured zone
    pub fn format(&self, epoch: f64) -> Result<String> {
        let local = utc_instant(epoch)?.with_timezone(&self.zone);
        let naive = local.naive_local();
        if !YEAR_RANGE.contains(&naive.year()) {
            return Err(DatetimeError::out_of_range(epoch));
        }

        let offset = local.offset().fix().local_minus_utc();
        Ok(format!(
            "{}{}",
            naive.format(self.precision.format_str()),
            OffsetSuffix(offset)
        ))
    }

    /// Convert a single epoch and write it as one line
    pub fn write_one<W: Write>(&self, epoch: f64, out: &mut W) -> Result<()> {
        let rendered = self.format(epoch)?;
        writeln!(out, "{rendered}").map_err(|e| DatetimeError::io("write output", e))?;
        out.flush().map_err(|e| DatetimeError::io("flush output", e))
    }

    /// Convert every line of `input`, writing one output line per input line
    ///
    /// Stops at the first line that is not a number or cannot be converted.
    /// Lines converted before that point have already been written. Returns
    /// the number of converted lines.
    #[instrument(skip_all, fields(precision = %self.precision))]
    pub fn convert_stream<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<usize> {
        let mut converted = 0;

        for (index, line) in input.lines().enumerate() {
            let line = line.map_err(|e| DatetimeError::io("read input", e))?;
            let epoch = parse_epoch(&line, Some(index + 1))?;
            let rendered = self.format(epoch)?;
            writeln!(out, "{rendered}").map_err(|e| DatetimeError::io("write output", e))?;
            converted += 1;
        }

        out.flush().map_err(|e| DatetimeError::io("flush output", e))?;
        debug!("Converted {} line(s)", converted);
        Ok(converted)
    }
}
