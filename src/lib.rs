//! # Epoch Datetime
//!
//! Converts UNIX epoch timestamps into ISO 8601 local time strings in a
//! chosen timezone and precision, either for a single value or for a stream
//! of values read line by line.
//!
//! Epochs are plain ASCII decimal numbers (`.` as decimal separator) and
//! timezones are IANA identifiers as shipped with `chrono-tz`.
//!
//! ## Example
//!
//! ```
//! use epoch_datetime::core::{Converter, Precision, TzDatabase};
//!
//! let converter = Converter::resolve(&TzDatabase, "UTC", Precision::Seconds)?;
//! assert_eq!(converter.format(0.0)?, "1970-01-01 00:00:00+00:00");
//! # Ok::<(), epoch_datetime::error::DatetimeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
