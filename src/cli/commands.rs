//! Run a resolved configuration against stdin/stdout

use crate::{
    config::{Config, Mode},
    core::{Converter, TzDatabase},
};
use anyhow::Context;
use std::io;
use tracing::{debug, info, instrument};

/// Convert the configured epoch, or every epoch on stdin in stream mode
///
/// The timezone is resolved before any input is read or output written.
#[instrument(skip(config), fields(timezone = %config.timezone))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let converter = Converter::resolve(&TzDatabase, &config.timezone, config.precision)
        .context("Failed to resolve timezone")?;
    debug!("Rendering with precision {}", converter.precision());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.mode {
        Mode::Positional(epoch) => converter
            .write_one(epoch, &mut out)
            .with_context(|| format!("Failed to convert epoch {epoch}")),
        Mode::Stream => {
            let converted = converter
                .convert_stream(io::stdin().lock(), &mut out)
                .context("Failed to convert input stream")?;
            info!("Stream finished after {} line(s)", converted);
            Ok(())
        }
    }
}
