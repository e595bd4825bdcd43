//! Timezone resolution
//!
//! The conversion engine only needs a `chrono::TimeZone` for a given
//! identifier. [`ZoneProvider`] is that seam; [`TzDatabase`] backs it with the
//! IANA database compiled into `chrono-tz`.

use crate::error::{DatetimeError, Result};
use chrono::TimeZone;
use chrono_tz::Tz;
use tracing::debug;

/// Resolves a timezone identifier into a reusable zone handle
pub trait ZoneProvider {
    /// Resolved zone carrying the offset rules for every instant
    type Zone: TimeZone;

    /// Look up `name`, failing if the provider does not know it
    fn resolve(&self, name: &str) -> Result<Self::Zone>;
}

/// IANA timezone database shipped with `chrono-tz`
///
/// Identifiers are matched exactly (`Europe/Berlin`, `UTC`, `Etc/GMT-2`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TzDatabase;

impl ZoneProvider for TzDatabase {
    type Zone = Tz;

    fn resolve(&self, name: &str) -> Result<Tz> {
        let zone = name
            .parse::<Tz>()
            .map_err(|_| DatetimeError::timezone(name))?;
        debug!("Resolved timezone {}", zone.name());
        Ok(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_zones() {
        let db = TzDatabase;
        assert_eq!(db.resolve("Europe/Berlin").unwrap(), Tz::Europe__Berlin);
        assert_eq!(db.resolve("UTC").unwrap(), Tz::UTC);
        assert_eq!(db.resolve("America/New_York").unwrap(), Tz::America__New_York);
    }

    #[test]
    fn test_resolve_unknown_zone() {
        let err = TzDatabase.resolve("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, DatetimeError::Timezone { ref name } if name == "Mars/Olympus_Mons"));
        assert!(TzDatabase.resolve("").is_err());
    }
}
