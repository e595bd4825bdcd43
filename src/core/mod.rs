//! Conversion engine
//!
//! Resolves the target timezone once and turns epoch values into ISO 8601
//! local time strings at the requested precision.

pub mod convert;
pub mod precision;
pub mod timezone;

pub use convert::{Converter, parse_epoch, utc_instant};
pub use precision::Precision;
pub use timezone::{TzDatabase, ZoneProvider};
