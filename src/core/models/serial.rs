//! Checkgroups serial numbers
//!
//! A checkgroups article is identified by `#YYYYMMDDNN`: the local date of
//! issue followed by a two-digit revision for that day. News servers compare
//! these numbers to discard stale checkgroups.

use chrono::{DateTime, TimeZone};
use thiserror::Error;

/// Highest revision that still fits in two digits
pub const MAX_SERIAL: u8 = 99;

/// Serial out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the revision must be between 0 and {MAX_SERIAL} (got {0})")]
pub struct SerialError(pub u32);

/// Daily revision of a checkgroups article
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Serial(u8);

impl Serial {
    /// The first revision of a day
    pub const FIRST: Self = Self(0);

    /// Accept a revision in `0..=99`
    pub fn new(value: u32) -> Result<Self, SerialError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_SERIAL)
            .map(Self)
            .ok_or(SerialError(value))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The full revision identifier for an article issued at `at`
    #[must_use]
    pub fn revision<Tz: TimeZone>(self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}{:02}", at.format("%Y%m%d"), self.0)
    }
}

impl std::str::FromStr for Serial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| format!("Invalid revision: {s}"))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}
