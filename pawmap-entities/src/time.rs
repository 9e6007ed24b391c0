use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp: {0}")]
pub struct TimestampParseError(String);

/// A point in time with second precision or better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from_seconds(seconds: i64) -> Self {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Self)
            .unwrap_or_else(|_| Self(OffsetDateTime::UNIX_EPOCH))
    }

    pub const fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }

    pub fn as_seconds(&self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn format_date(&self) -> String {
        let fmt = format_description!("[year]-[month]-[day]");
        self.0
            .format(&fmt)
            .unwrap_or_else(|_| self.as_seconds().to_string())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    // Accepts RFC 3339 as well as local date times without an offset,
    // which are interpreted as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self(dt));
        }
        let local = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );
        PrimitiveDateTime::parse(s, &local)
            .map(|dt| Self(dt.assume_utc()))
            .map_err(|_| TimestampParseError(s.to_owned()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}", self.as_seconds()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rfc3339() {
        let ts: Timestamp = "2022-11-20T12:30:00Z".parse().unwrap();
        assert_eq!(1_668_947_400, ts.as_seconds());
    }

    #[test]
    fn parse_local_date_time_as_utc() {
        let ts: Timestamp = "2022-11-20T12:30:00".parse().unwrap();
        assert_eq!(1_668_947_400, ts.as_seconds());
        let ts: Timestamp = "2022-11-20T12:30:00.123456".parse().unwrap();
        assert_eq!(1_668_947_400, ts.as_seconds());
    }

    #[test]
    fn reject_garbage() {
        assert!("yesterday".parse::<Timestamp>().is_err());
    }

    #[test]
    fn format_date_only() {
        assert_eq!("2022-11-20", Timestamp::from_seconds(1_668_947_400).format_date());
    }
}
