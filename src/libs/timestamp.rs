//! Worklog timestamps as reported by Tempo.
//!
//! Tempo documents its timestamps as zoned ISO-8601 but in practice returns
//! values such as `2019-03-04T10:00:00.000` without any offset. Those are
//! kept naive until they are serialized for Toggl, at which point they are
//! interpreted in the local system timezone.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("cannot parse \"{0}\" as a timestamp")]
    Unparseable(String),

    #[error("local time {0} does not exist in the system timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// A point in time that may or may not carry its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTimestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl SourceTimestamp {
    /// Resolves the timestamp to a zoned value, treating naive values as
    /// local system time. On a DST overlap the earlier instant is used.
    pub fn zoned(&self) -> Result<DateTime<FixedOffset>, TimestampError> {
        match self {
            SourceTimestamp::Zoned(dt) => Ok(*dt),
            SourceTimestamp::Naive(naive) => Local
                .from_local_datetime(naive)
                .earliest()
                .map(DateTime::<FixedOffset>::from)
                .ok_or(TimestampError::NonexistentLocalTime(*naive)),
        }
    }

    /// Wall clock time as the user would read it: zoned values are shown in
    /// the local timezone, naive values as recorded.
    pub fn local_wall_clock(&self) -> NaiveDateTime {
        match self {
            SourceTimestamp::Zoned(dt) => dt.with_timezone(&Local).naive_local(),
            SourceTimestamp::Naive(naive) => *naive,
        }
    }

    /// ISO-8601 with an explicit offset, the form Toggl requires.
    pub fn to_iso8601(&self) -> Result<String, TimestampError> {
        Ok(self.zoned()?.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }
}

impl FromStr for SourceTimestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(SourceTimestamp::Zoned(dt));
        }
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, format) {
                return Ok(SourceTimestamp::Zoned(dt));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(SourceTimestamp::Naive(naive));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(SourceTimestamp::Naive)
            .ok_or_else(|| TimestampError::Unparseable(s.to_string()))
    }
}

impl fmt::Display for SourceTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTimestamp::Zoned(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
            SourceTimestamp::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl<'de> Deserialize<'de> for SourceTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl Serialize for SourceTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let iso = self.to_iso8601().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&iso)
    }
}
