//! Partition key policy.
//!
//! A record's `date` is a string-encoded Unix epoch in milliseconds. It is floored to whole
//! seconds and rendered in the calendar of a [`KeyZone`] (the host's local zone by default):
//!
//! | period  | key            | file                     |
//! |---------|----------------|--------------------------|
//! | none    | `collection`   | `<base>/collection.json` |
//! | yearly  | `yyyy`         | `<base>/yyyy.json`       |
//! | monthly | `yyyy/mm`      | `<base>/yyyy/mm.json`    |
//!
//! Everything here is pure; creating the year directory that a monthly key needs is done by
//! the grouped store when it resolves the key.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{NO_GROUPING_KEY, PARTITION_EXTENSION};
use crate::error::{Result, SbrError};

/// How records are split across partition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum GroupPeriod {
    #[default]
    None = 0,
    Monthly = 1,
    Yearly = 2,
}

impl TryFrom<u8> for GroupPeriod {
    type Error = SbrError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Monthly),
            2 => Ok(Self::Yearly),
            _ => Err(SbrError::InvalidGroupPeriod { value }),
        }
    }
}

impl From<GroupPeriod> for u8 {
    fn from(period: GroupPeriod) -> Self {
        period as u8
    }
}

impl fmt::Display for GroupPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

/// Parsed form of a partition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    Single,
    Year(u16),
    Month(u16, u8),
}

/// Parse a string-encoded epoch in milliseconds into a UTC timestamp with second precision.
pub fn parse_epoch_millis(date: &str) -> Result<DateTime<Utc>> {
    let millis: i64 = date.parse().map_err(|err| SbrError::InvalidDate {
        value: date.to_string(),
        reason: format!("not an integer: {err}"),
    })?;
    let seconds = millis.div_euclid(1000);
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| SbrError::InvalidDate {
        value: date.to_string(),
        reason: "timestamp out of range".into(),
    })
}

/// Time zone whose calendar decides which partition a timestamp falls into.
///
/// Stores must be written with one zone throughout; records near a month or year boundary
/// land in different partitions under different zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyZone {
    /// The host's local time zone.
    #[default]
    Local,
    Utc,
    /// A fixed offset, in seconds east of UTC.
    Offset(i32),
}

impl KeyZone {
    /// `(year, month)` of `time` in this zone.
    fn calendar(self, time: DateTime<Utc>) -> Result<(i32, u32)> {
        Ok(match self {
            Self::Local => {
                let local = time.with_timezone(&Local);
                (local.year(), local.month())
            }
            Self::Utc => (time.year(), time.month()),
            Self::Offset(seconds) => {
                let offset = self.fixed_offset(seconds)?;
                let shifted = time.with_timezone(&offset);
                (shifted.year(), shifted.month())
            }
        })
    }

    fn fixed_offset(self, seconds: i32) -> Result<FixedOffset> {
        FixedOffset::east_opt(seconds).ok_or_else(|| SbrError::InvalidOptions {
            reason: format!("key zone offset {seconds}s is out of range"),
        })
    }

    pub(crate) fn validate(self) -> Result<()> {
        if let Self::Offset(seconds) = self {
            self.fixed_offset(seconds)?;
        }
        Ok(())
    }
}

impl fmt::Display for KeyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Offset(seconds) => write!(f, "{seconds:+}s"),
        }
    }
}

/// Key of the partition a timestamp belongs to.
pub fn key_for_time(period: GroupPeriod, zone: KeyZone, time: DateTime<Utc>) -> Result<String> {
    if period == GroupPeriod::None {
        return Ok(NO_GROUPING_KEY.to_string());
    }
    let (year, month) = zone.calendar(time)?;
    if !(0..=9999).contains(&year) {
        return Err(SbrError::InvalidDate {
            value: time.timestamp_millis().to_string(),
            reason: format!("year {year} does not fit a four digit key"),
        });
    }
    Ok(match period {
        GroupPeriod::Monthly => format!("{year:04}/{month:02}"),
        _ => format!("{year:04}"),
    })
}

/// Key of the partition a record with the given `date` field belongs to.
///
/// Under [`GroupPeriod::None`] the date is not inspected at all.
pub fn key_for_date(period: GroupPeriod, zone: KeyZone, date: &str) -> Result<String> {
    if period == GroupPeriod::None {
        return Ok(NO_GROUPING_KEY.to_string());
    }
    key_for_time(period, zone, parse_epoch_millis(date)?)
}

/// Check that `key` has the shape the period produces.
pub fn parse_key(period: GroupPeriod, key: &str) -> Result<KeyShape> {
    let invalid = |reason: &str| SbrError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };
    match period {
        GroupPeriod::None => {
            if key == NO_GROUPING_KEY {
                Ok(KeyShape::Single)
            } else {
                Err(invalid("without grouping the only key is \"collection\""))
            }
        }
        GroupPeriod::Yearly => parse_year(key)
            .map(KeyShape::Year)
            .ok_or_else(|| invalid("expected yyyy")),
        GroupPeriod::Monthly => {
            let (year, month) = key.split_once('/').ok_or_else(|| invalid("expected yyyy/mm"))?;
            let year = parse_year(year).ok_or_else(|| invalid("expected yyyy/mm"))?;
            let month = parse_month(month).ok_or_else(|| invalid("expected yyyy/mm"))?;
            Ok(KeyShape::Month(year, month))
        }
    }
}

/// File holding the partition `key` under `base`.
///
/// Monthly keys contain a `/` and map to a file inside the year directory.
#[must_use]
pub fn partition_path(base: &Path, key: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    let mut segments = key.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}.{PARTITION_EXTENSION}"));
        }
    }
    path
}

pub(crate) fn parse_year(value: &str) -> Option<u16> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

pub(crate) fn parse_month(value: &str) -> Option<u8> {
    if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|month| (1..=12).contains(month))
}
