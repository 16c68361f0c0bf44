use crate::calendar::{ethiopic, gregorian};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month {month} is outside 1..={max}")]
    MonthOutOfRange { month: u8, max: u8 },
    #[error("day {day} is outside 1..={max} for month {month} of {year}")]
    DayOutOfRange {
        year: i32,
        month: u8,
        day: u8,
        max: u8,
    },
    #[error("unparseable date: {input}")]
    UnparseableDate { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    Ethiopic,
    Gregorian,
}

impl CalendarKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ethiopic => Self::Gregorian,
            Self::Gregorian => Self::Ethiopic,
        }
    }

    /// Number of months in one year of this calendar.
    pub fn months_in_year(self) -> u8 {
        match self {
            Self::Ethiopic => 13,
            Self::Gregorian => 12,
        }
    }
}

/// A calendar-agnostic instant: whole civil days since 1970-01-01.
///
/// Date arithmetic works on the day count directly; the time of day is
/// pinned to noon UTC only when a stamp is exported as epoch
/// milliseconds, so day-boundary drift cannot creep in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayStamp(pub i64);

const MILLIS_PER_DAY: i64 = 86_400_000;
const NOON_MILLIS: i64 = MILLIS_PER_DAY / 2;

impl DayStamp {
    pub fn from_unix_millis(millis: i64) -> Self {
        Self(millis.div_euclid(MILLIS_PER_DAY))
    }

    /// Epoch milliseconds of this day at noon UTC.
    pub fn to_unix_millis(self) -> i64 {
        self.0 * MILLIS_PER_DAY + NOON_MILLIS
    }

    pub fn today() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        Self(secs.div_euclid(86_400))
    }

    /// Weekday of this day, 0 = Sunday. 1970-01-01 was a Thursday.
    pub fn weekday(self) -> Weekday {
        Weekday(((self.0 + 4).rem_euclid(7)) as u8)
    }

    pub fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekday(pub u8);

impl Weekday {
    pub const SUN: Self = Self(0);
    pub const MON: Self = Self(1);
    pub const TUE: Self = Self(2);
    pub const WED: Self = Self(3);
    pub const THU: Self = Self(4);
    pub const FRI: Self = Self(5);
    pub const SAT: Self = Self(6);

    pub fn short_name(self) -> &'static str {
        crate::calendar::names::WEEKDAYS_SHORT[self.0 as usize % 7]
    }

    pub fn amharic_short_name(self) -> &'static str {
        crate::calendar::names::WEEKDAYS_AM_SHORT[self.0 as usize % 7]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EthiopicDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl EthiopicDate {
    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let max = ethiopic::days_in_month(year, month)?;
        if day < 1 || day > max {
            return Err(DateError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn to_stamp(self) -> Result<DayStamp, DateError> {
        ethiopic::to_stamp(self.year, self.month, self.day)
    }

    pub fn from_stamp(stamp: DayStamp) -> Self {
        ethiopic::from_stamp(stamp)
    }

    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let max = gregorian::days_in_month(year, month)?;
        if day < 1 || day > max {
            return Err(DateError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn to_stamp(self) -> DayStamp {
        DayStamp(gregorian::days_from_civil(self.year, self.month, self.day))
    }

    pub fn from_stamp(stamp: DayStamp) -> Self {
        gregorian::civil_from_days(stamp.0)
    }

    /// Parse "YYYY-MM-DD"; malformed text is a [`DateError::UnparseableDate`],
    /// an out-of-range triple keeps its more specific error.
    pub fn parse_iso(input: &str) -> Result<Self, DateError> {
        let unparseable = || DateError::UnparseableDate {
            input: input.to_string(),
        };
        let mut parts = input.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unparseable());
        };
        let (Ok(year), Ok(month), Ok(day)) =
            (y.parse::<i32>(), m.parse::<u8>(), d.parse::<u8>())
        else {
            return Err(unparseable());
        };
        Self::from_parts(year, month, day)
    }

    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
