use crate::calendar::date::{DateError, DayStamp, EthiopicDate};
use crate::calendar::gregorian;

/// 1 Meskerem 2012 E.C. fell on Gregorian 2019-09-12.
///
/// Every other new year is derived from this anchor by pure
/// Julian-cycle arithmetic (365 days per year plus one leap day every
/// fourth year), which keeps both conversion directions on the same
/// epoch for all years, including across Gregorian century years where
/// a hard-coded "September 11" would silently drift.
const ANCHOR_YEAR: i64 = 2012;
const ANCHOR_STAMP: i64 = gregorian::days_from_civil(2019, 9, 12);

pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Months 1–12 always have 30 days; Pagume (month 13) has 6 in a leap
/// year and 5 otherwise.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    match month {
        1..=12 => Ok(30),
        13 => Ok(if is_leap_year(year) { 6 } else { 5 }),
        _ => Err(DateError::MonthOutOfRange { month, max: 13 }),
    }
}

/// First day (1 Meskerem) of the given Ethiopic year.
pub fn new_year_stamp(year: i32) -> DayStamp {
    let y = year as i64;
    let leaps = y.div_euclid(4) - ANCHOR_YEAR.div_euclid(4);
    DayStamp(ANCHOR_STAMP + 365 * (y - ANCHOR_YEAR) + leaps)
}

pub fn to_stamp(year: i32, month: u8, day: u8) -> Result<DayStamp, DateError> {
    let max = days_in_month(year, month)?;
    if day < 1 || day > max {
        return Err(DateError::DayOutOfRange {
            year,
            month,
            day,
            max,
        });
    }
    let offset = 30 * (month as i64 - 1) + (day as i64 - 1);
    Ok(new_year_stamp(year).offset(offset))
}

/// Total over all stamps: finds the Ethiopic year containing the stamp,
/// then splits the offset from that new year into month and day.
pub fn from_stamp(stamp: DayStamp) -> EthiopicDate {
    // The new year lands in September, so the civil year minus 7 is at
    // most one off in either direction.
    let mut year = gregorian::civil_from_days(stamp.0).year - 7;
    while stamp < new_year_stamp(year) {
        year -= 1;
    }
    while stamp >= new_year_stamp(year + 1) {
        year += 1;
    }

    let offset = stamp.0 - new_year_stamp(year).0;
    let (month, day) = if offset < 360 {
        ((offset / 30) as u8 + 1, (offset % 30) as u8 + 1)
    } else {
        (13, (offset - 360) as u8 + 1)
    };
    EthiopicDate { year, month, day }
}
