use crate::calendar::date::{EthiopicDate, GregorianDate};

pub const ETHIOPIC_MONTHS_AM: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ህዳር",
    "ታህሳስ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜ",
];

pub const ETHIOPIC_MONTHS: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Sunday first, matching the grid's weekday numbering.
pub const WEEKDAYS_AM: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ"];
pub const WEEKDAYS_AM_SHORT: [&str; 7] = ["እሑ", "ሰኞ", "ማክ", "ረቡ", "ሐሙ", "ዓር", "ቅዳ"];
pub const WEEKDAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn ethiopic_month_name(month: u8) -> &'static str {
    ETHIOPIC_MONTHS_AM[(month as usize).saturating_sub(1) % 13]
}

pub fn gregorian_month_name(month: u8) -> &'static str {
    GREGORIAN_MONTHS[(month as usize).saturating_sub(1) % 12]
}

/// "መስከረም 1, 2016", the reference label format.
pub fn ethiopic_label(date: EthiopicDate) -> String {
    format!(
        "{} {}, {}",
        ethiopic_month_name(date.month),
        date.day,
        date.year
    )
}

/// "September 12, 2023".
pub fn gregorian_label(date: GregorianDate) -> String {
    format!(
        "{} {}, {}",
        gregorian_month_name(date.month),
        date.day,
        date.year
    )
}
