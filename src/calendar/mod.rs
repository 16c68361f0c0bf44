pub mod date;
pub mod ethiopic;
pub mod gregorian;
pub mod grid;
pub mod names;

pub use date::{CalendarKind, DateError, DayStamp, EthiopicDate, GregorianDate, Weekday};
