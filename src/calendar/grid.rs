use crate::calendar::date::CalendarKind;
use crate::calendar::{ethiopic, gregorian, names};

/// A month laid out on a 6×7 Sunday-first grid, blank-padded up to the
/// month's first weekday. Both calendars pad the same way so the
/// weekday header always lines up with the cells below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub kind: CalendarKind,
    pub year: i32,
    pub month: u8,
    pub cells: [[Option<u8>; 7]; 6],
}

impl MonthGrid {
    pub fn new(kind: CalendarKind, year: i32, month: u8) -> Self {
        // A month outside the calendar draws as an empty grid; range
        // errors surface from the conversions, not the renderer.
        let (len, first) = match kind {
            CalendarKind::Gregorian => (
                gregorian::days_in_month(year, month).unwrap_or(0),
                gregorian::first_weekday_of_month(year, month)
                    .map(|w| w.0)
                    .unwrap_or(0),
            ),
            CalendarKind::Ethiopic => (
                ethiopic::days_in_month(year, month).unwrap_or(0),
                ethiopic::to_stamp(year, month, 1)
                    .map(|s| s.weekday().0)
                    .unwrap_or(0),
            ),
        };

        let mut cells = [[None; 7]; 6];
        for day in 1..=len {
            let pos = first as usize + day as usize - 1;
            cells[pos / 7][pos % 7] = Some(day);
        }
        Self {
            kind,
            year,
            month,
            cells,
        }
    }

    pub fn month_name(&self) -> &'static str {
        match self.kind {
            CalendarKind::Ethiopic => names::ethiopic_month_name(self.month),
            CalendarKind::Gregorian => names::gregorian_month_name(self.month),
        }
    }

    pub fn weekday_header(&self) -> [&'static str; 7] {
        match self.kind {
            CalendarKind::Ethiopic => names::WEEKDAYS_AM_SHORT,
            CalendarKind::Gregorian => names::WEEKDAYS_SHORT,
        }
    }

    /// Grid position of a day, if it is on the grid.
    pub fn position_of(&self, day: u8) -> Option<(usize, usize)> {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell == Some(day) {
                    return Some((r, c));
                }
            }
        }
        None
    }

    pub fn day_at(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::MonthGrid;
    use crate::calendar::date::CalendarKind;

    #[test]
    fn gregorian_grid_pads_to_the_first_weekday() {
        // September 2023 starts on a Friday (column 5).
        let grid = MonthGrid::new(CalendarKind::Gregorian, 2023, 9);
        assert_eq!(grid.cells[0][5], Some(1));
        assert_eq!(grid.cells[0][4], None);
        assert_eq!(grid.position_of(30), Some((4, 6)));
        assert_eq!(grid.position_of(31), None);
    }

    #[test]
    fn ethiopic_grid_pads_to_the_first_weekday() {
        // 1 Meskerem 2016 = 2023-09-12, a Tuesday (column 2).
        let grid = MonthGrid::new(CalendarKind::Ethiopic, 2016, 1);
        assert_eq!(grid.cells[0][2], Some(1));
        assert_eq!(grid.cells[0][1], None);
        assert_eq!(grid.position_of(30), Some((4, 3)));
    }

    #[test]
    fn pagume_length_tracks_the_leap_year() {
        let leap = MonthGrid::new(CalendarKind::Ethiopic, 2015, 13);
        assert!(leap.position_of(6).is_some());
        let common = MonthGrid::new(CalendarKind::Ethiopic, 2016, 13);
        assert!(common.position_of(5).is_some());
        assert_eq!(common.position_of(6), None);
    }

    #[test]
    fn out_of_range_month_draws_empty() {
        let grid = MonthGrid::new(CalendarKind::Gregorian, 2023, 13);
        assert!(grid.cells.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn month_names_follow_the_calendar() {
        assert_eq!(
            MonthGrid::new(CalendarKind::Ethiopic, 2016, 1).month_name(),
            "መስከረም"
        );
        assert_eq!(
            MonthGrid::new(CalendarKind::Gregorian, 2023, 9).month_name(),
            "September"
        );
    }
}
