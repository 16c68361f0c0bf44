use crate::calendar::date::{
    CalendarKind, DateError, DayStamp, EthiopicDate, GregorianDate,
};
use crate::calendar::{ethiopic, gregorian, names};
use serde::Serialize;

/// The month a calendar grid is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u8,
}

impl MonthView {
    fn step(self, months_in_year: u8, delta: i32) -> Self {
        let span = months_in_year as i32;
        let total = self.month as i32 - 1 + delta;
        Self {
            year: self.year + total.div_euclid(span),
            month: (total.rem_euclid(span) + 1) as u8,
        }
    }
}

/// A confirmed pick, projected into both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub ethiopic: EthiopicDate,
    pub gregorian: GregorianDate,
    pub unix_millis: i64,
}

impl Selection {
    pub fn from_stamp(stamp: DayStamp) -> Self {
        Self {
            ethiopic: EthiopicDate::from_stamp(stamp),
            gregorian: GregorianDate::from_stamp(stamp),
            unix_millis: stamp.to_unix_millis(),
        }
    }

    pub fn stamp(&self) -> DayStamp {
        DayStamp::from_unix_millis(self.unix_millis)
    }

    pub fn label(&self, kind: CalendarKind) -> String {
        match kind {
            CalendarKind::Ethiopic => names::ethiopic_label(self.ethiopic),
            CalendarKind::Gregorian => names::gregorian_label(self.gregorian),
        }
    }
}

/// Picker view state: one immutable value, updated by pure transitions.
///
/// Each calendar keeps its own view month; the selection is the shared
/// instant both views project from. Navigation wraps month 13→1 (or
/// 12→1) with a year carry, and the cursor clamps to the new month's
/// length. Clamping is a view adjustment, not a conversion, so it is
/// allowed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub active: CalendarKind,
    pub ethiopic: MonthView,
    pub gregorian: MonthView,
    pub cursor_day: u8,
    pub selected: Option<DayStamp>,
}

impl PickerState {
    pub fn new(active: CalendarKind, today: DayStamp) -> Self {
        let e = EthiopicDate::from_stamp(today);
        let g = GregorianDate::from_stamp(today);
        let cursor_day = match active {
            CalendarKind::Ethiopic => e.day,
            CalendarKind::Gregorian => g.day,
        };
        Self {
            active,
            ethiopic: MonthView {
                year: e.year,
                month: e.month,
            },
            gregorian: MonthView {
                year: g.year,
                month: g.month,
            },
            cursor_day,
            selected: None,
        }
    }

    pub fn view(&self) -> MonthView {
        match self.active {
            CalendarKind::Ethiopic => self.ethiopic,
            CalendarKind::Gregorian => self.gregorian,
        }
    }

    pub fn month_len(&self) -> u8 {
        let view = self.view();
        let len = match self.active {
            CalendarKind::Ethiopic => ethiopic::days_in_month(view.year, view.month),
            CalendarKind::Gregorian => gregorian::days_in_month(view.year, view.month),
        };
        len.unwrap_or(30)
    }

    pub fn navigate(self, delta: i32) -> Self {
        let view = self.view().step(self.active.months_in_year(), delta);
        self.with_view(view).clamp_cursor()
    }

    pub fn navigate_year(self, delta: i32) -> Self {
        let mut view = self.view();
        view.year += delta;
        self.with_view(view).clamp_cursor()
    }

    pub fn with_cursor(self, day: u8) -> Self {
        Self {
            cursor_day: day,
            ..self
        }
        .clamp_cursor()
    }

    /// Pick a day in the active view. The engine validates the triple,
    /// and the other calendar's view re-centres on the new instant.
    pub fn select(self, day: u8) -> Result<Self, DateError> {
        let view = self.view();
        let stamp = match self.active {
            CalendarKind::Ethiopic => ethiopic::to_stamp(view.year, view.month, day)?,
            CalendarKind::Gregorian => {
                GregorianDate::from_parts(view.year, view.month, day)?.to_stamp()
            }
        };
        Ok(self.centred_on(stamp))
    }

    pub fn toggle_calendar(self) -> Self {
        let toggled = Self {
            active: self.active.toggled(),
            ..self
        };
        match toggled.selected {
            Some(stamp) => toggled.centred_on(stamp),
            None => toggled.clamp_cursor(),
        }
    }

    /// Seed from an external instant; `None` means "no selection".
    pub fn set_instant(self, instant: Option<DayStamp>) -> Self {
        match instant {
            Some(stamp) => self.centred_on(stamp),
            None => Self {
                selected: None,
                ..self
            },
        }
    }

    pub fn selected_ethiopic(&self) -> Option<EthiopicDate> {
        self.selected.map(EthiopicDate::from_stamp)
    }

    pub fn selected_gregorian(&self) -> Option<GregorianDate> {
        self.selected.map(GregorianDate::from_stamp)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selected.map(Selection::from_stamp)
    }

    fn with_view(self, view: MonthView) -> Self {
        match self.active {
            CalendarKind::Ethiopic => Self {
                ethiopic: view,
                ..self
            },
            CalendarKind::Gregorian => Self {
                gregorian: view,
                ..self
            },
        }
    }

    fn centred_on(self, stamp: DayStamp) -> Self {
        let e = EthiopicDate::from_stamp(stamp);
        let g = GregorianDate::from_stamp(stamp);
        Self {
            ethiopic: MonthView {
                year: e.year,
                month: e.month,
            },
            gregorian: MonthView {
                year: g.year,
                month: g.month,
            },
            cursor_day: match self.active {
                CalendarKind::Ethiopic => e.day,
                CalendarKind::Gregorian => g.day,
            },
            selected: Some(stamp),
            ..self
        }
    }

    fn clamp_cursor(self) -> Self {
        let max = self.month_len();
        Self {
            cursor_day: self.cursor_day.clamp(1, max),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PickerState, Selection};
    use crate::calendar::date::{CalendarKind, DayStamp, EthiopicDate, GregorianDate};
    use crate::calendar::ethiopic;
    use crate::calendar::gregorian::days_from_civil;

    fn ethiopic_picker(year: i32, month: u8) -> PickerState {
        let stamp = ethiopic::to_stamp(year, month, 1).expect("valid view month");
        PickerState::new(CalendarKind::Ethiopic, stamp)
    }

    #[test]
    fn month_thirteen_wraps_forward_into_the_next_year() {
        let state = ethiopic_picker(2016, 13).navigate(1);
        assert_eq!(state.view().year, 2017);
        assert_eq!(state.view().month, 1);
    }

    #[test]
    fn month_one_wraps_backward_into_pagume() {
        let state = ethiopic_picker(2016, 1).navigate(-1);
        assert_eq!(state.view().year, 2015);
        assert_eq!(state.view().month, 13);
    }

    #[test]
    fn gregorian_wrap_uses_twelve_months() {
        let stamp = DayStamp(days_from_civil(2023, 12, 15));
        let state = PickerState::new(CalendarKind::Gregorian, stamp).navigate(1);
        assert_eq!(state.view().year, 2024);
        assert_eq!(state.view().month, 1);

        let back = state.navigate(-1);
        assert_eq!(back.view().year, 2023);
        assert_eq!(back.view().month, 12);
    }

    #[test]
    fn cursor_clamps_when_entering_pagume() {
        let state = ethiopic_picker(2016, 12).with_cursor(30).navigate(1);
        assert_eq!(state.view().month, 13);
        assert_eq!(state.cursor_day, 5);
    }

    #[test]
    fn selecting_a_day_syncs_both_views() {
        let state = ethiopic_picker(2016, 1).select(1).expect("valid day");
        assert_eq!(
            state.selected_ethiopic(),
            Some(EthiopicDate {
                year: 2016,
                month: 1,
                day: 1
            })
        );
        assert_eq!(
            state.selected_gregorian(),
            Some(GregorianDate {
                year: 2023,
                month: 9,
                day: 12
            })
        );
        assert_eq!(state.gregorian.year, 2023);
        assert_eq!(state.gregorian.month, 9);
    }

    #[test]
    fn selecting_an_invalid_day_is_an_error_and_changes_nothing() {
        let state = ethiopic_picker(2016, 13);
        assert!(state.select(6).is_err());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn toggle_recentres_on_the_selection() {
        let state = ethiopic_picker(2016, 1).select(1).expect("valid day");
        // Wander off, then switch calendars: the Gregorian view should
        // sit on the selected instant, not the wandered month.
        let toggled = state.navigate(3).toggle_calendar();
        assert_eq!(toggled.active, CalendarKind::Gregorian);
        assert_eq!(toggled.view().year, 2023);
        assert_eq!(toggled.view().month, 9);
        assert_eq!(toggled.cursor_day, 12);
    }

    #[test]
    fn set_instant_none_clears_the_selection() {
        let state = ethiopic_picker(2016, 1).select(10).expect("valid day");
        let cleared = state.set_instant(None);
        assert_eq!(cleared.selected, None);
        // The view stays put; only the selection goes away.
        assert_eq!(cleared.view(), state.view());
    }

    #[test]
    fn selection_projects_to_noon_utc_millis() {
        let stamp = DayStamp(days_from_civil(2023, 9, 12));
        let selection = Selection::from_stamp(stamp);
        assert_eq!(selection.unix_millis % 86_400_000, 43_200_000);
        assert_eq!(selection.stamp(), stamp);
        assert_eq!(
            selection.label(CalendarKind::Ethiopic),
            "መስከረም 1, 2016"
        );
        assert_eq!(
            selection.label(CalendarKind::Gregorian),
            "September 12, 2023"
        );
    }
}
