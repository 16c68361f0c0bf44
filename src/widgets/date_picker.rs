use crate::calendar::date::{CalendarKind, DayStamp};
use crate::calendar::grid::MonthGrid;
use crate::state::picker::{PickerState, Selection};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, pad_to_width};
use crate::ui::theme::Theme;
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, WidgetAction,
};

// ── Focus sections ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Toggle,
    Month,
    Year,
    Grid,
}

impl Section {
    fn next(self) -> Self {
        match self {
            Self::Toggle => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Grid,
            Self::Grid => Self::Toggle,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Toggle => Self::Grid,
            Self::Month => Self::Toggle,
            Self::Year => Self::Month,
            Self::Grid => Self::Year,
        }
    }
}

// ── DatePicker ────────────────────────────────────────────────────────────────

/// Interactive dual-calendar month grid. The view state lives in an
/// immutable [`PickerState`] value; every key press replaces it through
/// a pure transition.
pub struct DatePicker {
    base: WidgetBase,
    state: PickerState,
    section: Section,
    error: Option<String>,
    theme: Theme,
}

const MONTH_NAME_WIDTH: usize = 9;

impl DatePicker {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_today(id, label, DayStamp::today())
    }

    /// Deterministic constructor: the view opens on `today`'s month.
    pub fn with_today(
        id: impl Into<String>,
        label: impl Into<String>,
        today: DayStamp,
    ) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            state: PickerState::new(CalendarKind::Ethiopic, today),
            section: Section::Grid,
            error: None,
            theme: Theme::default_theme(),
        }
    }

    pub fn with_calendar(mut self, kind: CalendarKind) -> Self {
        if self.state.active != kind {
            self.state = self.state.toggle_calendar();
        }
        self
    }

    pub fn with_instant(mut self, instant: Option<DayStamp>) -> Self {
        self.state = self.state.set_instant(instant);
        self
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn grid(&self) -> MonthGrid {
        let view = self.state.view();
        MonthGrid::new(self.state.active, view.year, view.month)
    }

    fn grid_move(&mut self, dr: i32, dc: i32) {
        let grid = self.grid();
        let Some((row, col)) = grid.position_of(self.state.cursor_day) else {
            return;
        };
        let new_row = row as i32 + dr;
        let new_col = col as i32 + dc;
        if (0..6).contains(&new_row) && (0..7).contains(&new_col) {
            if let Some(day) = grid.day_at(new_row as usize, new_col as usize) {
                self.state = self.state.with_cursor(day);
            }
        }
    }

    fn select_cursor_day(&mut self) -> InteractionResult {
        match self.state.select(self.state.cursor_day) {
            Ok(next) => {
                self.state = next;
                self.error = None;
                let selection = self
                    .state
                    .selection()
                    .expect("select stores the picked instant");
                InteractionResult::with_action(WidgetAction::Submitted { selection })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                InteractionResult::handled()
            }
        }
    }

    fn toggle_badge(&self) -> &'static str {
        match self.state.active {
            CalendarKind::Ethiopic => "[ኢት]",
            CalendarKind::Gregorian => "[GR]",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self.state.active {
            CalendarKind::Ethiopic => "ቀን ምረጡ",
            CalendarKind::Gregorian => "Pick a date",
        }
    }

    fn selected_day_in_view(&self) -> Option<u8> {
        let view = self.state.view();
        match self.state.active {
            CalendarKind::Ethiopic => self.state.selected_ethiopic().and_then(|d| {
                (d.year == view.year && d.month == view.month).then_some(d.day)
            }),
            CalendarKind::Gregorian => self.state.selected_gregorian().and_then(|d| {
                (d.year == view.year && d.month == view.month).then_some(d.day)
            }),
        }
    }
}

// ── Drawable ──────────────────────────────────────────────────────────────────

impl Drawable for DatePicker {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let theme = &self.theme;
        let mut lines = Vec::new();

        lines.push(vec![Span::styled(
            format!("{} {}:", self.base.focus_marker(focused), self.base.label()),
            theme.label,
        )]);

        // ── Month / year / calendar-toggle row ────────────────────────────────
        let section_style = |section: Section| {
            if focused && self.section == section {
                theme.focused
            } else {
                Default::default()
            }
        };

        let grid = self.grid();
        lines.push(vec![
            Span::styled(
                format!("  ‹ {} ›", pad_to_width(grid.month_name(), MONTH_NAME_WIDTH)),
                section_style(Section::Month),
            ),
            Span::styled(
                format!("   ‹ {:4} ›", self.state.view().year),
                section_style(Section::Year),
            ),
            Span::styled(
                format!("   {}", self.toggle_badge()),
                section_style(Section::Toggle),
            ),
        ]);

        lines.push(vec![Span::new("")]);

        // ── Weekday header ────────────────────────────────────────────────────
        let mut header = String::from("  ");
        for name in grid.weekday_header() {
            header.push_str(&pad_to_width(name, 4));
        }
        lines.push(vec![Span::styled(
            header.trim_end().to_string(),
            theme.weekday_header,
        )]);

        // ── Day grid ──────────────────────────────────────────────────────────
        let grid_focused = focused && self.section == Section::Grid;
        let selected_day = self.selected_day_in_view();

        for row in &grid.cells {
            if row.iter().all(Option::is_none) {
                continue;
            }
            let mut line = vec![Span::new("  ")];
            for cell in row {
                match cell {
                    None => line.push(Span::new("    ")),
                    Some(day) => {
                        let is_cursor = grid_focused && *day == self.state.cursor_day;
                        let is_selected = selected_day == Some(*day);
                        let style = if is_cursor {
                            theme.cursor
                        } else if is_selected {
                            theme.selected
                        } else {
                            Default::default()
                        };
                        let (l, r) = if is_cursor { ("[", "]") } else { (" ", " ") };
                        line.push(Span::styled(format!("{}{:2}{}", l, day, r), style));
                    }
                }
            }
            lines.push(line);
        }

        lines.push(vec![Span::new("")]);

        // ── Selection footer ──────────────────────────────────────────────────
        match self.state.selection() {
            Some(selection) => {
                let other = self.state.active.toggled();
                lines.push(vec![
                    Span::new(format!("  {}", selection.label(self.state.active))),
                    Span::styled(format!("  ({})", selection.label(other)), theme.hint),
                ]);
            }
            None => {
                lines.push(vec![Span::styled(
                    format!("  {}", self.placeholder()),
                    theme.placeholder,
                )]);
            }
        }

        if let Some(error) = &self.error {
            lines.push(vec![Span::styled(format!("  ! {}", error), theme.error)]);
        }

        lines.push(vec![Span::styled(
            "  tab section · arrows move · enter pick · esc cancel",
            theme.hint,
        )]);

        DrawOutput { lines }
    }
}

// ── Interactive ───────────────────────────────────────────────────────────────

impl Interactive for DatePicker {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Tab => {
                self.section = if shift {
                    self.section.prev()
                } else {
                    self.section.next()
                };
                InteractionResult::handled()
            }
            KeyCode::BackTab => {
                self.section = self.section.prev();
                InteractionResult::handled()
            }
            KeyCode::Esc if self.section != Section::Grid => {
                self.section = Section::Grid;
                InteractionResult::handled()
            }
            KeyCode::Left => match self.section {
                Section::Toggle => {
                    self.state = self.state.toggle_calendar();
                    InteractionResult::handled()
                }
                Section::Month => {
                    self.state = self.state.navigate(-1);
                    InteractionResult::handled()
                }
                Section::Year => {
                    self.state = self.state.navigate_year(-1);
                    InteractionResult::handled()
                }
                Section::Grid => {
                    self.grid_move(0, -1);
                    InteractionResult::handled()
                }
            },
            KeyCode::Right => match self.section {
                Section::Toggle => {
                    self.state = self.state.toggle_calendar();
                    InteractionResult::handled()
                }
                Section::Month => {
                    self.state = self.state.navigate(1);
                    InteractionResult::handled()
                }
                Section::Year => {
                    self.state = self.state.navigate_year(1);
                    InteractionResult::handled()
                }
                Section::Grid => {
                    self.grid_move(0, 1);
                    InteractionResult::handled()
                }
            },
            KeyCode::Up if self.section == Section::Grid => {
                self.grid_move(-1, 0);
                InteractionResult::handled()
            }
            KeyCode::Down if self.section == Section::Grid => {
                self.grid_move(1, 0);
                InteractionResult::handled()
            }
            KeyCode::PageUp => {
                self.state = self.state.navigate(-1);
                InteractionResult::handled()
            }
            KeyCode::PageDown => {
                self.state = self.state.navigate(1);
                InteractionResult::handled()
            }
            KeyCode::Char(' ') if self.section == Section::Toggle => {
                self.state = self.state.toggle_calendar();
                InteractionResult::handled()
            }
            KeyCode::Enter => match self.section {
                Section::Grid => self.select_cursor_day(),
                _ => {
                    self.section = Section::Grid;
                    InteractionResult::handled()
                }
            },
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<Selection> {
        self.state.selection()
    }

    fn set_value(&mut self, instant: Option<DayStamp>) {
        self.state = self.state.set_instant(instant);
        self.error = None;
    }

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DatePicker;
    use crate::calendar::date::{CalendarKind, DayStamp};
    use crate::calendar::ethiopic;
    use crate::calendar::gregorian::days_from_civil;
    use crate::terminal::{KeyCode, KeyEvent, TerminalSize};
    use crate::widgets::traits::{Drawable, Interactive, RenderContext, WidgetAction};

    fn picker_at(year: i32, month: u8, day: u8) -> DatePicker {
        let stamp = ethiopic::to_stamp(year, month, day).expect("valid date");
        DatePicker::with_today("when", "Select a date", stamp)
    }

    fn press(picker: &mut DatePicker, code: KeyCode) -> crate::widgets::traits::InteractionResult {
        picker.on_key(KeyEvent::plain(code))
    }

    fn ctx() -> RenderContext {
        RenderContext {
            focused_id: Some("when".to_string()),
            terminal_size: TerminalSize {
                width: 80,
                height: 24,
            },
        }
    }

    #[test]
    fn enter_on_the_grid_submits_the_cursor_day() {
        let mut picker = picker_at(2016, 1, 1);
        let result = press(&mut picker, KeyCode::Enter);
        assert!(result.handled);
        let [WidgetAction::Submitted { selection }] = result.actions.as_slice() else {
            panic!("expected a submit action");
        };
        assert_eq!(selection.ethiopic.year, 2016);
        assert_eq!(selection.ethiopic.month, 1);
        assert_eq!(selection.ethiopic.day, 1);
        assert_eq!(selection.gregorian.to_iso(), "2023-09-12");
    }

    #[test]
    fn tab_cycles_sections_and_esc_returns_to_the_grid() {
        let mut picker = picker_at(2016, 1, 1);
        // Grid → Toggle → Month: left now steps the month.
        press(&mut picker, KeyCode::Tab);
        press(&mut picker, KeyCode::Tab);
        press(&mut picker, KeyCode::Left);
        assert_eq!(picker.state().view().month, 13);
        assert_eq!(picker.state().view().year, 2015);

        press(&mut picker, KeyCode::Esc);
        press(&mut picker, KeyCode::Right);
        // Esc went back to the grid, so Right moved the cursor instead.
        assert_eq!(picker.state().view().month, 13);
        assert_eq!(picker.state().cursor_day, 2);
    }

    #[test]
    fn toggle_section_switches_the_calendar() {
        let mut picker = picker_at(2016, 1, 5);
        press(&mut picker, KeyCode::Tab); // Grid → Toggle
        press(&mut picker, KeyCode::Right);
        assert_eq!(picker.state().active, CalendarKind::Gregorian);
        assert_eq!(picker.state().view().year, 2023);
        assert_eq!(picker.state().view().month, 9);
    }

    #[test]
    fn page_keys_step_months_from_any_section() {
        let mut picker = picker_at(2016, 13, 1);
        press(&mut picker, KeyCode::PageDown);
        assert_eq!(picker.state().view().year, 2017);
        assert_eq!(picker.state().view().month, 1);
        press(&mut picker, KeyCode::PageUp);
        assert_eq!(picker.state().view().year, 2016);
        assert_eq!(picker.state().view().month, 13);
    }

    #[test]
    fn arrows_move_the_grid_cursor_by_rows_and_columns() {
        let mut picker = picker_at(2016, 1, 1);
        press(&mut picker, KeyCode::Down);
        // 1 Meskerem 2016 is a Tuesday; one row down is day 8.
        assert_eq!(picker.state().cursor_day, 8);
        press(&mut picker, KeyCode::Right);
        assert_eq!(picker.state().cursor_day, 9);
        press(&mut picker, KeyCode::Up);
        assert_eq!(picker.state().cursor_day, 2);
    }

    #[test]
    fn set_value_seeds_and_clears_the_selection() {
        let mut picker = picker_at(2016, 1, 1);
        let stamp = DayStamp(days_from_civil(2024, 9, 11));
        picker.set_value(Some(stamp));
        let selection = picker.value().expect("selection seeded");
        assert_eq!(selection.ethiopic.year, 2017);
        assert_eq!(selection.ethiopic.month, 1);
        assert_eq!(selection.ethiopic.day, 1);

        picker.set_value(None);
        assert!(picker.value().is_none());
    }

    #[test]
    fn draw_pads_the_ethiopic_grid_to_its_first_weekday() {
        let picker = picker_at(2016, 1, 1);
        let out = picker.draw(&ctx());
        let first_row: String = out.lines[4]
            .iter()
            .map(|span| span.text.as_str())
            .collect();
        // Two blank cells before Tuesday's day 1.
        assert!(first_row.starts_with("          [ 1]"), "{first_row:?}");
    }

    #[test]
    fn draw_shows_the_placeholder_until_a_day_is_picked() {
        let mut picker = picker_at(2016, 1, 1);
        let rendered = |picker: &DatePicker| -> String {
            picker
                .draw(&ctx())
                .lines
                .iter()
                .flat_map(|line| line.iter().map(|span| span.text.clone()))
                .collect()
        };
        assert!(rendered(&picker).contains("ቀን ምረጡ"));
        press(&mut picker, KeyCode::Enter);
        assert!(rendered(&picker).contains("መስከረም 1, 2016"));
        assert!(rendered(&picker).contains("September 12, 2023"));
    }
}
