use crate::state::picker::Selection;
use crate::terminal::KeyEvent;
use crate::widgets::date_picker::DatePicker;
use crate::widgets::traits::{InteractionResult, Interactive, WidgetAction};

/// Application state: the one hosted widget plus the run outcome.
pub struct AppState {
    pub picker: DatePicker,
    should_exit: bool,
    outcome: Option<Selection>,
}

impl AppState {
    pub fn new(picker: DatePicker) -> Self {
        Self {
            picker,
            should_exit: false,
            outcome: None,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn outcome(&self) -> Option<Selection> {
        self.outcome
    }

    pub fn dispatch_key(&mut self, key: KeyEvent) -> InteractionResult {
        self.picker.on_key(key)
    }

    /// Returns true when the action changed state and a render is due.
    pub fn apply_action(&mut self, action: WidgetAction) -> bool {
        match action {
            WidgetAction::Submitted { selection } => {
                self.outcome = Some(selection);
                self.should_exit = true;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::calendar::ethiopic;
    use crate::widgets::date_picker::DatePicker;
    use crate::widgets::traits::{Interactive, WidgetAction};

    fn app() -> AppState {
        let stamp = ethiopic::to_stamp(2016, 1, 1).expect("valid date");
        AppState::new(DatePicker::with_today("when", "Select a date", stamp))
    }

    #[test]
    fn submitted_action_records_the_outcome_and_exits() {
        let mut state = app();
        let selection = state
            .picker
            .state()
            .select(10)
            .expect("valid day")
            .selection()
            .expect("selection present");

        assert!(state.apply_action(WidgetAction::Submitted { selection }));
        assert!(state.should_exit());
        assert_eq!(state.outcome(), Some(selection));
    }

    #[test]
    fn fresh_state_has_no_outcome() {
        let state = app();
        assert!(!state.should_exit());
        assert_eq!(state.outcome(), None);
        assert!(state.picker.value().is_none());
    }
}
