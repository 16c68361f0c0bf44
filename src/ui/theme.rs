use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub label: Style,
    pub hint: Style,
    pub error: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub weekday_header: Style,
    pub cursor: Style,
    pub selected: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            label: Style::new().bold(),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red).bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            focused: Style::new().color(Color::Cyan),
            weekday_header: Style::new().color(Color::DarkGrey),
            cursor: Style::new().color(Color::Yellow).bold(),
            selected: Style::new().color(Color::Cyan).bold(),
        }
    }
}
