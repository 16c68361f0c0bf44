pub mod calendar;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use calendar::{CalendarKind, DateError, DayStamp, EthiopicDate, GregorianDate, Weekday};
pub use calendar::grid::MonthGrid;
pub use runtime::Runtime;
pub use state::app::AppState;
pub use state::picker::{PickerState, Selection};
pub use widgets::date_picker::DatePicker;
