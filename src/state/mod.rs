pub mod app;
pub mod picker;

pub use app::AppState;
pub use picker::{MonthView, PickerState, Selection};
