use crate::calendar::date::DayStamp;
use crate::state::picker::Selection;
use crate::terminal::{KeyEvent, TerminalSize};
use crate::ui::span::SpanLine;

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub terminal_size: TerminalSize,
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

/// Actions emitted by widgets in `InteractionResult`; they flow upward
/// to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Submitted { selection: Selection },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }
}

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

pub trait Interactive: Send {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn value(&self) -> Option<Selection> {
        None
    }

    /// Seed the widget from an external instant; `None` clears the
    /// selection rather than erroring.
    fn set_value(&mut self, _instant: Option<DayStamp>) {}

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
