use crate::widgets::traits::WidgetAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Action(WidgetAction),
    RequestRender,
}
