use crate::terminal::input_event::KeyEvent;
use crate::terminal::terminal::TerminalSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(TerminalSize),
    Tick,
}
