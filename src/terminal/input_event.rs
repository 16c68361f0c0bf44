#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

pub(crate) fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    use crossterm::event::KeyCode as C;

    let code = match event.code {
        C::Char(ch) => KeyCode::Char(ch),
        C::Enter => KeyCode::Enter,
        C::Tab => KeyCode::Tab,
        C::BackTab => KeyCode::BackTab,
        C::Esc => KeyCode::Esc,
        C::Backspace => KeyCode::Backspace,
        C::Delete => KeyCode::Delete,
        C::Home => KeyCode::Home,
        C::End => KeyCode::End,
        C::Left => KeyCode::Left,
        C::Right => KeyCode::Right,
        C::Up => KeyCode::Up,
        C::Down => KeyCode::Down,
        C::PageUp => KeyCode::PageUp,
        C::PageDown => KeyCode::PageDown,
        _ => KeyCode::Unknown,
    };

    use crossterm::event::KeyModifiers as M;
    let mut modifiers = KeyModifiers::NONE;
    if event.modifiers.contains(M::SHIFT) {
        modifiers = modifiers.union(KeyModifiers::SHIFT);
    }
    if event.modifiers.contains(M::CONTROL) {
        modifiers = modifiers.union(KeyModifiers::CONTROL);
    }
    if event.modifiers.contains(M::ALT) {
        modifiers = modifiers.union(KeyModifiers::ALT);
    }

    KeyEvent { code, modifiers }
}
