use crate::runtime::intent::Intent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// App-level bindings; anything unresolved falls through to the
/// focused widget as a plain input key.
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self {
            bindings: HashMap::new(),
        };
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Intent> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Intent::Cancel);
        self.bind(KeyBinding::ctrl(KeyCode::Char('q')), Intent::Exit);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyBinding, KeyBindings};
    use crate::runtime::intent::Intent;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn defaults_resolve_exit_and_cancel() {
        let bindings = KeyBindings::new();
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(bindings.resolve(ctrl_c), Some(Intent::Exit));
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Esc)),
            Some(Intent::Cancel)
        );
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Enter)), None);
    }

    #[test]
    fn rebinding_overrides_the_default() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyBinding::key(KeyCode::Char('q')), Intent::Exit);
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Char('q'))),
            Some(Intent::Exit)
        );
    }
}
