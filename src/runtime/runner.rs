use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::app::AppState;
use crate::state::picker::Selection;
use crate::terminal::{Terminal, TerminalEvent};
use crate::widgets::traits::{Drawable, RenderContext};
use std::io;
use std::time::Duration;

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
        }
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// Run the event loop until submit or cancel. Returns the selected
    /// date, or `None` when the run was abandoned.
    pub fn run(&mut self) -> io::Result<Option<Selection>> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                let event = self.terminal.poll_event(Duration::from_millis(100))?;
                self.dispatch(event)?;
            }

            // Leave the scrollback clean behind the picker block.
            self.terminal.clear_block()
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)?;
        Ok(self.state.outcome())
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                let intent = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Intent::InputKey(key));
                self.process_intent(intent)
            }
            TerminalEvent::Tick => self.process_intent(Intent::Tick),
        }
    }

    fn process_intent(&mut self, intent: Intent) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Action(action) => {
                    render_requested |= self.state.apply_action(action);
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let ctx = RenderContext {
            focused_id: Some(self.state.picker.id().to_string()),
            terminal_size: self.terminal.size(),
        };
        let out = self.state.picker.draw(&ctx);
        self.terminal.render(&out.lines)
    }
}
