use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app::AppState;
use crate::terminal::{KeyCode, KeyEvent};
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Cancel => {
                // Esc gives the widget first refusal (e.g. leaving a
                // header section); an unhandled Esc abandons the run.
                let result = state.dispatch_key(KeyEvent::plain(KeyCode::Esc));
                if !result.handled {
                    state.request_exit();
                    return vec![Effect::RequestRender];
                }
                collect_effects(result)
            }
            Intent::InputKey(key) => collect_effects(state.dispatch_key(key)),
            Intent::Tick | Intent::Noop => vec![],
        }
    }
}

fn collect_effects(result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result.actions.into_iter().map(Effect::Action).collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}
