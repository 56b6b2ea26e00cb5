use crate::behavior::{Action, Behavior, Context};
use nameof::name_of_type;
use std::collections::VecDeque;

/// Yields forever.
pub struct NullBehavior;

impl NullBehavior {
    pub fn new() -> NullBehavior {
        NullBehavior
    }
}

impl Behavior for NullBehavior {
    fn name(&self) -> &str {
        name_of_type!(NullBehavior)
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> Action {
        Action::Yield
    }
}

/// Plays back a fixed list of actions, then keeps repeating the last one.
pub struct Scripted {
    name: &'static str,
    actions: VecDeque<Action>,
}

impl Scripted {
    pub fn new(name: &'static str, actions: Vec<Action>) -> Self {
        Self {
            name,
            actions: actions.into_iter().collect(),
        }
    }
}

impl Behavior for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> Action {
        if self.actions.len() > 1 {
            self.actions.pop_front().unwrap_or(Action::Abort)
        } else {
            self.actions.front().cloned().unwrap_or(Action::Abort)
        }
    }
}
