use crate::behavior::{Action, Behavior, Context};
use itertools::Itertools;
use nameof::name_of_type;
use std::collections::VecDeque;

/// Run `children` in order. Returns once the last child returns, and aborts as
/// soon as any child aborts.
pub struct Sequence {
    children: VecDeque<Box<dyn Behavior>>,
    /// Cache the full name of the Behavior, including names of `children`. This
    /// must be kept up to date whenever `children` is modified.
    name: String,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            name: Self::name(children.iter()),
            children: children.into_iter().collect(),
        }
    }

    fn name<'a>(children: impl Iterator<Item = &'a Box<dyn Behavior>>) -> String {
        format!(
            "{} ({})",
            name_of_type!(Sequence),
            children.map(|b| b.name()).join(", "),
        )
    }
}

impl Behavior for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let front = match self.children.front_mut() {
            None => return Action::Return,
            Some(b) => b,
        };

        match front.execute(ctx) {
            Action::Yield => Action::Yield,
            Action::Return => {
                self.children.pop_front();
                self.name = Self::name(self.children.iter());
                ctx.eeg
                    .log(format!("[Sequence] child Return; becoming {}", self.name));
                // The next child starts on the same tick.
                self.execute(ctx)
            }
            Action::Abort => {
                ctx.eeg.log("[Sequence] child Abort");
                Action::Abort
            }
        }
    }

    fn terminate(&mut self, ctx: &mut Context<'_>) {
        if let Some(front) = self.children.front_mut() {
            front.terminate(ctx);
        }
    }
}
