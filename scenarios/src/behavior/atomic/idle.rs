use crate::{
    behavior::{Action, Behavior, Context},
    utils::Stopwatch,
};
use derive_new::new;
use nameof::name_of_type;

/// Do nothing for `duration` seconds, then return.
#[derive(new)]
pub struct Idle {
    duration: f32,
    #[new(default)]
    stopwatch: Stopwatch,
}

impl Behavior for Idle {
    fn name(&self) -> &str {
        name_of_type!(Idle)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        if self.stopwatch.tick(ctx.time()) >= self.duration {
            Action::Return
        } else {
            Action::Yield
        }
    }
}
