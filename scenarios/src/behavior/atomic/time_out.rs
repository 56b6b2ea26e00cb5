use crate::{
    behavior::{Action, Behavior, Context},
    eeg::Event,
    utils::Stopwatch,
};
use derive_new::new;
use nameof::name_of_type;

/// Return after `timeout` seconds, leaving a note in the EEG that time ran out.
#[derive(new)]
pub struct TimeOut {
    timeout: f32,
    #[new(default)]
    stopwatch: Stopwatch,
}

impl Behavior for TimeOut {
    fn name(&self) -> &str {
        name_of_type!(TimeOut)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        if self.stopwatch.tick(ctx.time()) < self.timeout {
            return Action::Yield;
        }
        ctx.eeg.track(Event::TimeOut);
        ctx.eeg
            .log(format!("[TimeOut] {} seconds elapsed", self.timeout));
        Action::Return
    }
}
