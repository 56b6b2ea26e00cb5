use crate::behavior::Context;

/// A node in a running behavior tree. Behaviors are ticked once per simulation
/// step until they return or abort.
pub trait Behavior: Send {
    /// A short string identifying the behavior; usually just the name of the
    /// object.
    fn name(&self) -> &str;

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action;

    /// Called when a parent stops ticking this behavior before it finished on
    /// its own. Behaviors that move actors should stop them here.
    fn terminate(&mut self, _ctx: &mut Context<'_>) {}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Still running; tick me again next step.
    Yield,
    /// Finished successfully.
    Return,
    /// Finished unsuccessfully.
    Abort,
}
