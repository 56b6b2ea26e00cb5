use crate::behavior::{Action, Behavior, Context};
use itertools::Itertools;
use nameof::name_of_type;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParallelPolicy {
    /// Return as soon as any child returns. The rest are terminated.
    SuccessOnOne,
    /// Return once every child has returned.
    SuccessOnAll,
}

/// Tick every unfinished child each step. Aborts (terminating the others) as
/// soon as any child aborts.
pub struct Parallel {
    policy: ParallelPolicy,
    children: Vec<Child>,
    name: String,
}

struct Child {
    behavior: Box<dyn Behavior>,
    finished: bool,
}

impl Parallel {
    pub fn new(policy: ParallelPolicy, children: Vec<Box<dyn Behavior>>) -> Self {
        let children: Vec<Child> = children
            .into_iter()
            .map(|behavior| Child {
                behavior,
                finished: false,
            })
            .collect();
        Self {
            name: Self::name(policy, &children),
            policy,
            children,
        }
    }

    /// Children keep their place in the name after they finish, so the name
    /// shows how far each branch has got.
    fn name(policy: ParallelPolicy, children: &[Child]) -> String {
        format!(
            "{} {:?} ({})",
            name_of_type!(Parallel),
            policy,
            children.iter().map(|c| c.behavior.name()).join(", "),
        )
    }

    fn terminate_running(&mut self, ctx: &mut Context<'_>) {
        for child in self.children.iter_mut().filter(|c| !c.finished) {
            ctx.eeg
                .log(format!("[Parallel] terminating {}", child.behavior.name()));
            child.behavior.terminate(ctx);
            child.finished = true;
        }
    }
}

impl Behavior for Parallel {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let action = self.execute_children(ctx);
        self.name = Self::name(self.policy, &self.children);
        action
    }

    fn terminate(&mut self, ctx: &mut Context<'_>) {
        self.terminate_running(ctx);
    }
}

impl Parallel {
    fn execute_children(&mut self, ctx: &mut Context<'_>) -> Action {
        let mut any_returned = false;
        let mut any_aborted = false;

        for (index, child) in self.children.iter_mut().enumerate() {
            if child.finished {
                continue;
            }
            match child.behavior.execute(ctx) {
                Action::Yield => {}
                Action::Return => {
                    ctx.eeg.log(format!("[Parallel] child {} Return", index));
                    child.finished = true;
                    any_returned = true;
                }
                Action::Abort => {
                    ctx.eeg.log(format!("[Parallel] child {} Abort", index));
                    child.finished = true;
                    any_aborted = true;
                }
            }
        }

        if any_aborted {
            self.terminate_running(ctx);
            return Action::Abort;
        }

        match self.policy {
            ParallelPolicy::SuccessOnOne if any_returned => {
                self.terminate_running(ctx);
                Action::Return
            }
            ParallelPolicy::SuccessOnAll if self.children.iter().all(|c| c.finished) => {
                Action::Return
            }
            _ => Action::Yield,
        }
    }
}
