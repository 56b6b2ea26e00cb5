use crate::{
    behavior::{atomic::stop_actor, Action, Behavior, Context},
    utils::Stopwatch,
};
use common::host::ActorId;
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Push `actor` straight ahead at `target_speed` (m/s) for `duration` seconds,
/// then stop it and return.
#[derive(new)]
pub struct KeepVelocity {
    actor: ActorId,
    target_speed: f32,
    duration: f32,
    #[new(default)]
    stopwatch: Stopwatch,
}

impl Behavior for KeepVelocity {
    fn name(&self) -> &str {
        name_of_type!(KeepVelocity)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let actor = some_or_else!(ctx.host.actor(self.actor), {
            ctx.eeg
                .log(format!("[KeepVelocity] actor {} is gone", self.actor));
            return Action::Abort;
        });

        if self.stopwatch.tick(ctx.time()) >= self.duration {
            stop_actor(ctx, self.actor);
            return Action::Return;
        }

        let forward = actor.transform.forward_axis();
        let heading = Vector3::new(forward.x, forward.y, 0.0)
            .try_normalize(1e-6)
            .unwrap_or_else(Vector3::x);
        match ctx
            .host
            .set_target_velocity(self.actor, heading * self.target_speed)
        {
            Ok(()) => Action::Yield,
            Err(err) => {
                ctx.eeg.log(format!("[KeepVelocity] {}", err));
                Action::Abort
            }
        }
    }

    fn terminate(&mut self, ctx: &mut Context<'_>) {
        stop_actor(ctx, self.actor);
    }
}
