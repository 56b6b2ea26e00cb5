use crate::{
    behavior::{Action, Behavior, Context},
    eeg::Event,
};
use common::{host::ActorId, prelude::*};
use derive_new::new;
use nalgebra::Point3;
use nameof::name_of_type;

/// Below this speed an actor is considered parked, and will never arrive.
const EPSILON: f32 = 0.001;

/// Return once `actor`, moving at its current speed, would reach `location` in
/// less than `time` seconds.
#[derive(new)]
pub struct InTimeToArrivalToLocation {
    actor: ActorId,
    time: f32,
    location: Point3<f32>,
}

impl Behavior for InTimeToArrivalToLocation {
    fn name(&self) -> &str {
        name_of_type!(InTimeToArrivalToLocation)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let actor = some_or_else!(ctx.host.actor(self.actor), {
            ctx.eeg.log(format!(
                "[InTimeToArrivalToLocation] actor {} is gone",
                self.actor,
            ));
            return Action::Abort;
        });

        let distance = (actor.transform.location - self.location).norm();
        let speed = actor.speed();
        let time_to_arrival = if speed > EPSILON {
            distance / speed
        } else {
            f32::INFINITY
        };

        if time_to_arrival < self.time {
            ctx.eeg.track(Event::ArrivalTriggered);
            ctx.eeg.log(format!(
                "[InTimeToArrivalToLocation] {:.2}s away from {}",
                time_to_arrival,
                self.location.pretty(),
            ));
            Action::Return
        } else {
            Action::Yield
        }
    }
}
