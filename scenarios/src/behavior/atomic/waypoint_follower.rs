use crate::{
    behavior::{atomic::stop_actor, Action, Behavior, Context},
    eeg::Event,
};
use common::host::{ActorId, ActorSnapshot};
use nalgebra::Vector3;
use nameof::name_of_type;
use simulate::velocity_along_lane;

/// Half the width of a lane. Anything further to the side is not in our way.
const LANE_HALF_WIDTH: f32 = 1.75;
/// Always look at least this far ahead for obstacles.
const MIN_HAZARD_DISTANCE: f32 = 5.0;
/// Look as far ahead as we would travel in this many seconds.
const HAZARD_SECONDS: f32 = 1.5;

/// Drive `actor` down its lane at `target_speed` (m/s). Returns when the lane
/// runs out. With `avoid_collision`, vehicles brake for anything in the lane
/// ahead of them.
pub struct WaypointFollower {
    actor: ActorId,
    target_speed: f32,
    avoid_collision: bool,
    braking: bool,
}

impl WaypointFollower {
    pub fn new(actor: ActorId, target_speed: f32, avoid_collision: bool) -> Self {
        Self {
            actor,
            target_speed,
            avoid_collision,
            braking: false,
        }
    }

    fn hazard_ahead(&self, me: &ActorSnapshot, others: &[ActorSnapshot]) -> Option<ActorId> {
        let forward = me.transform.forward_axis();
        let reach = (self.target_speed * HAZARD_SECONDS).max(MIN_HAZARD_DISTANCE);
        others
            .iter()
            .filter(|other| other.id != me.id)
            .find(|other| {
                let offset = other.transform.location - me.transform.location;
                let ahead = forward.dot(&offset);
                let aside = (offset - forward.into_inner() * ahead).norm();
                ahead > 0.0 && ahead <= reach && aside <= LANE_HALF_WIDTH
            })
            .map(|other| other.id)
    }
}

impl Behavior for WaypointFollower {
    fn name(&self) -> &str {
        name_of_type!(WaypointFollower)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> Action {
        let me = some_or_else!(ctx.host.actor(self.actor), {
            ctx.eeg
                .log(format!("[WaypointFollower] actor {} is gone", self.actor));
            return Action::Abort;
        });

        if self.avoid_collision && !me.is_walker() {
            let hazard = self.hazard_ahead(&me, &ctx.host.actors());
            match hazard {
                Some(obstacle) => {
                    if !self.braking {
                        ctx.eeg.track(Event::CollisionHazard);
                        ctx.eeg.log(format!(
                            "[WaypointFollower] braking for actor {}",
                            obstacle,
                        ));
                    }
                    self.braking = true;
                    stop_actor(ctx, self.actor);
                    return Action::Yield;
                }
                None => self.braking = false,
            }
        }

        let velocity =
            velocity_along_lane(ctx.host.map(), &me.transform.location, self.target_speed);
        let velocity: Vector3<f32> = some_or_else!(velocity, {
            ctx.eeg.track(Event::EndOfLane);
            ctx.eeg.log(format!(
                "[WaypointFollower] actor {} ran out of lane",
                self.actor,
            ));
            stop_actor(ctx, self.actor);
            return Action::Return;
        });

        match ctx.host.set_target_velocity(self.actor, velocity) {
            Ok(()) => Action::Yield,
            Err(err) => {
                ctx.eeg.log(format!("[WaypointFollower] {}", err));
                Action::Abort
            }
        }
    }

    fn terminate(&mut self, ctx: &mut Context<'_>) {
        stop_actor(ctx, self.actor);
    }
}
