//! Leaf behaviors. Each one either watches the world (conditions) or pushes an
//! actor around (actions).

pub use self::{
    idle::Idle, in_time_to_arrival::InTimeToArrivalToLocation, keep_velocity::KeepVelocity,
    time_out::TimeOut, waypoint_follower::WaypointFollower,
};

use crate::behavior::Context;
use common::host::ActorId;
use nalgebra::Vector3;

mod idle;
mod in_time_to_arrival;
mod keep_velocity;
mod time_out;
mod waypoint_follower;

/// Bring an actor to a halt. Failures are only logged, since this is used
/// while tearing down.
fn stop_actor(ctx: &mut Context<'_>, actor: ActorId) {
    if let Err(err) = ctx.host.set_target_velocity(actor, Vector3::zeros()) {
        ctx.eeg.log(format!("could not stop actor {}: {}", actor, err));
    }
}
