//! Short scripted encounters from the leaderboard route set. Each one waits
//! for the ego vehicle to approach a spot and then sets another actor loose.

pub use self::{video::LeaderboardVideo, xavi::LeaderboardXavi};

use crate::scenario::{ActorConfiguration, ScenarioConfiguration, ScenarioError};
use common::host::{ActorId, Host, Map};
use nalgebra::Point3;

mod video;
mod xavi;

fn first_ego(ego_vehicles: &[ActorId]) -> Result<ActorId, ScenarioError> {
    ego_vehicles
        .first()
        .cloned()
        .ok_or(ScenarioError::NoEgoVehicle)
}

fn other_actor(
    config: &ScenarioConfiguration,
    index: usize,
) -> Result<&ActorConfiguration, ScenarioError> {
    config
        .other_actors
        .get(index)
        .ok_or(ScenarioError::MissingOtherActor(index))
}

/// Spawn `type_id` where the configuration put its first other actor.
fn spawn_invader(
    host: &mut dyn Host,
    type_id: &str,
    config: &ScenarioConfiguration,
) -> Result<ActorId, ScenarioError> {
    let transform = other_actor(config, 0)?.transform;
    Ok(host.request_new_actor(type_id, &transform)?)
}

/// The drivable location closest to `location`.
fn lane_location(map: &dyn Map, location: Point3<f32>) -> Result<Point3<f32>, ScenarioError> {
    map.get_waypoint(&location)
        .map(|wp| wp.transform.location)
        .ok_or(ScenarioError::NoWaypoint(location))
}
