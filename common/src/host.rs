//! The interface between scenarios and whatever is simulating the world.
//!
//! Scenarios never own actors or the map. They ask the host for them and hand
//! them back when they are done.

use crate::Transform;
use nalgebra::{Point3, Vector3};
use std::{
    error::Error,
    fmt,
    sync::{Arc, Mutex},
};

/// An opaque handle to an actor living in the host.
pub type ActorId = u32;

/// A host that can be shared between a scenario (which needs it for teardown)
/// and whoever is ticking the world.
pub type SharedHost = Arc<Mutex<dyn Host + Send>>;

pub trait Host {
    /// Spawn an actor. `type_id` may be a pattern like `walker.*`, in which case
    /// the host picks any blueprint that matches.
    fn request_new_actor(
        &mut self,
        type_id: &str,
        transform: &Transform,
    ) -> Result<ActorId, HostError>;

    /// Destroy every actor previously handed out by `request_new_actor`.
    fn remove_all_actors(&mut self);

    fn map(&self) -> &dyn Map;

    fn actor(&self, id: ActorId) -> Option<ActorSnapshot>;

    fn actors(&self) -> Vec<ActorSnapshot>;

    /// Ask the actor to move with the given world-space velocity (m/s) until
    /// told otherwise.
    fn set_target_velocity(&mut self, id: ActorId, velocity: Vector3<f32>)
        -> Result<(), HostError>;

    /// Advance the world clock by `dt` seconds.
    fn tick(&mut self, dt: f32);

    fn elapsed_seconds(&self) -> f32;
}

pub trait Map {
    fn name(&self) -> &str;

    /// Project `location` onto the closest drivable lane.
    fn get_waypoint(&self, location: &Point3<f32>) -> Option<Waypoint>;

    /// Waypoints `distance` meters further down the lane. Empty once the lane
    /// runs out.
    fn next(&self, waypoint: &Waypoint, distance: f32) -> Vec<Waypoint>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActorSnapshot {
    pub id: ActorId,
    pub type_id: String,
    pub transform: Transform,
    pub velocity: Vector3<f32>,
}

impl ActorSnapshot {
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    pub fn is_walker(&self) -> bool {
        self.type_id.starts_with("walker.")
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub transform: Transform,
    pub road_id: u32,
    pub lane_id: i32,
    /// Distance from the start of the lane, in meters.
    pub s: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostError {
    NoMatchingBlueprint(String),
    UnknownActor(ActorId),
}

impl Error for HostError {}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoMatchingBlueprint(type_id) => {
                write!(f, "no blueprint matches {:?}", type_id)
            }
            HostError::UnknownActor(id) => write!(f, "no actor with id {}", id),
        }
    }
}
