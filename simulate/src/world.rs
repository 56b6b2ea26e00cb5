use crate::{blueprint::BlueprintLibrary, lane_follow::velocity_along_lane, lane_map::LaneMap};
use common::{
    host::{ActorId, ActorSnapshot, Host, HostError, Map},
    prelude::*,
    Transform,
};
use nalgebra::{Rotation3, Vector3};

/// A kinematic world. Actors move at whatever velocity they were last given,
/// and face the direction they are moving.
pub struct SimWorld {
    map: LaneMap,
    blueprints: BlueprintLibrary,
    actors: Vec<SimActor>,
    next_id: ActorId,
    elapsed: f32,
}

struct SimActor {
    id: ActorId,
    type_id: String,
    transform: Transform,
    velocity: Vector3<f32>,
    /// Lane-following speed, if the world is driving this actor itself.
    autopilot: Option<f32>,
    /// Whether this actor was handed out by `request_new_actor`, and is
    /// therefore cleaned up by `remove_all_actors`.
    provided: bool,
}

impl SimWorld {
    pub fn new(map: LaneMap) -> Self {
        Self::with_blueprints(map, BlueprintLibrary::default())
    }

    pub fn with_blueprints(map: LaneMap, blueprints: BlueprintLibrary) -> Self {
        Self {
            map,
            blueprints,
            actors: Vec::new(),
            next_id: 1,
            elapsed: 0.0,
        }
    }

    /// Spawn the vehicle under test. Unlike scenario actors, it survives
    /// `remove_all_actors`.
    pub fn spawn_ego(&mut self, type_id: &str, transform: &Transform) -> Result<ActorId, HostError> {
        self.spawn(type_id, transform, false)
    }

    /// Let the world drive `id` along its lane at `speed`, or stop doing so.
    pub fn set_autopilot(&mut self, id: ActorId, speed: Option<f32>) -> Result<(), HostError> {
        let actor = self.actor_mut(id)?;
        actor.autopilot = speed;
        if speed.is_none() {
            actor.velocity = Vector3::zeros();
        }
        Ok(())
    }

    fn spawn(
        &mut self,
        type_id: &str,
        transform: &Transform,
        provided: bool,
    ) -> Result<ActorId, HostError> {
        let blueprint = self
            .blueprints
            .find(type_id)
            .ok_or_else(|| HostError::NoMatchingBlueprint(type_id.to_string()))?
            .to_string();

        let id = self.next_id;
        self.next_id += 1;
        log::info!("spawned {} #{} at {}", blueprint, id, transform.pretty());
        self.actors.push(SimActor {
            id,
            type_id: blueprint,
            transform: *transform,
            velocity: Vector3::zeros(),
            autopilot: None,
            provided,
        });
        Ok(id)
    }

    fn actor_mut(&mut self, id: ActorId) -> Result<&mut SimActor, HostError> {
        self.actors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(HostError::UnknownActor(id))
    }
}

impl SimActor {
    fn snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            id: self.id,
            type_id: self.type_id.clone(),
            transform: self.transform,
            velocity: self.velocity,
        }
    }
}

impl Host for SimWorld {
    fn request_new_actor(
        &mut self,
        type_id: &str,
        transform: &Transform,
    ) -> Result<ActorId, HostError> {
        self.spawn(type_id, transform, true)
    }

    fn remove_all_actors(&mut self) {
        let before = self.actors.len();
        self.actors.retain(|a| !a.provided);
        log::info!("removed {} actors", before - self.actors.len());
    }

    fn map(&self) -> &dyn Map {
        &self.map
    }

    fn actor(&self, id: ActorId) -> Option<ActorSnapshot> {
        self.actors
            .iter()
            .find(|a| a.id == id)
            .map(SimActor::snapshot)
    }

    fn actors(&self) -> Vec<ActorSnapshot> {
        self.actors.iter().map(SimActor::snapshot).collect()
    }

    fn set_target_velocity(
        &mut self,
        id: ActorId,
        velocity: Vector3<f32>,
    ) -> Result<(), HostError> {
        self.actor_mut(id)?.velocity = velocity;
        Ok(())
    }

    fn tick(&mut self, dt: f32) {
        let map = &self.map;
        for actor in &mut self.actors {
            if let Some(speed) = actor.autopilot {
                actor.velocity = velocity_along_lane(map, &actor.transform.location, speed)
                    .unwrap_or_else(Vector3::zeros);
            }

            actor.transform.location += actor.velocity * dt;

            if actor.velocity.x != 0.0 || actor.velocity.y != 0.0 {
                let yaw = actor.velocity.y.atan2(actor.velocity.x);
                actor.transform.rotation = Rotation3::from_unreal_angles(0.0, yaw, 0.0);
            }
        }
        self.elapsed += dt;
    }

    fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }
}
