//! Test doubles for running scenarios without a real simulator.

use crate::{
    manager::{ScenarioManager, ScenarioResult},
    scenario::{
        ActorConfiguration, Scenario, ScenarioConfiguration, ScenarioDefinition, ScenarioOptions,
    },
};
use common::{
    host::{ActorId, ActorSnapshot, Host, HostError, Map},
    Transform,
};
use nalgebra::Vector3;
use simulate::{LaneMap, SimWorld};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    RequestNewActor { type_id: String, transform: Transform },
    RemoveAllActors,
    SetTargetVelocity(ActorId, Vector3<f32>),
}

/// A `SimWorld` on the demo map that remembers every command it was given.
pub struct RecordingHost {
    world: SimWorld,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            world: SimWorld::new(LaneMap::leaderboard_demo()),
            calls: Vec::new(),
        }
    }

    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Spawn an ego vehicle, bypassing the call log.
    pub fn spawn_ego(&mut self, config: &ActorConfiguration) -> ActorId {
        let id = self
            .world
            .spawn_ego(&config.model, &config.transform)
            .unwrap();
        if config.autopilot {
            self.world.set_autopilot(id, Some(config.speed)).unwrap();
        }
        id
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Host for RecordingHost {
    fn request_new_actor(
        &mut self,
        type_id: &str,
        transform: &Transform,
    ) -> Result<ActorId, HostError> {
        self.calls.push(HostCall::RequestNewActor {
            type_id: type_id.to_string(),
            transform: *transform,
        });
        self.world.request_new_actor(type_id, transform)
    }

    fn remove_all_actors(&mut self) {
        self.calls.push(HostCall::RemoveAllActors);
        self.world.remove_all_actors();
    }

    fn map(&self) -> &dyn Map {
        self.world.map()
    }

    fn actor(&self, id: ActorId) -> Option<ActorSnapshot> {
        self.world.actor(id)
    }

    fn actors(&self) -> Vec<ActorSnapshot> {
        self.world.actors()
    }

    fn set_target_velocity(
        &mut self,
        id: ActorId,
        velocity: Vector3<f32>,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::SetTargetVelocity(id, velocity));
        self.world.set_target_velocity(id, velocity)
    }

    fn tick(&mut self, dt: f32) {
        self.world.tick(dt);
    }

    fn elapsed_seconds(&self) -> f32 {
        self.world.elapsed_seconds()
    }
}

/// Runs a whole scenario against a `RecordingHost`, with the egos from the
/// configuration on autopilot.
pub struct TestRunner<D> {
    definition: D,
    config: ScenarioConfiguration,
    options: ScenarioOptions,
    host: Arc<Mutex<RecordingHost>>,
    dt: f32,
}

impl<D: ScenarioDefinition> TestRunner<D> {
    pub fn new(definition: D, config: ScenarioConfiguration) -> Self {
        Self {
            definition,
            config,
            options: ScenarioOptions::default(),
            host: RecordingHost::shared(),
            dt: 0.05,
        }
    }

    pub fn options(mut self, options: ScenarioOptions) -> Self {
        self.options = options;
        self
    }

    pub fn host(&self) -> Arc<Mutex<RecordingHost>> {
        self.host.clone()
    }

    /// Run for at most `seconds` of simulated time.
    pub fn run_for(mut self, seconds: f32) -> ScenarioResult {
        let ego_vehicles = {
            let mut host = self.host.lock().unwrap();
            self.config
                .ego_vehicles
                .iter()
                .map(|ego| host.spawn_ego(ego))
                .collect()
        };
        let scenario = Scenario::new(
            &mut self.definition,
            self.host.clone(),
            ego_vehicles,
            &self.config,
            self.options,
        )
        .unwrap();

        let max_ticks = (seconds / self.dt).ceil() as usize;
        ScenarioManager::new(scenario)
            .run_for(self.dt, max_ticks)
            .unwrap()
    }
}
