use crate::{
    scenario::{ScenarioConfiguration, ScenarioError},
    tree::{Atomic, Node, ParallelPolicy},
};
use common::host::{ActorId, Host, Map, SharedHost};
use std::sync::PoisonError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScenarioOptions {
    /// Accepted for compatibility. Neither leaderboard scenario randomizes
    /// anything.
    pub randomize: bool,
    /// Log the full tree when the scenario starts, and its status every tick.
    pub debug_mode: bool,
    pub criteria_enable: bool,
    /// Seconds until the whole scenario is cut short.
    pub timeout: f32,
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self {
            randomize: false,
            debug_mode: false,
            criteria_enable: true,
            timeout: 60.0,
        }
    }
}

/// The parts that make one scenario different from another.
pub trait ScenarioDefinition {
    fn name(&self) -> &str;

    /// Ask the host for whatever actors the scenario needs, and return them.
    fn initialize_actors(
        &mut self,
        host: &mut dyn Host,
        config: &ScenarioConfiguration,
    ) -> Result<Vec<ActorId>, ScenarioError>;

    fn create_behavior(
        &self,
        ego_vehicles: &[ActorId],
        map: &dyn Map,
    ) -> Result<Node, ScenarioError>;

    fn create_test_criteria(&self) -> Vec<Node>;
}

/// A scenario that has been set up in a host, with its actors spawned and its
/// tree built. Dropping it removes the actors again.
pub struct Scenario {
    name: String,
    host: SharedHost,
    ego_vehicles: Vec<ActorId>,
    other_actors: Vec<ActorId>,
    behavior: Node,
    criteria: Vec<Node>,
    options: ScenarioOptions,
}

impl Scenario {
    pub fn new(
        definition: &mut dyn ScenarioDefinition,
        host: SharedHost,
        ego_vehicles: Vec<ActorId>,
        config: &ScenarioConfiguration,
        options: ScenarioOptions,
    ) -> Result<Self, ScenarioError> {
        let (other_actors, behavior) = {
            let mut guard = host.lock().map_err(|_| ScenarioError::HostPoisoned)?;
            match build(definition, &mut *guard, &ego_vehicles, config) {
                Ok(built) => built,
                Err(err) => {
                    log::warn!("[{}] setup failed: {}", definition.name(), err);
                    guard.remove_all_actors();
                    return Err(err);
                }
            }
        };

        let criteria = if options.criteria_enable {
            definition.create_test_criteria()
        } else {
            Vec::new()
        };

        log::info!(
            "[{}] ready with {} ego vehicle(s) and {} other actor(s)",
            definition.name(),
            ego_vehicles.len(),
            other_actors.len(),
        );

        Ok(Self {
            name: definition.name().to_string(),
            host,
            ego_vehicles,
            other_actors,
            behavior,
            criteria,
            options,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &SharedHost {
        &self.host
    }

    pub fn ego_vehicles(&self) -> &[ActorId] {
        &self.ego_vehicles
    }

    pub fn other_actors(&self) -> &[ActorId] {
        &self.other_actors
    }

    pub fn behavior(&self) -> &Node {
        &self.behavior
    }

    pub fn criteria(&self) -> &[Node] {
        &self.criteria
    }

    pub fn options(&self) -> &ScenarioOptions {
        &self.options
    }

    /// The behavior, raced against the criteria and the timeout.
    pub fn scenario_tree(&self) -> Node {
        let mut children = vec![self.behavior.clone()];
        if !self.criteria.is_empty() {
            children.push(Node::parallel(
                "Criteria",
                ParallelPolicy::SuccessOnAll,
                self.criteria.clone(),
            ));
        }
        children.push(Node::Atomic(Atomic::TimeOut {
            timeout: self.options.timeout,
        }));
        Node::parallel(self.name.clone(), ParallelPolicy::SuccessOnOne, children)
    }
}

fn build(
    definition: &mut dyn ScenarioDefinition,
    host: &mut dyn Host,
    ego_vehicles: &[ActorId],
    config: &ScenarioConfiguration,
) -> Result<(Vec<ActorId>, Node), ScenarioError> {
    let other_actors = definition.initialize_actors(host, config)?;
    let behavior = definition.create_behavior(ego_vehicles, host.map())?;
    Ok((other_actors, behavior))
}

impl Drop for Scenario {
    fn drop(&mut self) {
        log::info!("[{}] removing all actors", self.name);
        // Teardown must happen even if someone panicked while holding the host.
        let mut host = self.host.lock().unwrap_or_else(PoisonError::into_inner);
        host.remove_all_actors();
    }
}
