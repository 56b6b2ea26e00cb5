use crate::{
    leaderboard::{first_ego, lane_location, spawn_invader},
    scenario::{ActorConfiguration, ScenarioConfiguration, ScenarioDefinition, ScenarioError},
    tree::{Atomic, Condition, Node, ParallelPolicy},
};
use common::{
    host::{ActorId, Host, Map},
    prelude::*,
    Transform,
};
use nalgebra::{Point3, Rotation3};

/// A car in the opposite lane jitters past the ego vehicle, as if its driver
/// had lost control for a moment.
pub struct LeaderboardVideo {
    invading_car: Option<ActorId>,
}

impl LeaderboardVideo {
    pub const NAME: &'static str = "LeaderboardVideo";
    pub const VEHICLE: &'static str = "vehicle.tesla.model3";

    const TRIGGER_LOCATION: [f32; 3] = [-1.5, 66.2, 0.5];
    const TRIGGER_TIME: f32 = 3.0;
    const TARGET_SPEED: f32 = 10.0;
    const JITTER_DURATION: f32 = 7.0;

    pub fn new() -> Self {
        Self { invading_car: None }
    }

    pub fn invading_car(&self) -> Option<ActorId> {
        self.invading_car
    }

    /// The ego heads north on road 1 while the car waits in the southbound
    /// lane, 80 meters up the road.
    pub fn demo_configuration() -> ScenarioConfiguration {
        let mut ego = ActorConfiguration::new(
            "vehicle.lincoln.mkz2017".to_string(),
            Transform::new(
                Point3::new(-1.5, 20.0, 0.5),
                Rotation3::from_unreal_degrees(0.0, 90.0, 0.0),
            ),
            "hero".to_string(),
        );
        ego.speed = 10.0;
        ego.autopilot = true;

        let car = ActorConfiguration::new(
            Self::VEHICLE.to_string(),
            Transform::new(
                Point3::new(1.5, 100.0, 0.5),
                Rotation3::from_unreal_degrees(0.0, -90.0, 0.0),
            ),
            "scenario".to_string(),
        );

        ScenarioConfiguration {
            town: "LeaderboardDemo".to_string(),
            ego_vehicles: vec![ego],
            other_actors: vec![car],
            ..ScenarioConfiguration::new("demo", Self::NAME)
        }
    }
}

impl Default for LeaderboardVideo {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioDefinition for LeaderboardVideo {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn initialize_actors(
        &mut self,
        host: &mut dyn Host,
        config: &ScenarioConfiguration,
    ) -> Result<Vec<ActorId>, ScenarioError> {
        let car = spawn_invader(host, Self::VEHICLE, config)?;
        self.invading_car = Some(car);
        Ok(vec![car])
    }

    fn create_behavior(
        &self,
        ego_vehicles: &[ActorId],
        map: &dyn Map,
    ) -> Result<Node, ScenarioError> {
        let ego = first_ego(ego_vehicles)?;
        let car = self
            .invading_car
            .ok_or(ScenarioError::MissingOtherActor(0))?;
        let [x, y, z] = Self::TRIGGER_LOCATION;
        let location = lane_location(map, Point3::new(x, y, z))?;

        let trigger = Node::Condition(Condition::InTimeToArrivalToLocation {
            actor: ego,
            time: Self::TRIGGER_TIME,
            location,
        });
        let jitter = Node::parallel(
            "Jitter",
            ParallelPolicy::SuccessOnOne,
            vec![
                Node::Atomic(Atomic::WaypointFollower {
                    actor: car,
                    target_speed: Self::TARGET_SPEED,
                    avoid_collision: true,
                }),
                Node::Atomic(Atomic::Idle {
                    duration: Self::JITTER_DURATION,
                }),
            ],
        );
        Ok(Node::sequence("Sequence", vec![trigger, jitter]))
    }

    fn create_test_criteria(&self) -> Vec<Node> {
        Vec::new()
    }
}
