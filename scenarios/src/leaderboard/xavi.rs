use crate::{
    leaderboard::{first_ego, lane_location, spawn_invader},
    scenario::{ActorConfiguration, ScenarioConfiguration, ScenarioDefinition, ScenarioError},
    tree::{Atomic, Condition, Node},
};
use common::{
    host::{ActorId, Host, Map},
    prelude::*,
    Transform,
};
use nalgebra::{Point3, Rotation3};

/// A pedestrian steps off the curb and walks across the road in front of the
/// ego vehicle.
pub struct LeaderboardXavi {
    /// Accepted but ignored. Any walker will do.
    #[allow(dead_code)]
    adversary_type: bool,
    invading_walker: Option<ActorId>,
}

impl LeaderboardXavi {
    pub const NAME: &'static str = "LeaderboardXavi";
    pub const WALKER: &'static str = "walker.*";

    const TRIGGER_LOCATION: [f32; 3] = [58.60, 140.90, 0.5];
    const TRIGGER_TIME: f32 = 2.0;
    const WALK_SPEED: f32 = 5.0;
    const WALK_DURATION: f32 = 5.0;

    pub fn new(adversary_type: bool) -> Self {
        Self {
            adversary_type,
            invading_walker: None,
        }
    }

    pub fn invading_walker(&self) -> Option<ActorId> {
        self.invading_walker
    }

    /// The ego heads east on road 2. The walker stands on the south side of
    /// the road, facing north.
    pub fn demo_configuration() -> ScenarioConfiguration {
        let mut ego = ActorConfiguration::new(
            "vehicle.lincoln.mkz2017".to_string(),
            Transform::new(
                Point3::new(10.0, 140.9, 0.5),
                Rotation3::from_unreal_degrees(0.0, 0.0, 0.0),
            ),
            "hero".to_string(),
        );
        ego.speed = 8.0;
        ego.autopilot = true;

        let walker = ActorConfiguration::new(
            Self::WALKER.to_string(),
            Transform::new(
                Point3::new(58.6, 130.0, 0.5),
                Rotation3::from_unreal_degrees(0.0, 90.0, 0.0),
            ),
            "scenario".to_string(),
        );

        ScenarioConfiguration {
            town: "LeaderboardDemo".to_string(),
            ego_vehicles: vec![ego],
            other_actors: vec![walker],
            ..ScenarioConfiguration::new("demo", Self::NAME)
        }
    }
}

impl ScenarioDefinition for LeaderboardXavi {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn initialize_actors(
        &mut self,
        host: &mut dyn Host,
        config: &ScenarioConfiguration,
    ) -> Result<Vec<ActorId>, ScenarioError> {
        let walker = spawn_invader(host, Self::WALKER, config)?;
        self.invading_walker = Some(walker);
        Ok(vec![walker])
    }

    fn create_behavior(
        &self,
        ego_vehicles: &[ActorId],
        map: &dyn Map,
    ) -> Result<Node, ScenarioError> {
        let ego = first_ego(ego_vehicles)?;
        let walker = self
            .invading_walker
            .ok_or(ScenarioError::MissingOtherActor(0))?;
        let [x, y, z] = Self::TRIGGER_LOCATION;
        let location = lane_location(map, Point3::new(x, y, z))?;

        Ok(Node::sequence("Sequence", vec![
            Node::Condition(Condition::InTimeToArrivalToLocation {
                actor: ego,
                time: Self::TRIGGER_TIME,
                location,
            }),
            Node::Atomic(Atomic::KeepVelocity {
                actor: walker,
                target_speed: Self::WALK_SPEED,
                duration: Self::WALK_DURATION,
            }),
        ]))
    }

    fn create_test_criteria(&self) -> Vec<Node> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        integration_tests::{HostCall, RecordingHost, TestRunner},
        leaderboard::LeaderboardXavi,
        manager::Outcome,
        scenario::{Scenario, ScenarioDefinition, ScenarioError, ScenarioOptions},
        tree::{Atomic, Condition, Node},
    };
    use nalgebra::Point3;

    #[test]
    fn requests_a_walker_and_builds_the_crossing() {
        let config = LeaderboardXavi::demo_configuration();
        let host = RecordingHost::shared();
        let ego = host.lock().unwrap().spawn_ego(&config.ego_vehicles[0]);
        let mut definition = LeaderboardXavi::new(false);
        let scenario = Scenario::new(
            &mut definition,
            host.clone(),
            vec![ego],
            &config,
            ScenarioOptions::default(),
        )
        .unwrap();

        assert_eq!(host.lock().unwrap().calls[0], HostCall::RequestNewActor {
            type_id: "walker.*".to_string(),
            transform: config.other_actors[0].transform,
        });

        let walker = definition.invading_walker().unwrap();
        let expected = Node::sequence("Sequence", vec![
            Node::Condition(Condition::InTimeToArrivalToLocation {
                actor: ego,
                time: 2.0,
                location: Point3::new(58.6, 140.9, 0.0),
            }),
            Node::Atomic(Atomic::KeepVelocity {
                actor: walker,
                target_speed: 5.0,
                duration: 5.0,
            }),
        ]);
        assert_eq!(scenario.behavior(), &expected);
        assert!(scenario.criteria().is_empty());
        assert!(definition.create_test_criteria().is_empty());

        drop(scenario);
        assert_eq!(
            host.lock().unwrap().count(&HostCall::RemoveAllActors),
            1,
        );
    }

    #[test]
    fn adversary_type_changes_nothing() {
        let config = LeaderboardXavi::demo_configuration();
        let trees: Vec<Node> = vec![false, true]
            .into_iter()
            .map(|adversary_type| {
                let host = RecordingHost::shared();
                let ego = host.lock().unwrap().spawn_ego(&config.ego_vehicles[0]);
                let scenario = Scenario::new(
                    &mut LeaderboardXavi::new(adversary_type),
                    host.clone(),
                    vec![ego],
                    &config,
                    ScenarioOptions::default(),
                )
                .unwrap();
                scenario.scenario_tree()
            })
            .collect();
        assert_eq!(trees[0], trees[1]);
    }

    #[test]
    fn missing_walker_configuration() {
        let mut config = LeaderboardXavi::demo_configuration();
        config.other_actors.clear();
        let host = RecordingHost::shared();
        let ego = host.lock().unwrap().spawn_ego(&config.ego_vehicles[0]);
        let result = Scenario::new(
            &mut LeaderboardXavi::new(false),
            host.clone(),
            vec![ego],
            &config,
            ScenarioOptions::default(),
        );
        assert!(matches!(result, Err(ScenarioError::MissingOtherActor(0))));
    }

    #[test]
    fn demo_run_walks_the_pedestrian_across() {
        let runner = TestRunner::new(LeaderboardXavi::new(false), LeaderboardXavi::demo_configuration());
        let host = runner.host();
        let result = runner.run_for(30.0);

        assert_eq!(result.outcome, Outcome::Success);
        // About 4 seconds until the trigger, then 5 seconds of walking.
        assert!(result.game_duration > 8.5, "{}", result.game_duration);
        assert!(result.game_duration < 10.0, "{}", result.game_duration);

        let host = host.lock().unwrap();
        let walk = host
            .calls
            .iter()
            .filter(|call| match call {
                HostCall::SetTargetVelocity(_, velocity) => velocity.norm() > 0.0,
                _ => false,
            })
            .count();
        assert!(walk > 0);
    }
}
