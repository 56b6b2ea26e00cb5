use crate::{
    behavior::{Action, Behavior, Context},
    eeg::{Event, EEG},
    recorder::Recorder,
    scenario::{Scenario, ScenarioError},
};
use std::io::Write;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The behavior ran to completion.
    Success,
    /// Something in the tree aborted.
    Failure,
    /// The scenario was cut short, either by its own `TimeOut` or by running
    /// out of ticks.
    Timeout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub outcome: Outcome,
    /// Simulated seconds from the first tick to the last.
    pub game_duration: f32,
    pub ticks: usize,
}

/// Ticks the world and a scenario's tree in lockstep until the tree finishes.
pub struct ScenarioManager {
    scenario: Scenario,
    root: Box<dyn Behavior>,
    eeg: EEG,
    recorder: Option<Recorder<Box<dyn Write>>>,
    start_time: Option<f32>,
    last_time: f32,
    ticks: usize,
    outcome: Option<Outcome>,
}

impl ScenarioManager {
    pub fn new(scenario: Scenario) -> Self {
        let tree = scenario.scenario_tree();
        if scenario.options().debug_mode {
            log::info!("[{}] behavior tree:\n{}", scenario.name(), tree);
        }
        let root = tree.instantiate();
        log::debug!("[{}] root is {}", scenario.name(), root.name());

        Self {
            scenario,
            root,
            eeg: EEG::new(),
            recorder: None,
            start_time: None,
            last_time: 0.0,
            ticks: 0,
            outcome: None,
        }
    }

    pub fn with_recorder(mut self, recorder: Recorder<Box<dyn Write>>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn eeg(&self) -> &EEG {
        &self.eeg
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Advance the world by `dt` and run the tree once. Returns the outcome
    /// once the tree has finished. Further calls do nothing.
    pub fn tick(&mut self, dt: f32) -> Result<Option<Outcome>, ScenarioError> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        let shared = self.scenario.host().clone();
        let mut host = shared.lock().map_err(|_| ScenarioError::HostPoisoned)?;

        let start_time = *self.start_time.get_or_insert(host.elapsed_seconds());
        host.tick(dt);
        let time = host.elapsed_seconds();
        self.last_time = time;
        self.ticks += 1;

        self.eeg.begin(time - start_time);
        let action = self
            .root
            .execute(&mut Context::new(&mut *host, &mut self.eeg));
        if self.scenario.options().debug_mode {
            self.eeg.log(format!(
                "[ScenarioManager] tick {} {:?}: {}",
                self.ticks,
                action,
                self.root.name(),
            ));
        }

        if let Some(recorder) = &mut self.recorder {
            recorder.write(time - start_time, &host.actors())?;
        }

        let outcome = match action {
            Action::Yield => None,
            Action::Return if self.eeg.events.contains(&Event::TimeOut) => Some(Outcome::Timeout),
            Action::Return => Some(Outcome::Success),
            Action::Abort => Some(Outcome::Failure),
        };
        if let Some(outcome) = outcome {
            self.finish(outcome)?;
        }
        Ok(outcome)
    }

    /// Tick until the tree finishes, giving up after `max_ticks`.
    pub fn run_for(&mut self, dt: f32, max_ticks: usize) -> Result<ScenarioResult, ScenarioError> {
        while self.outcome.is_none() && self.ticks < max_ticks {
            self.tick(dt)?;
        }
        if self.outcome.is_none() {
            log::warn!(
                "[{}] still running after {} ticks",
                self.scenario.name(),
                self.ticks,
            );
            let shared = self.scenario.host().clone();
            let mut host = shared.lock().map_err(|_| ScenarioError::HostPoisoned)?;
            self.root
                .terminate(&mut Context::new(&mut *host, &mut self.eeg));
            drop(host);
            self.finish(Outcome::Timeout)?;
        }
        Ok(self.result())
    }

    pub fn result(&self) -> ScenarioResult {
        ScenarioResult {
            name: self.scenario.name().to_string(),
            outcome: self.outcome.unwrap_or(Outcome::Timeout),
            game_duration: self.last_time - self.start_time.unwrap_or(self.last_time),
            ticks: self.ticks,
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), ScenarioError> {
        log::info!(
            "[{}] finished with {:?} after {} ticks",
            self.scenario.name(),
            outcome,
            self.ticks,
        );
        self.outcome = Some(outcome);
        if let Some(recorder) = &mut self.recorder {
            recorder.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        integration_tests::RecordingHost,
        manager::{Outcome, ScenarioManager},
        recorder::Recorder,
        scenario::{
            Scenario, ScenarioConfiguration, ScenarioDefinition, ScenarioError, ScenarioOptions,
        },
        tree::{Atomic, Node},
    };
    use common::host::{ActorId, Host, Map};
    use std::io::Write;

    struct Fixed(Node);

    impl ScenarioDefinition for Fixed {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn initialize_actors(
            &mut self,
            _host: &mut dyn Host,
            _config: &ScenarioConfiguration,
        ) -> Result<Vec<ActorId>, ScenarioError> {
            Ok(Vec::new())
        }

        fn create_behavior(
            &self,
            _ego_vehicles: &[ActorId],
            _map: &dyn Map,
        ) -> Result<Node, ScenarioError> {
            Ok(self.0.clone())
        }

        fn create_test_criteria(&self) -> Vec<Node> {
            Vec::new()
        }
    }

    fn manager(behavior: Node, timeout: f32) -> ScenarioManager {
        let options = ScenarioOptions {
            timeout,
            debug_mode: true,
            ..Default::default()
        };
        manager_with(behavior, options)
    }

    fn manager_with(behavior: Node, options: ScenarioOptions) -> ScenarioManager {
        let scenario = Scenario::new(
            &mut Fixed(behavior),
            RecordingHost::shared(),
            Vec::new(),
            &ScenarioConfiguration::default(),
            options,
        )
        .unwrap();
        ScenarioManager::new(scenario)
    }

    #[test]
    fn success_when_the_behavior_finishes() {
        let mut manager = manager(Node::Atomic(Atomic::Idle { duration: 1.0 }), 60.0);
        let result = manager.run_for(0.1, 1000).unwrap();
        assert_eq!(result.name, "Fixed");
        assert_eq!(result.outcome, Outcome::Success);
        assert!(result.game_duration > 0.95, "{}", result.game_duration);
        assert!(result.game_duration < 1.35, "{}", result.game_duration);
    }

    #[test]
    fn timeout_when_the_behavior_takes_too_long() {
        let mut manager = manager(Node::Atomic(Atomic::Idle { duration: 10.0 }), 2.0);
        let result = manager.run_for(0.1, 1000).unwrap();
        assert_eq!(result.outcome, Outcome::Timeout);
        assert!(result.game_duration < 2.5);
    }

    #[test]
    fn failure_when_something_aborts() {
        // Nobody is actor 99.
        let behavior = Node::Atomic(Atomic::KeepVelocity {
            actor: 99,
            target_speed: 1.0,
            duration: 1.0,
        });
        let mut manager = manager(behavior, 60.0);
        let result = manager.run_for(0.1, 1000).unwrap();
        assert_eq!(result.outcome, Outcome::Failure);
        assert_eq!(result.ticks, 1);
    }

    #[test]
    fn timeout_when_out_of_ticks() {
        let mut manager = manager(Node::Atomic(Atomic::Idle { duration: 10.0 }), 60.0);
        let result = manager.run_for(0.1, 5).unwrap();
        assert_eq!(result.outcome, Outcome::Timeout);
        assert_eq!(result.ticks, 5);
    }

    #[test]
    fn ticking_after_the_end_does_nothing() {
        let mut manager = manager(Node::Atomic(Atomic::Idle { duration: 0.0 }), 60.0);
        assert_eq!(manager.tick(0.1).unwrap(), Some(Outcome::Success));
        assert_eq!(manager.tick(0.1).unwrap(), Some(Outcome::Success));
        assert_eq!(manager.result().ticks, 1);
    }

    fn status_lines(manager: &ScenarioManager) -> Vec<String> {
        manager
            .eeg()
            .log
            .iter()
            .filter(|line| line.starts_with("[ScenarioManager]"))
            .cloned()
            .collect()
    }

    #[test]
    fn debug_mode_logs_the_tree_every_tick() {
        let behavior = Node::sequence("Sequence", vec![
            Node::Atomic(Atomic::Idle { duration: 0.5 }),
            Node::Atomic(Atomic::Idle { duration: 0.5 }),
        ]);
        let mut manager = manager(behavior, 60.0);
        let result = manager.run_for(0.25, 1000).unwrap();

        let lines = status_lines(&manager);
        assert_eq!(lines.len(), result.ticks);
        assert!(lines[0].starts_with("[ScenarioManager] tick 1 Yield: Parallel SuccessOnOne"));
        assert!(lines[0].contains("Sequence (Idle, Idle)"), "{}", lines[0]);
        assert!(lines.iter().any(|l| l.contains("Sequence (Idle)")));
    }

    #[test]
    fn quiet_without_debug_mode() {
        let options = ScenarioOptions {
            debug_mode: false,
            ..Default::default()
        };
        let mut manager = manager_with(Node::Atomic(Atomic::Idle { duration: 1.0 }), options);
        manager.run_for(0.25, 1000).unwrap();
        assert!(status_lines(&manager).is_empty());
    }

    #[test]
    fn records_every_tick() {
        let buffer: Vec<u8> = Vec::new();
        let writer: Box<dyn Write> = Box::new(buffer);
        let mut manager = manager(Node::Atomic(Atomic::Idle { duration: 1.0 }), 60.0)
            .with_recorder(Recorder::new(writer));
        let result = manager.run_for(0.25, 1000).unwrap();
        assert_eq!(result.outcome, Outcome::Success);
        assert_eq!(result.ticks, 5);
    }
}
