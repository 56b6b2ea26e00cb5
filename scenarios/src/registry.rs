//! Look up scenarios by name.

use crate::{
    leaderboard::{LeaderboardVideo, LeaderboardXavi},
    scenario::{ScenarioConfiguration, ScenarioDefinition, ScenarioError},
};

pub const SCENARIOS: &[&str] = &[LeaderboardVideo::NAME, LeaderboardXavi::NAME];

pub fn build(name: &str) -> Result<Box<dyn ScenarioDefinition + Send>, ScenarioError> {
    match name {
        LeaderboardVideo::NAME => Ok(Box::new(LeaderboardVideo::new())),
        LeaderboardXavi::NAME => Ok(Box::new(LeaderboardXavi::new(false))),
        _ => Err(ScenarioError::UnknownScenario(name.to_string())),
    }
}

/// A configuration that works with the demo lane map.
pub fn demo_configuration(name: &str) -> Result<ScenarioConfiguration, ScenarioError> {
    match name {
        LeaderboardVideo::NAME => Ok(LeaderboardVideo::demo_configuration()),
        LeaderboardXavi::NAME => Ok(LeaderboardXavi::demo_configuration()),
        _ => Err(ScenarioError::UnknownScenario(name.to_string())),
    }
}
