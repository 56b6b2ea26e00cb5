pub use self::{
    config::{ActorConfiguration, ScenarioConfiguration},
    error::ScenarioError,
    scenario::{Scenario, ScenarioDefinition, ScenarioOptions},
};

mod config;
mod error;
mod scenario;
