#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    eeg::{Event, EEG},
    manager::{Outcome, ScenarioManager, ScenarioResult},
    recorder::Recorder,
    scenario::{
        ActorConfiguration, Scenario, ScenarioConfiguration, ScenarioDefinition, ScenarioError,
        ScenarioOptions,
    },
};

macro_rules! some_or_else {
    ($e:expr, $b:block) => {
        match $e {
            Some(x) => x,
            None => $b,
        }
    };
}

pub mod behavior;
mod eeg;
#[cfg(test)]
mod integration_tests;
pub mod leaderboard;
mod manager;
mod recorder;
pub mod registry;
mod scenario;
pub mod tree;
mod utils;
