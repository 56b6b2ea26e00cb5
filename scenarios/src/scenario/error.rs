use common::{host::HostError, prelude::*};
use nalgebra::Point3;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ScenarioError {
    NoEgoVehicle,
    /// The configuration has fewer other actors than the scenario needs.
    MissingOtherActor(usize),
    NoWaypoint(Point3<f32>),
    UnknownScenario(String),
    Config { line: u64, message: String },
    HostPoisoned,
    Host(HostError),
    Csv(csv::Error),
    Io(io::Error),
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScenarioError::Host(err) => Some(err),
            ScenarioError::Csv(err) => Some(err),
            ScenarioError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::NoEgoVehicle => write!(f, "scenario needs an ego vehicle"),
            ScenarioError::MissingOtherActor(index) => {
                write!(f, "configuration has no other actor #{}", index)
            }
            ScenarioError::NoWaypoint(location) => {
                write!(f, "no waypoint near {}", location.pretty())
            }
            ScenarioError::UnknownScenario(name) => write!(f, "unknown scenario {:?}", name),
            ScenarioError::Config { line, message } => {
                write!(f, "bad configuration on line {}: {}", line, message)
            }
            ScenarioError::HostPoisoned => write!(f, "host lock was poisoned"),
            ScenarioError::Host(err) => write!(f, "host: {}", err),
            ScenarioError::Csv(err) => write!(f, "csv: {}", err),
            ScenarioError::Io(err) => write!(f, "io: {}", err),
        }
    }
}

impl From<HostError> for ScenarioError {
    fn from(err: HostError) -> Self {
        ScenarioError::Host(err)
    }
}

impl From<csv::Error> for ScenarioError {
    fn from(err: csv::Error) -> Self {
        ScenarioError::Csv(err)
    }
}

impl From<io::Error> for ScenarioError {
    fn from(err: io::Error) -> Self {
        ScenarioError::Io(err)
    }
}
