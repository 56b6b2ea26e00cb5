use crate::scenario::ScenarioError;
use common::{prelude::*, Transform};
use derive_new::new;
use nalgebra::{Point3, Rotation3};
use std::{fs::File, io::Read, path::Path};

/// An actor the scenario expects to exist, or to create.
#[derive(new, Clone, Debug, PartialEq)]
pub struct ActorConfiguration {
    /// A blueprint id, or a pattern such as `walker.*`.
    pub model: String,
    pub transform: Transform,
    pub rolename: String,
    /// Cruising speed in m/s, for actors the host drives itself.
    #[new(default)]
    pub speed: f32,
    #[new(default)]
    pub autopilot: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioConfiguration {
    pub name: String,
    pub scenario_type: String,
    pub town: String,
    pub ego_vehicles: Vec<ActorConfiguration>,
    pub other_actors: Vec<ActorConfiguration>,
}

impl ScenarioConfiguration {
    pub fn new(name: impl Into<String>, scenario_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenario_type: scenario_type.into(),
            ..Default::default()
        }
    }

    pub fn from_path(
        name: impl Into<String>,
        scenario_type: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, ScenarioError> {
        let file = File::open(path)?;
        Self::from_csv(name, scenario_type, file)
    }

    /// Read actors from a CSV with the header
    /// `role,model,x,y,z,pitch,yaw,roll,speed,autopilot`.
    ///
    /// `role` is either `ego` or `other`. Angles are in degrees.
    pub fn from_csv(
        name: impl Into<String>,
        scenario_type: impl Into<String>,
        reader: impl Read,
    ) -> Result<Self, ScenarioError> {
        let mut result = Self::new(name, scenario_type);
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let number = |index: usize| -> Result<f32, ScenarioError> {
                let text = row.get(index).unwrap_or("");
                text.parse().map_err(|_| ScenarioError::Config {
                    line,
                    message: format!("column {} is not a number: {:?}", index + 1, text),
                })
            };

            let transform = Transform::new(
                Point3::new(number(2)?, number(3)?, number(4)?),
                Rotation3::from_unreal_degrees(number(5)?, number(6)?, number(7)?),
            );
            let role = row.get(0).unwrap_or("");
            let model = row.get(1).unwrap_or("").to_string();
            let rolename = match role {
                "ego" => "hero",
                "other" => "scenario",
                _ => {
                    return Err(ScenarioError::Config {
                        line,
                        message: format!("unknown role {:?}", role),
                    });
                }
            };

            let mut actor = ActorConfiguration::new(model, transform, rolename.to_string());
            actor.speed = match row.get(8) {
                Some(text) if !text.is_empty() => number(8)?,
                _ => 0.0,
            };
            actor.autopilot = match row.get(9) {
                Some(text) if !text.is_empty() => {
                    text.parse().map_err(|_| ScenarioError::Config {
                        line,
                        message: format!("column 10 is not true or false: {:?}", text),
                    })?
                }
                _ => false,
            };

            if role == "ego" {
                result.ego_vehicles.push(actor);
            } else {
                result.other_actors.push(actor);
            }
        }

        Ok(result)
    }
}
