//! Behavior trees as plain data.
//!
//! Scenarios describe their behavior as a `Node`, which can be inspected and
//! compared. The manager turns it into live `Behavior`s with `instantiate`
//! right before running it.

pub use crate::behavior::higher_order::ParallelPolicy;

use crate::behavior::{
    atomic::{Idle, InTimeToArrivalToLocation, KeepVelocity, TimeOut, WaypointFollower},
    higher_order::{Parallel, Sequence},
    Behavior,
};
use common::{host::ActorId, prelude::*};
use nalgebra::Point3;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Sequence {
        name: String,
        children: Vec<Node>,
    },
    Parallel {
        name: String,
        policy: ParallelPolicy,
        children: Vec<Node>,
    },
    Condition(Condition),
    Atomic(Atomic),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Succeeds once `actor` would reach `location` in under `time` seconds at
    /// its current speed.
    InTimeToArrivalToLocation {
        actor: ActorId,
        time: f32,
        location: Point3<f32>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Atomic {
    WaypointFollower {
        actor: ActorId,
        target_speed: f32,
        avoid_collision: bool,
    },
    Idle {
        duration: f32,
    },
    KeepVelocity {
        actor: ActorId,
        target_speed: f32,
        duration: f32,
    },
    TimeOut {
        timeout: f32,
    },
}

impl Node {
    pub fn sequence(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Sequence {
            name: name.into(),
            children,
        }
    }

    pub fn parallel(name: impl Into<String>, policy: ParallelPolicy, children: Vec<Node>) -> Self {
        Node::Parallel {
            name: name.into(),
            policy,
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Sequence { name, .. } | Node::Parallel { name, .. } => name.as_str(),
            Node::Condition(Condition::InTimeToArrivalToLocation { .. }) => {
                "InTimeToArrivalToLocation"
            }
            Node::Atomic(Atomic::WaypointFollower { .. }) => "WaypointFollower",
            Node::Atomic(Atomic::Idle { .. }) => "Idle",
            Node::Atomic(Atomic::KeepVelocity { .. }) => "KeepVelocity",
            Node::Atomic(Atomic::TimeOut { .. }) => "TimeOut",
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Sequence { children, .. } | Node::Parallel { children, .. } => children.as_slice(),
            Node::Condition(_) | Node::Atomic(_) => &[],
        }
    }

    /// Build a fresh, never-ticked behavior from this description.
    pub fn instantiate(&self) -> Box<dyn Behavior> {
        match self {
            Node::Sequence { children, .. } => Box::new(Sequence::new(
                children.iter().map(Node::instantiate).collect(),
            )),
            Node::Parallel {
                policy, children, ..
            } => Box::new(Parallel::new(
                *policy,
                children.iter().map(Node::instantiate).collect(),
            )),
            Node::Condition(Condition::InTimeToArrivalToLocation {
                actor,
                time,
                location,
            }) => Box::new(InTimeToArrivalToLocation::new(*actor, *time, *location)),
            Node::Atomic(Atomic::WaypointFollower {
                actor,
                target_speed,
                avoid_collision,
            }) => Box::new(WaypointFollower::new(*actor, *target_speed, *avoid_collision)),
            Node::Atomic(Atomic::Idle { duration }) => Box::new(Idle::new(*duration)),
            Node::Atomic(Atomic::KeepVelocity {
                actor,
                target_speed,
                duration,
            }) => Box::new(KeepVelocity::new(*actor, *target_speed, *duration)),
            Node::Atomic(Atomic::TimeOut { timeout }) => Box::new(TimeOut::new(*timeout)),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        match self {
            Node::Sequence { name, .. } => writeln!(f, "[-] {}", name)?,
            Node::Parallel { name, policy, .. } => writeln!(f, "[=] {} ({:?})", name, policy)?,
            Node::Condition(Condition::InTimeToArrivalToLocation {
                actor,
                time,
                location,
            }) => writeln!(
                f,
                "--> {} actor={} time={} location={}",
                self.name(),
                actor,
                time,
                location.pretty(),
            )?,
            Node::Atomic(atomic) => writeln!(f, "--> {:?}", atomic)?,
        }
        for child in self.children() {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders the tree one node per line, indented by depth.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{Atomic, Condition, Node, ParallelPolicy};
    use nalgebra::Point3;

    fn sample() -> Node {
        Node::sequence(
            "Sequence",
            vec![
                Node::Condition(Condition::InTimeToArrivalToLocation {
                    actor: 1,
                    time: 3.0,
                    location: Point3::new(-1.5, 66.2, 0.0),
                }),
                Node::parallel(
                    "Jitter",
                    ParallelPolicy::SuccessOnOne,
                    vec![
                        Node::Atomic(Atomic::WaypointFollower {
                            actor: 2,
                            target_speed: 10.0,
                            avoid_collision: true,
                        }),
                        Node::Atomic(Atomic::Idle { duration: 7.0 }),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn names_and_children() {
        let tree = sample();
        assert_eq!(tree.name(), "Sequence");
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[0].name(), "InTimeToArrivalToLocation");
        assert_eq!(tree.children()[1].name(), "Jitter");
        assert_eq!(tree.children()[1].children()[1].name(), "Idle");
    }

    #[test]
    fn instantiate_mirrors_the_shape() {
        let behavior = sample().instantiate();
        assert_eq!(
            behavior.name(),
            "Sequence (InTimeToArrivalToLocation, Parallel SuccessOnOne (WaypointFollower, Idle))",
        );
    }

    #[test]
    fn display_indents_children() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[-] Sequence");
        assert!(lines[1].starts_with("  --> InTimeToArrivalToLocation actor=1 time=3"));
        assert_eq!(lines[2], "  [=] Jitter (SuccessOnOne)");
        assert!(lines[3].starts_with("    --> WaypointFollower"));
        assert_eq!(lines[4], "    --> Idle { duration: 7.0 }");
    }
}
