#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    blueprint::BlueprintLibrary,
    lane_follow::velocity_along_lane,
    lane_map::{Lane, LaneMap},
    world::SimWorld,
};

macro_rules! some_or_else {
    ($e:expr, $b:block) => {
        match $e {
            Some(x) => x,
            None => $b,
        }
    };
}

mod blueprint;
mod lane_follow;
mod lane_map;
mod math;
mod world;
