use crate::math::{find_segment, linear_interpolate};
use common::{
    host::{Map, Waypoint},
    prelude::*,
    Transform,
};
use nalgebra::{Point3, Rotation3, Vector3};
use ordered_float::OrderedFloat;

/// A one-way lane, described by a polyline in the direction of travel.
pub struct Lane {
    road_id: u32,
    lane_id: i32,
    points: Vec<Point3<f32>>,
    /// Distance along the lane of each point in `points`.
    stations: Vec<f32>,
}

impl Lane {
    pub fn new(road_id: u32, lane_id: i32, points: Vec<Point3<f32>>) -> Self {
        let mut stations = Vec::with_capacity(points.len());
        let mut s = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                s += (point - points[i - 1]).norm();
            }
            stations.push(s);
        }
        Self {
            road_id,
            lane_id,
            points,
            stations,
        }
    }

    pub fn length(&self) -> f32 {
        self.stations.last().cloned().unwrap_or(0.0)
    }

    /// Returns the station of the closest point on the lane, and the distance
    /// to it.
    fn project(&self, location: &Point3<f32>) -> Option<(f32, f32)> {
        self.points
            .windows(2)
            .zip(&self.stations)
            .map(|(segment, &start_s)| {
                let (a, b) = (segment[0], segment[1]);
                let ab = b - a;
                let len_sq = ab.norm_squared();
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    ((location - a).dot(&ab) / len_sq).max(0.0).min(1.0)
                };
                let closest = a + ab * t;
                (start_s + ab.norm() * t, (location - closest).norm())
            })
            .min_by_key(|&(_, dist)| OrderedFloat(dist))
    }

    fn waypoint_at(&self, s: f32) -> Waypoint {
        let xs: Vec<f32> = self.points.iter().map(|p| p.x).collect();
        let ys: Vec<f32> = self.points.iter().map(|p| p.y).collect();
        let zs: Vec<f32> = self.points.iter().map(|p| p.z).collect();
        let location = Point3::new(
            linear_interpolate(&self.stations, &xs, s),
            linear_interpolate(&self.stations, &ys, s),
            linear_interpolate(&self.stations, &zs, s),
        );

        let (index, _) = find_segment(&self.stations, s);
        let heading = match self.points.get(index + 1) {
            Some(next) => next - self.points[index],
            None => Vector3::x(),
        };
        let yaw = heading.y.atan2(heading.x);

        Waypoint {
            transform: Transform::new(location, Rotation3::from_unreal_angles(0.0, yaw, 0.0)),
            road_id: self.road_id,
            lane_id: self.lane_id,
            s,
        }
    }
}

pub struct LaneMap {
    name: String,
    lanes: Vec<Lane>,
}

impl LaneMap {
    pub fn new(name: impl Into<String>, lanes: Vec<Lane>) -> Self {
        Self {
            name: name.into(),
            lanes,
        }
    }

    /// Two crossing two-lane roads, laid out so that both leaderboard trigger
    /// points sit on a lane. Road 1 runs north-south with lanes at x = -1.5 and
    /// x = 1.5; road 2 runs east-west with lanes at y = 140.9 and y = 137.4.
    pub fn leaderboard_demo() -> Self {
        let lane = |road_id, lane_id, from: [f32; 2], to: [f32; 2]| {
            Lane::new(
                road_id,
                lane_id,
                vec![
                    Point3::new(from[0], from[1], 0.0),
                    Point3::new(to[0], to[1], 0.0),
                ],
            )
        };
        Self::new(
            "LeaderboardDemo",
            vec![
                lane(1, -1, [-1.5, -100.0], [-1.5, 250.0]),
                lane(1, 1, [1.5, 250.0], [1.5, -100.0]),
                lane(2, -1, [-50.0, 140.9], [200.0, 140.9]),
                lane(2, 1, [200.0, 137.4], [-50.0, 137.4]),
            ],
        )
    }

    fn lane(&self, road_id: u32, lane_id: i32) -> Option<&Lane> {
        self.lanes
            .iter()
            .find(|l| l.road_id == road_id && l.lane_id == lane_id)
    }
}

impl Map for LaneMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_waypoint(&self, location: &Point3<f32>) -> Option<Waypoint> {
        self.lanes
            .iter()
            .filter_map(|lane| lane.project(location).map(|(s, dist)| (lane, s, dist)))
            .min_by_key(|&(_, _, dist)| OrderedFloat(dist))
            .map(|(lane, s, _)| lane.waypoint_at(s))
    }

    fn next(&self, waypoint: &Waypoint, distance: f32) -> Vec<Waypoint> {
        let lane = some_or_else!(self.lane(waypoint.road_id, waypoint.lane_id), {
            return Vec::new();
        });
        let s = waypoint.s + distance;
        if s > lane.length() {
            return Vec::new();
        }
        vec![lane.waypoint_at(s)]
    }
}
