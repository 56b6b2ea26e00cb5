use common::host::Map;
use nalgebra::{Point3, Vector3};

const LOOKAHEAD_SECONDS: f32 = 0.5;
const MIN_LOOKAHEAD: f32 = 2.0;

/// The velocity that carries something at `location` down its lane at
/// `speed`, aiming at a point a short distance ahead on the lane center.
///
/// Returns `None` if there is no lane nearby or the lane has run out.
pub fn velocity_along_lane(
    map: &dyn Map,
    location: &Point3<f32>,
    speed: f32,
) -> Option<Vector3<f32>> {
    let here = map.get_waypoint(location)?;
    let lookahead = (speed * LOOKAHEAD_SECONDS).max(MIN_LOOKAHEAD);
    let target = map.next(&here, lookahead).into_iter().next()?;

    let mut direction = target.transform.location - location;
    direction.z = 0.0;
    Some(direction.try_normalize(1e-6)? * speed)
}

#[cfg(test)]
mod tests {
    use crate::{lane_follow::velocity_along_lane, lane_map::LaneMap};
    use nalgebra::Point3;

    #[test]
    fn follows_the_lane_heading() {
        let map = LaneMap::leaderboard_demo();
        let vel = velocity_along_lane(&map, &Point3::new(1.5, 100.0, 0.0), 10.0).unwrap();
        assert!((vel.norm() - 10.0).abs() < 1e-3);
        assert!(vel.y < -9.99);
    }

    #[test]
    fn steers_back_to_the_lane_center() {
        let map = LaneMap::leaderboard_demo();
        let vel = velocity_along_lane(&map, &Point3::new(-2.5, 0.0, 0.0), 1.0).unwrap();
        assert!(vel.x > 0.0);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn none_at_the_end_of_the_lane() {
        let map = LaneMap::leaderboard_demo();
        assert!(velocity_along_lane(&map, &Point3::new(-1.5, 249.5, 0.0), 10.0).is_none());
    }
}
