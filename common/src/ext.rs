use nalgebra::{Rotation3, Unit, Vector3};

pub trait ExtendRotation3 {
    fn from_unreal_angles(pitch: f32, yaw: f32, roll: f32) -> Rotation3<f32>;
    fn from_unreal_degrees(pitch: f32, yaw: f32, roll: f32) -> Rotation3<f32>;
    fn to_unreal_angles(&self) -> (f32, f32, f32);
    fn yaw(&self) -> f32;
    /// A unit vector pointing out of the front of whatever has this rotation.
    fn forward_axis(&self) -> Unit<Vector3<f32>>;
}

// There are two different rotation conventions we need to deal with:
//
// 1. nalgebra's `Rotation3::from_euler_angles` – (roll, pitch, yaw).
// 2. Unreal (and therefore every simulator config file) – (pitch, yaw, roll).
//
// Everything outside this module should speak Unreal.
impl ExtendRotation3 for Rotation3<f32> {
    fn from_unreal_angles(pitch: f32, yaw: f32, roll: f32) -> Rotation3<f32> {
        Rotation3::from_euler_angles(roll, pitch, yaw)
    }

    fn from_unreal_degrees(pitch: f32, yaw: f32, roll: f32) -> Rotation3<f32> {
        Self::from_unreal_angles(pitch.to_radians(), yaw.to_radians(), roll.to_radians())
    }

    fn to_unreal_angles(&self) -> (f32, f32, f32) {
        let (roll, pitch, yaw) = self.euler_angles();
        (pitch, yaw, roll)
    }

    fn yaw(&self) -> f32 {
        let (_pitch, yaw, _roll) = self.to_unreal_angles();
        yaw
    }

    fn forward_axis(&self) -> Unit<Vector3<f32>> {
        Unit::new_normalize(self * Vector3::x())
    }
}

#[cfg(test)]
mod tests {
    use crate::ext::ExtendRotation3;
    use nalgebra::Rotation3;
    use std::f32::consts::PI;

    #[test]
    fn unreal_angles_survive_a_round_trip() {
        let rot = Rotation3::from_unreal_angles(0.1, 2.0, -0.3);
        let (pitch, yaw, roll) = rot.to_unreal_angles();
        assert!((pitch - 0.1).abs() < 1e-5);
        assert!((yaw - 2.0).abs() < 1e-5);
        assert!((roll + 0.3).abs() < 1e-5);
    }

    #[test]
    fn forward_axis_follows_yaw() {
        let rot = Rotation3::from_unreal_degrees(0.0, 90.0, 0.0);
        let forward = rot.forward_axis();
        assert!(forward.x.abs() < 1e-5);
        assert!((forward.y - 1.0).abs() < 1e-5);

        let rot = Rotation3::from_unreal_angles(0.0, PI, 0.0);
        assert!((rot.forward_axis().x + 1.0).abs() < 1e-5);
    }
}
