use crate::ext::ExtendRotation3;
use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// A position and orientation in world coordinates. Distances are in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub location: Point3<f32>,
    pub rotation: Rotation3<f32>,
}

impl Transform {
    pub fn new(location: Point3<f32>, rotation: Rotation3<f32>) -> Self {
        Self { location, rotation }
    }

    pub fn from_location(location: Point3<f32>) -> Self {
        Self::new(location, Rotation3::identity())
    }

    pub fn forward_axis(&self) -> Unit<Vector3<f32>> {
        self.rotation.forward_axis()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_location(Point3::origin())
    }
}
