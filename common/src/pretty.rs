use crate::{ext::ExtendRotation3, transform::Transform};
use nalgebra::{Point3, Rotation3, Vector3};
use std::fmt::{self, Formatter};

pub trait PrettyPrint {
    type PrettyPrinter: fmt::Display;
    fn pretty(&self) -> Self::PrettyPrinter;
}

impl PrettyPrint for Vector3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

impl PrettyPrint for Point3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: self.coords }
    }
}

pub struct Vector3PrettyPrinter {
    data: Vector3<f32>,
}

impl fmt::Display for Vector3PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "({:.1}, {:.1}, {:.1})",
            self.data.x, self.data.y, self.data.z,
        )
    }
}

impl PrettyPrint for Rotation3<f32> {
    type PrettyPrinter = RotationPrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct RotationPrettyPrinter {
    data: Rotation3<f32>,
}

impl fmt::Display for RotationPrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let (pitch, yaw, roll) = self.data.to_unreal_angles();
        write!(
            f,
            "[p={:.0}° y={:.0}° r={:.0}°]",
            pitch.to_degrees(),
            yaw.to_degrees(),
            roll.to_degrees(),
        )
    }
}

impl PrettyPrint for Transform {
    type PrettyPrinter = TransformPrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct TransformPrettyPrinter {
    data: Transform,
}

impl fmt::Display for TransformPrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            self.data.location.pretty(),
            self.data.rotation.pretty(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, Transform};
    use nalgebra::{Point3, Rotation3};

    #[test]
    fn transform_pretty() {
        let transform = Transform::new(
            Point3::new(-1.5, 66.2, 0.5),
            Rotation3::from_unreal_degrees(0.0, 90.0, 0.0),
        );
        let text = transform.pretty().to_string();
        assert!(text.starts_with("(-1.5, 66.2, 0.5)["), "{}", text);
        assert!(text.contains("y=90°"), "{}", text);
    }
}
