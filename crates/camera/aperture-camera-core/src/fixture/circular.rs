use serde::{Deserialize, Serialize};

use crate::codec::SerializedExtras;
use crate::position::{finite, Position};

/// Orbits around `center`, facing it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CircularFixture {
    /// Orbit center; its pitch and roll are used for the camera.
    #[serde(default)]
    pub center: Position,
    #[serde(default, with = "finite")]
    pub radius: f32,
    /// Start angle in degrees.
    #[serde(default, with = "finite")]
    pub offset: f32,
    /// Degrees travelled over the whole fixture.
    #[serde(default, with = "finite")]
    pub circles: f32,
}

impl CircularFixture {
    pub fn new(center: Position, radius: f32, offset: f32, circles: f32) -> Self {
        Self {
            center,
            radius,
            offset,
            circles,
        }
    }

    pub(crate) fn apply(&self, progress: f32, pos: &mut Position) {
        let degrees = self.offset + progress * self.circles;
        let (sin, cos) = degrees.to_radians().sin_cos();

        pos.point.x = self.center.point.x + cos * self.radius;
        pos.point.y = self.center.point.y;
        pos.point.z = self.center.point.z + sin * self.radius;
        pos.angle.yaw = degrees + 90.0;
        pos.angle.pitch = self.center.angle.pitch;
        pos.angle.roll = self.center.angle.roll;
    }
}

impl SerializedExtras for CircularFixture {}
