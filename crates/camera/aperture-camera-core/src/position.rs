//! Camera position: a point in world space plus an orientation.
//!
//! Angles are in degrees and never normalized; wrapping is left to the host.

use serde::{Deserialize, Serialize};

/// Serde adapter for `f32` fields that must stay finite.
///
/// Reads go through `f64` so numbers beyond the `f32` range are rejected
/// instead of rounding to infinity. Writes reject NaN and infinities, which
/// serde_json would otherwise emit as `null`.
pub(crate) mod finite {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !value.is_finite() {
            return Err(ser::Error::custom(format!("non-finite number {value}")));
        }
        serializer.serialize_f32(*value)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wide = f64::deserialize(deserializer)?;
        if !wide.is_finite() || wide.abs() > f32::MAX as f64 {
            return Err(de::Error::custom(format!(
                "number {wide} is out of range for f32"
            )));
        }
        Ok(wide as f32)
    }
}

/// World-space location of the camera.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    #[serde(default, with = "finite")]
    pub x: f32,
    #[serde(default, with = "finite")]
    pub y: f32,
    #[serde(default, with = "finite")]
    pub z: f32,
}

impl Point {
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Camera orientation (yaw, pitch, roll).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Angle {
    #[serde(default, with = "finite")]
    pub yaw: f32,
    #[serde(default, with = "finite")]
    pub pitch: f32,
    #[serde(default, with = "finite")]
    pub roll: f32,
}

impl Angle {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    #[inline]
    pub fn lerp(self, other: Angle, t: f32) -> Angle {
        Angle {
            yaw: self.yaw + (other.yaw - self.yaw) * t,
            pitch: self.pitch + (other.pitch - self.pitch) * t,
            roll: self.roll + (other.roll - self.roll) * t,
        }
    }
}

/// Full camera state passed by `&mut` through fixture evaluation and the
/// modifier pipeline.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    #[serde(default)]
    pub point: Point,
    #[serde(default)]
    pub angle: Angle,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32, yaw: f32, pitch: f32, roll: f32) -> Self {
        Self {
            point: Point::new(x, y, z),
            angle: Angle::new(yaw, pitch, roll),
        }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// True when every component is zero. Used to omit unset positions
    /// from the serialized form.
    pub fn is_origin(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite this position with `other`.
    #[inline]
    pub fn set(&mut self, other: &Position) {
        *self = *other;
    }
}
