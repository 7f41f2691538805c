use serde::{Deserialize, Serialize};

use crate::codec::SerializedExtras;
use crate::position::{Angle, Point, Position};

/// How a path blends between neighbouring control points.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathInterpolation {
    #[default]
    Linear,
    /// Catmull-Rom through the neighbouring points.
    Cubic,
}

/// Moves through a list of control positions over the fixture's duration.
/// Every segment gets an equal share of the time.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PathFixture {
    #[serde(default)]
    pub points: Vec<Position>,
    #[serde(default)]
    pub interpolation: PathInterpolation,
}

impl PathFixture {
    pub fn new(points: Vec<Position>, interpolation: PathInterpolation) -> Self {
        Self {
            points,
            interpolation,
        }
    }

    pub(crate) fn apply(&self, progress: f32, pos: &mut Position) {
        match self.points.len() {
            0 => {}
            1 => pos.set(&self.points[0]),
            n => {
                let segments = n - 1;
                let scaled = progress.clamp(0.0, 1.0) * segments as f32;
                let index = (scaled.floor() as usize).min(segments - 1);
                let t = scaled - index as f32;
                *pos = match self.interpolation {
                    PathInterpolation::Linear => {
                        let (a, b) = (self.points[index], self.points[index + 1]);
                        Position {
                            point: a.point.lerp(b.point, t),
                            angle: a.angle.lerp(b.angle, t),
                        }
                    }
                    PathInterpolation::Cubic => self.catmull_rom(index, t),
                };
            }
        }
    }

    fn catmull_rom(&self, index: usize, t: f32) -> Position {
        let last = self.points.len() - 1;
        let p0 = self.points[index.saturating_sub(1)];
        let p1 = self.points[index];
        let p2 = self.points[(index + 1).min(last)];
        let p3 = self.points[(index + 2).min(last)];

        let f = |a: f32, b: f32, c: f32, d: f32| -> f32 {
            let t2 = t * t;
            let t3 = t2 * t;
            0.5 * (2.0 * b
                + (c - a) * t
                + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                + (3.0 * b - a - 3.0 * c + d) * t3)
        };

        Position {
            point: Point {
                x: f(p0.point.x, p1.point.x, p2.point.x, p3.point.x),
                y: f(p0.point.y, p1.point.y, p2.point.y, p3.point.y),
                z: f(p0.point.z, p1.point.z, p2.point.z, p3.point.z),
            },
            angle: Angle {
                yaw: f(p0.angle.yaw, p1.angle.yaw, p2.angle.yaw, p3.angle.yaw),
                pitch: f(p0.angle.pitch, p1.angle.pitch, p2.angle.pitch, p3.angle.pitch),
                roll: f(p0.angle.roll, p1.angle.roll, p2.angle.roll, p3.angle.roll),
            },
        }
    }
}

impl SerializedExtras for PathFixture {}
