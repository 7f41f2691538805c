//! Camera fixtures: timeline segments that compute a base camera position.
//!
//! A [`Fixture`] carries the attributes every segment shares (name, duration,
//! modifiers) and a [`FixtureBody`] holding the variant-specific state.

mod circular;
mod follow;
mod idle;
mod look;
mod path;

pub use circular::CircularFixture;
pub use follow::FollowFixture;
pub use idle::IdleFixture;
pub use look::LookFixture;
pub use path::{PathFixture, PathInterpolation};

use crate::error::{EvalError, InvariantViolation};
use crate::modifier::{Modifier, Modify};
use crate::position::{Point, Position};
use crate::target::TargetResolver;

/// Discriminant of [`FixtureBody`], used by the codec tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Idle,
    Path,
    Look,
    Follow,
    Circular,
}

/// Variant-specific fixture state.
#[derive(Clone, Debug, PartialEq)]
pub enum FixtureBody {
    Idle(IdleFixture),
    Path(PathFixture),
    Look(LookFixture),
    Follow(FollowFixture),
    Circular(CircularFixture),
}

impl FixtureBody {
    #[inline]
    pub fn kind(&self) -> FixtureKind {
        match self {
            FixtureBody::Idle(_) => FixtureKind::Idle,
            FixtureBody::Path(_) => FixtureKind::Path,
            FixtureBody::Look(_) => FixtureKind::Look,
            FixtureBody::Follow(_) => FixtureKind::Follow,
            FixtureBody::Circular(_) => FixtureKind::Circular,
        }
    }
}

macro_rules! impl_from_body {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FixtureBody {
                fn from(body: $ty) -> Self {
                    FixtureBody::$variant(body)
                }
            }
        )*
    };
}

impl_from_body! {
    Idle => IdleFixture,
    Path => PathFixture,
    Look => LookFixture,
    Follow => FollowFixture,
    Circular => CircularFixture,
}

/// One segment of a camera timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    /// Human label; may be empty.
    pub name: String,
    /// Length in ticks. Always > 0.
    duration: u64,
    /// Applied in order after the base position is computed.
    pub modifiers: Vec<Modifier>,
    pub body: FixtureBody,
}

impl Fixture {
    pub fn new(body: impl Into<FixtureBody>, duration: u64) -> Result<Self, InvariantViolation> {
        check_duration(duration)?;
        Ok(Self {
            name: String::new(),
            duration,
            modifiers: Vec::new(),
            body: body.into(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> FixtureKind {
        self.body.kind()
    }

    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: u64) -> Result<(), InvariantViolation> {
        check_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    /// Check the fixture and all of its modifiers.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check_duration(self.duration)?;
        for m in &self.modifiers {
            m.validate()?;
        }
        Ok(())
    }

    /// Normalized progress through this fixture, clamped to [0,1].
    pub fn progress(&self, ticks: u64, partial_tick: f32) -> f32 {
        let t = (ticks as f64 + partial_tick as f64) / self.duration as f64;
        t.clamp(0.0, 1.0) as f32
    }

    /// Write the base position for this tick.
    ///
    /// Look and follow fixtures need their target; if the resolver cannot find
    /// it `pos` is left untouched and `TargetUnresolved` is returned.
    pub fn evaluate(
        &self,
        ticks: u64,
        partial_tick: f32,
        resolver: &dyn TargetResolver,
        pos: &mut Position,
    ) -> Result<(), EvalError> {
        let progress = self.progress(ticks, partial_tick);
        let result = match &self.body {
            FixtureBody::Idle(f) => {
                f.apply(pos);
                Ok(())
            }
            FixtureBody::Path(f) => {
                f.apply(progress, pos);
                Ok(())
            }
            FixtureBody::Look(f) => f.apply(resolver, pos),
            FixtureBody::Follow(f) => f.apply(resolver, pos),
            FixtureBody::Circular(f) => {
                f.apply(progress, pos);
                Ok(())
            }
        };
        if let Err(err) = &result {
            log::warn!("fixture '{}' at tick {ticks}: {err}", self.name);
        }
        result
    }

    /// Run every modifier over `pos`, in declaration order.
    pub fn apply_modifiers(&self, ticks: u64, partial_tick: f32, pos: &mut Position) {
        for modifier in &self.modifiers {
            modifier.modify(ticks, self, partial_tick, pos);
        }
    }

    /// Evaluate the base position and then apply modifiers. When the base
    /// position cannot be computed the modifiers are skipped as well.
    pub fn apply(
        &self,
        ticks: u64,
        partial_tick: f32,
        resolver: &dyn TargetResolver,
        pos: &mut Position,
    ) -> Result<(), EvalError> {
        self.evaluate(ticks, partial_tick, resolver, pos)?;
        self.apply_modifiers(ticks, partial_tick, pos);
        Ok(())
    }
}

fn check_duration(duration: u64) -> Result<(), InvariantViolation> {
    if duration == 0 {
        return Err(InvariantViolation::new("duration", "must be > 0 ticks"));
    }
    Ok(())
}

/// Yaw/pitch (degrees) that aim a camera at `from` towards `to`.
pub(crate) fn look_angles(from: Point, to: Point) -> (f32, f32) {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let dz = (to.z - from.z) as f64;
    let horizontal = (dx * dx + dz * dz).sqrt();

    let yaw = dz.atan2(dx).to_degrees() - 90.0;
    let pitch = -dy.atan2(horizontal).to_degrees();
    (yaw as f32, pitch as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::ShakeModifier;
    use crate::target::{EntityHandle, NoTargets};

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = Fixture::new(IdleFixture::default(), 0).unwrap_err();
        assert_eq!(err.field, "duration");

        let mut f = Fixture::new(IdleFixture::default(), 5).unwrap();
        assert!(f.set_duration(0).is_err());
        assert_eq!(f.duration(), 5);
    }

    #[test]
    fn progress_is_clamped() {
        let f = Fixture::new(IdleFixture::default(), 10).unwrap();
        approx(f.progress(5, 0.0), 0.5, 1e-6);
        approx(f.progress(2, 0.5), 0.25, 1e-6);
        approx(f.progress(40, 0.0), 1.0, 1e-6);
    }

    #[test]
    fn look_angles_face_the_target() {
        let origin = Point::ORIGIN;
        // +Z is yaw 0, -X is yaw 90.
        let (yaw, pitch) = look_angles(origin, Point::new(0.0, 0.0, 5.0));
        approx(yaw, 0.0, 1e-4);
        approx(pitch, 0.0, 1e-4);
        let (yaw, _) = look_angles(origin, Point::new(-5.0, 0.0, 0.0));
        approx(yaw, 90.0, 1e-4);
        let (_, pitch) = look_angles(origin, Point::new(0.0, 5.0, 5.0));
        approx(pitch, -45.0, 1e-4);
    }

    #[test]
    fn unresolved_target_skips_modifiers_and_leaves_position() {
        let fixture = Fixture::new(LookFixture::new(Position::origin(), "ghost"), 20)
            .unwrap()
            .with_modifier(ShakeModifier::new(2.0, 5.0).unwrap());
        let before = Position::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let mut pos = before;

        let err = fixture.apply(3, 0.0, &NoTargets, &mut pos).unwrap_err();
        assert_eq!(
            err,
            EvalError::TargetUnresolved {
                target: "ghost".into()
            }
        );
        assert_eq!(pos, before);
    }

    #[test]
    fn apply_runs_modifiers_after_base_position() {
        let hold = Position::new(0.0, 70.0, 0.0, 10.0, 0.0, 0.0);
        let shake = ShakeModifier::new(2.0, 1.0).unwrap();
        let fixture = Fixture::new(IdleFixture::new(hold), 20)
            .unwrap()
            .with_modifier(shake);

        let mut pos = Position::origin();
        fixture.apply(4, 0.0, &NoTargets, &mut pos).unwrap();

        let t = 2.0f32;
        approx(pos.angle.yaw, 10.0 + t.sin() * t.sin() * t.cos(), 1e-5);
        assert_eq!(pos.point, hold.point);
    }

    #[test]
    fn follow_resolves_through_the_host() {
        let offset = Position::new(0.0, 2.0, -3.0, 0.0, 20.0, 0.0);
        let fixture = Fixture::new(FollowFixture::new(offset, "player"), 10).unwrap();
        let resolver = |_: &str| Some(EntityHandle::at(Point::new(10.0, 64.0, 10.0)));

        let mut pos = Position::origin();
        fixture.evaluate(0, 0.0, &resolver, &mut pos).unwrap();
        assert_eq!(pos.point, Point::new(10.0, 66.0, 7.0));
        assert_eq!(pos.angle.pitch, 20.0);
    }
}
