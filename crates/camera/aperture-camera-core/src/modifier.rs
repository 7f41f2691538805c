//! Camera modifiers: post-evaluation effects applied to a fixture's base
//! position, in list order.

use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;
use crate::fixture::Fixture;
use crate::position::{finite, Position};

/// Evaluation contract shared by every modifier variant.
///
/// `partial_tick` is the render fraction in `[0, 1)`. Implementations must
/// not fail; invalid parameters are rejected when the modifier is built.
pub trait Modify {
    fn modify(&self, ticks: u64, fixture: &Fixture, partial_tick: f32, pos: &mut Position);
}

/// Closed set of modifier variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Modifier {
    Shake(ShakeModifier),
}

/// Discriminant of [`Modifier`], used by the codec tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Shake,
}

impl Modifier {
    #[inline]
    pub fn kind(&self) -> ModifierKind {
        match self {
            Modifier::Shake(_) => ModifierKind::Shake,
        }
    }

    /// Check invariants of the wrapped variant.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        match self {
            Modifier::Shake(m) => m.validate(),
        }
    }
}

impl Modify for Modifier {
    fn modify(&self, ticks: u64, fixture: &Fixture, partial_tick: f32, pos: &mut Position) {
        match self {
            Modifier::Shake(m) => m.modify(ticks, fixture, partial_tick, pos),
        }
    }
}

impl From<ShakeModifier> for Modifier {
    fn from(m: ShakeModifier) -> Self {
        Modifier::Shake(m)
    }
}

/// Shakes yaw and pitch with a smooth periodic swing.
///
/// `shake` divides the tick clock (larger is slower) and must be non-zero.
/// `shake_amount` scales the swing in the same units as yaw/pitch.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ShakeParams")]
pub struct ShakeModifier {
    #[serde(serialize_with = "finite::serialize")]
    shake: f32,
    #[serde(rename = "shakeAmount", serialize_with = "finite::serialize")]
    shake_amount: f32,
}

/// Shake fields as read from JSON, before validation.
#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct ShakeParams {
    #[serde(default, deserialize_with = "finite::deserialize")]
    shake: f32,
    #[serde(default, rename = "shakeAmount", deserialize_with = "finite::deserialize")]
    shake_amount: f32,
}

impl TryFrom<ShakeParams> for ShakeModifier {
    type Error = InvariantViolation;

    fn try_from(params: ShakeParams) -> Result<Self, Self::Error> {
        ShakeModifier::new(params.shake, params.shake_amount)
    }
}

impl ShakeModifier {
    pub fn new(shake: f32, shake_amount: f32) -> Result<Self, InvariantViolation> {
        let m = Self {
            shake,
            shake_amount,
        };
        m.validate()?;
        Ok(m)
    }

    pub fn shake(&self) -> f32 {
        self.shake
    }

    pub fn shake_amount(&self) -> f32 {
        self.shake_amount
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.shake == 0.0 {
            return Err(InvariantViolation::new("shake", "period divisor must be non-zero"));
        }
        if !self.shake.is_finite() {
            return Err(InvariantViolation::new("shake", "must be finite"));
        }
        if !self.shake_amount.is_finite() {
            return Err(InvariantViolation::new("shakeAmount", "must be finite"));
        }
        Ok(())
    }

    /// Yaw and pitch offsets (before scaling by the amount) at time `t`.
    #[inline]
    fn swing(t: f32) -> (f32, f32) {
        let (sin, cos) = t.sin_cos();
        (sin * sin * cos, cos * sin * sin)
    }
}

impl Modify for ShakeModifier {
    fn modify(&self, ticks: u64, _fixture: &Fixture, partial_tick: f32, pos: &mut Position) {
        let t = (ticks as f32 + partial_tick) / self.shake;
        let (swing_yaw, swing_pitch) = Self::swing(t);

        pos.angle.yaw += swing_yaw * self.shake_amount;
        pos.angle.pitch += swing_pitch * self.shake_amount;
    }
}
