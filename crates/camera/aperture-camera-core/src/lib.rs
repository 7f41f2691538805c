//! Aperture camera core (engine-agnostic)
//!
//! Camera fixtures are timeline segments (idle, path, look, follow, circular)
//! that compute a base camera [`Position`]; modifiers such as
//! [`ShakeModifier`] perturb that position afterwards. Fixtures round-trip
//! through a tagged JSON form, see [`codec`].
//!
//! Hosts supply a [`TargetResolver`] for look/follow targets and drive
//! evaluation with their own tick counter.

pub mod codec;
pub mod config;
pub mod error;
pub mod fixture;
pub mod modifier;
pub mod position;
pub mod target;

// Re-exports for consumers (hosts)
pub use codec::{
    decode_fixture, decode_fixtures, decode_modifier, encode_fixture, encode_fixtures,
    encode_modifier, FixtureCodec, SerializedExtras,
};
pub use config::Config;
pub use error::{DecodeError, EncodeError, EvalError, InvariantViolation};
pub use fixture::{
    CircularFixture, Fixture, FixtureBody, FixtureKind, FollowFixture, IdleFixture, LookFixture,
    PathFixture, PathInterpolation,
};
pub use modifier::{Modifier, ModifierKind, Modify, ShakeModifier};
pub use position::{Angle, Point, Position};
pub use target::{EntityHandle, NoTargets, TargetRef, TargetResolver};
