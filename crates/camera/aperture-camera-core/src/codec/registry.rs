//! Discriminator tables for the fixture and modifier families.
//!
//! Each table maps a discriminator string to a variant kind and the function
//! that builds that variant from a JSON object. Tables are built on first use
//! and never mutated afterwards.

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::SerializedExtras;
use crate::error::DecodeError;
use crate::fixture::{
    CircularFixture, FixtureBody, FixtureKind, FollowFixture, IdleFixture, LookFixture,
    PathFixture,
};
use crate::modifier::{Modifier, ModifierKind, ShakeModifier, ShakeParams};

/// Builds a variant from the full JSON object it was tagged in.
pub(crate) type Constructor<T> = fn(&JsonValue) -> Result<T, DecodeError>;

pub(crate) struct Registry<K, T> {
    family: &'static str,
    entries: Vec<(&'static str, K, Constructor<T>)>,
    by_name: HashMap<&'static str, usize>,
}

impl<K: Copy + PartialEq, T> Registry<K, T> {
    fn new(family: &'static str, entries: Vec<(&'static str, K, Constructor<T>)>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _, _))| (*name, i))
            .collect();
        Self {
            family,
            entries,
            by_name,
        }
    }

    #[inline]
    pub(crate) fn family(&self) -> &'static str {
        self.family
    }

    pub(crate) fn lookup(&self, discriminator: &str) -> Option<Constructor<T>> {
        self.by_name.get(discriminator).map(|&i| self.entries[i].2)
    }

    /// Inverse lookup (kind -> discriminator). The tables are tiny, so a
    /// linear scan is fine.
    pub(crate) fn discriminator_of(&self, kind: K) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, k, _)| *k == kind)
            .map(|(name, _, _)| *name)
    }

    pub(crate) fn discriminators(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _, _)| *name)
    }
}

pub(crate) static FIXTURES: Lazy<Registry<FixtureKind, FixtureBody>> = Lazy::new(|| {
    Registry::new(
        "fixture",
        vec![
            ("idle", FixtureKind::Idle, body::<IdleFixture> as Constructor<_>),
            ("path", FixtureKind::Path, body::<PathFixture> as Constructor<_>),
            ("look", FixtureKind::Look, body::<LookFixture> as Constructor<_>),
            ("follow", FixtureKind::Follow, body::<FollowFixture> as Constructor<_>),
            ("circular", FixtureKind::Circular, body::<CircularFixture> as Constructor<_>),
        ],
    )
});

pub(crate) static MODIFIERS: Lazy<Registry<ModifierKind, Modifier>> = Lazy::new(|| {
    Registry::new(
        "modifier",
        vec![("shake", ModifierKind::Shake, shake as Constructor<_>)],
    )
});

/// Uniform exposed-field read for any fixture body, then its extras hook.
fn body<T>(json: &JsonValue) -> Result<FixtureBody, DecodeError>
where
    T: DeserializeOwned + SerializedExtras + Into<FixtureBody>,
{
    let mut body: T = super::read_exposed(json)?;
    if let Some(obj) = json.as_object() {
        body.read_extras(obj)?;
    }
    Ok(body.into())
}

fn shake(json: &JsonValue) -> Result<Modifier, DecodeError> {
    let params: ShakeParams = super::read_fields(json, "ShakeModifier")?;
    Ok(Modifier::Shake(ShakeModifier::try_from(params)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_table_covers_every_kind() {
        for kind in [
            FixtureKind::Idle,
            FixtureKind::Path,
            FixtureKind::Look,
            FixtureKind::Follow,
            FixtureKind::Circular,
        ] {
            let name = FIXTURES.discriminator_of(kind).expect("registered");
            let construct = FIXTURES.lookup(name).expect("lookup");
            let body = construct(&serde_json::json!({})).expect("defaults decode");
            assert_eq!(body.kind(), kind);
        }
        assert_eq!(FIXTURES.discriminators().count(), 5);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(FIXTURES.lookup("Idle").is_none());
        assert!(MODIFIERS.lookup("shake").is_some());
        assert!(MODIFIERS.lookup("wobble").is_none());
    }
}
