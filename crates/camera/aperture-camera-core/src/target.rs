//! Target references and the host resolver trait.
//!
//! A target is an opaque string (entity name, selector, UUID...) that only
//! the host can turn into a live entity. The codec stores the raw string;
//! resolution happens at evaluation time.

use crate::position::Point;

/// Snapshot of a resolved entity, as far as camera fixtures care.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EntityHandle {
    /// Eye position of the entity in world space.
    pub eye: Point,
}

impl EntityHandle {
    pub fn at(eye: Point) -> Self {
        Self { eye }
    }
}

/// Trait for resolving target references to entities.
/// Hosts implement this and pass it into `Fixture::evaluate`.
pub trait TargetResolver {
    fn resolve(&self, target: &str) -> Option<EntityHandle>;
}

/// Resolver that never finds anything. Useful for fixtures without targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTargets;

impl TargetResolver for NoTargets {
    fn resolve(&self, _target: &str) -> Option<EntityHandle> {
        None
    }
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<EntityHandle>,
{
    fn resolve(&self, target: &str) -> Option<EntityHandle> {
        self(target)
    }
}

/// Raw target reference held by look/follow fixtures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetRef(String);

impl TargetRef {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn resolve(&self, resolver: &dyn TargetResolver) -> Option<EntityHandle> {
        if self.0.is_empty() {
            return None;
        }
        resolver.resolve(&self.0)
    }
}

impl From<&str> for TargetRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reference_never_reaches_the_resolver() {
        let resolver = |_: &str| -> Option<EntityHandle> { panic!("resolver called") };
        assert!(TargetRef::default().resolve(&resolver).is_none());
    }

    #[test]
    fn closure_resolver() {
        let resolver =
            |name: &str| (name == "player").then(|| EntityHandle::at(Point::new(1.0, 2.0, 3.0)));
        assert_eq!(
            TargetRef::from("player").resolve(&resolver),
            Some(EntityHandle::at(Point::new(1.0, 2.0, 3.0)))
        );
        assert!(TargetRef::from("zombie").resolve(&resolver).is_none());
        assert!(NoTargets.resolve("player").is_none());
    }
}
