use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::codec::{read_target, write_target, SerializedExtras};
use crate::error::{DecodeError, EvalError};
use crate::position::Position;
use crate::target::{TargetRef, TargetResolver};

/// Rides along with a target entity at a fixed offset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FollowFixture {
    /// Offset from the entity's eye point; the angle is used as is.
    #[serde(default, skip_serializing_if = "Position::is_origin")]
    pub position: Position,
    #[serde(skip)]
    pub target: TargetRef,
}

impl FollowFixture {
    pub fn new(offset: Position, target: impl Into<String>) -> Self {
        Self {
            position: offset,
            target: TargetRef::new(target),
        }
    }

    pub(crate) fn apply(
        &self,
        resolver: &dyn TargetResolver,
        pos: &mut Position,
    ) -> Result<(), EvalError> {
        let entity = self
            .target
            .resolve(resolver)
            .ok_or_else(|| EvalError::TargetUnresolved {
                target: self.target.as_str().to_string(),
            })?;

        pos.point.x = entity.eye.x + self.position.point.x;
        pos.point.y = entity.eye.y + self.position.point.y;
        pos.point.z = entity.eye.z + self.position.point.z;
        pos.angle = self.position.angle;
        Ok(())
    }
}

impl SerializedExtras for FollowFixture {
    fn write_extras(&self, out: &mut Map<String, JsonValue>) {
        write_target(&self.target, out);
    }

    fn read_extras(&mut self, input: &Map<String, JsonValue>) -> Result<(), DecodeError> {
        self.target = read_target(input)?;
        Ok(())
    }
}
