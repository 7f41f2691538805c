use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::look_angles;
use crate::codec::{read_target, write_target, SerializedExtras};
use crate::error::{DecodeError, EvalError};
use crate::position::Position;
use crate::target::{TargetRef, TargetResolver};

/// Stays at `position` and keeps the camera aimed at a target entity.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LookFixture {
    #[serde(default, skip_serializing_if = "Position::is_origin")]
    pub position: Position,
    /// Written by the extras hook, not the uniform serializer.
    #[serde(skip)]
    pub target: TargetRef,
}

impl LookFixture {
    pub fn new(position: Position, target: impl Into<String>) -> Self {
        Self {
            position,
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

        pos.set(&self.position);
        let (yaw, pitch) = look_angles(self.position.point, entity.eye);
        pos.angle.yaw = yaw;
        pos.angle.pitch = pitch;
        Ok(())
    }
}

impl SerializedExtras for LookFixture {
    fn write_extras(&self, out: &mut Map<String, JsonValue>) {
        write_target(&self.target, out);
    }

    fn read_extras(&mut self, input: &Map<String, JsonValue>) -> Result<(), DecodeError> {
        self.target = read_target(input)?;
        Ok(())
    }
}
