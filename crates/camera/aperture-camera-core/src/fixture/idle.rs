use serde::{Deserialize, Serialize};

use crate::codec::SerializedExtras;
use crate::position::Position;

/// Holds the camera still at one position.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IdleFixture {
    #[serde(default, skip_serializing_if = "Position::is_origin")]
    pub position: Position,
}

impl IdleFixture {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub(crate) fn apply(&self, pos: &mut Position) {
        pos.set(&self.position);
    }
}

impl SerializedExtras for IdleFixture {}
