//! Text output configuration for the fixture codec.

use serde::{Deserialize, Serialize};

/// Controls how [`FixtureCodec`](crate::codec::FixtureCodec) renders JSON text.
/// Parsing is unaffected.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Pretty-print instead of emitting compact single-line JSON.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}
