use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value as JsonValue;

use super::{decode_fixture, decode_fixtures, encode_fixture, encode_fixtures};
use crate::config::Config;
use crate::error::{DecodeError, EncodeError};
use crate::fixture::Fixture;

/// String front-end over the JSON codec.
#[derive(Clone, Debug, Default)]
pub struct FixtureCodec {
    config: Config,
}

impl FixtureCodec {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn to_string(&self, fixture: &Fixture) -> Result<String, EncodeError> {
        self.render(&encode_fixture(fixture)?)
    }

    pub fn from_str(&self, text: &str) -> Result<Fixture, DecodeError> {
        decode_fixture(parse(text)?)
    }

    pub fn list_to_string(&self, fixtures: &[Fixture]) -> Result<String, EncodeError> {
        self.render(&encode_fixtures(fixtures)?)
    }

    pub fn list_from_str(&self, text: &str) -> Result<Vec<Fixture>, DecodeError> {
        decode_fixtures(parse(text)?)
    }

    fn render(&self, value: &JsonValue) -> Result<String, EncodeError> {
        if !self.config.pretty {
            return serde_json::to_string(value).map_err(|e| EncodeError::Serialize(e.to_string()));
        }
        let indent = vec![b' '; self.config.indent];
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value
            .serialize(&mut ser)
            .map_err(|e| EncodeError::Serialize(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| EncodeError::Serialize(e.to_string()))
    }
}

fn parse(text: &str) -> Result<JsonValue, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError::Syntax(e.to_string()))
}
