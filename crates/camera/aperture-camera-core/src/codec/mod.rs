//! Tagged JSON codec for fixtures and modifiers.
//!
//! Every encoded object carries a `"type"` discriminator naming its variant.
//! The remaining fields come from two places:
//! - the exposed fields of the variant struct (its serde derive; anything
//!   marked `#[serde(skip)]` is not part of the serialized form), and
//! - the variant's [`SerializedExtras`] hook, for state that lives outside the
//!   uniform field set (e.g. look/follow targets).
//!
//! Shape of a fixture:
//! ```json
//! { "duration": 40, "name": "",
//!   "modifiers": [ { "shake": 4.0, "shakeAmount": 0.5, "type": "shake" } ],
//!   "target": "player", "type": "look" }
//! ```
//! `"type"` is always written last; readers accept it anywhere and ignore
//! unknown fields.

mod registry;
mod text;

pub use text::FixtureCodec;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use self::registry::{Registry, FIXTURES, MODIFIERS};
use crate::error::{DecodeError, EncodeError};
use crate::fixture::{Fixture, FixtureBody};
use crate::modifier::Modifier;
use crate::target::TargetRef;

const TYPE_KEY: &str = "type";
const DURATION_KEY: &str = "duration";
const NAME_KEY: &str = "name";
const MODIFIERS_KEY: &str = "modifiers";
const TARGET_KEY: &str = "target";

/// Per-variant hook for serialized state outside the exposed field set.
///
/// Both methods default to doing nothing.
pub trait SerializedExtras {
    fn write_extras(&self, _out: &mut Map<String, JsonValue>) {}

    fn read_extras(&mut self, _input: &Map<String, JsonValue>) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// Encode a fixture into its tagged JSON object.
pub fn encode_fixture(fixture: &Fixture) -> Result<JsonValue, EncodeError> {
    let discriminator = discriminator_for(&FIXTURES, fixture.kind())?;

    let mut out = Map::new();
    out.insert(DURATION_KEY.into(), JsonValue::from(fixture.duration()));
    out.insert(NAME_KEY.into(), JsonValue::String(fixture.name.clone()));
    let modifiers = fixture
        .modifiers
        .iter()
        .map(encode_modifier)
        .collect::<Result<Vec<_>, _>>()?;
    out.insert(MODIFIERS_KEY.into(), JsonValue::Array(modifiers));

    match &fixture.body {
        FixtureBody::Idle(b) => write_variant(b, &mut out)?,
        FixtureBody::Path(b) => write_variant(b, &mut out)?,
        FixtureBody::Look(b) => write_variant(b, &mut out)?,
        FixtureBody::Follow(b) => write_variant(b, &mut out)?,
        FixtureBody::Circular(b) => write_variant(b, &mut out)?,
    }

    out.insert(TYPE_KEY.into(), JsonValue::from(discriminator));
    Ok(JsonValue::Object(out))
}

/// Decode a fixture from its tagged JSON object.
///
/// Nothing is returned unless the whole object decodes and validates.
pub fn decode_fixture(json: JsonValue) -> Result<Fixture, DecodeError> {
    let obj = expect_object(&json, "fixture")?;
    let construct = resolve(&FIXTURES, obj)?;

    let duration = match non_null(obj, DURATION_KEY) {
        None => 0,
        Some(v) => v.as_u64().ok_or_else(|| {
            DecodeError::malformed(DURATION_KEY, format!("expected unsigned integer, got {v}"))
        })?,
    };
    let name = match non_null(obj, NAME_KEY) {
        None => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(v) => {
            return Err(DecodeError::malformed(
                NAME_KEY,
                format!("expected string, got {v}"),
            ))
        }
    };
    let modifiers = match non_null(obj, MODIFIERS_KEY) {
        None => Vec::new(),
        Some(JsonValue::Array(items)) => items
            .iter()
            .map(read_modifier)
            .collect::<Result<Vec<_>, _>>()?,
        Some(v) => {
            return Err(DecodeError::malformed(
                MODIFIERS_KEY,
                format!("expected array, got {v}"),
            ))
        }
    };

    let body = construct(&json)?;
    let mut fixture = Fixture::new(body, duration)?;
    fixture.name = name;
    fixture.modifiers = modifiers;
    fixture.validate()?;

    log::debug!(
        "decoded {:?} fixture '{}' ({} ticks, {} modifiers)",
        fixture.kind(),
        fixture.name,
        fixture.duration(),
        fixture.modifiers.len()
    );
    Ok(fixture)
}

/// Encode a modifier into its tagged JSON object.
pub fn encode_modifier(modifier: &Modifier) -> Result<JsonValue, EncodeError> {
    let discriminator = discriminator_for(&MODIFIERS, modifier.kind())?;
    let mut out = Map::new();
    match modifier {
        Modifier::Shake(m) => write_exposed(m, &mut out)?,
    }
    out.insert(TYPE_KEY.into(), JsonValue::from(discriminator));
    Ok(JsonValue::Object(out))
}

/// Decode a modifier from its tagged JSON object.
pub fn decode_modifier(json: JsonValue) -> Result<Modifier, DecodeError> {
    read_modifier(&json)
}

fn read_modifier(json: &JsonValue) -> Result<Modifier, DecodeError> {
    let obj = expect_object(json, "modifier")?;
    let construct = resolve(&MODIFIERS, obj)?;
    construct(json)
}

/// Encode a fixture timeline as a JSON array, preserving order.
pub fn encode_fixtures(fixtures: &[Fixture]) -> Result<JsonValue, EncodeError> {
    fixtures
        .iter()
        .map(encode_fixture)
        .collect::<Result<Vec<_>, _>>()
        .map(JsonValue::Array)
}

/// Decode a fixture timeline from a JSON array. Errors name the index of the
/// first element that failed.
pub fn decode_fixtures(json: JsonValue) -> Result<Vec<Fixture>, DecodeError> {
    let JsonValue::Array(items) = json else {
        return Err(DecodeError::malformed("fixtures", "expected array"));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            decode_fixture(item).map_err(|source| DecodeError::InFixture {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Write a target reference as the top-level `"target"` string.
pub(crate) fn write_target(target: &TargetRef, out: &mut Map<String, JsonValue>) {
    out.insert(
        TARGET_KEY.into(),
        JsonValue::String(target.as_str().to_string()),
    );
}

/// Read the top-level `"target"` string; missing or null yields an empty
/// reference.
pub(crate) fn read_target(input: &Map<String, JsonValue>) -> Result<TargetRef, DecodeError> {
    match non_null(input, TARGET_KEY) {
        None => Ok(TargetRef::default()),
        Some(JsonValue::String(s)) => Ok(TargetRef::new(s.as_str())),
        Some(v) => Err(DecodeError::malformed(
            TARGET_KEY,
            format!("expected string, got {v}"),
        )),
    }
}

/// Uniform exposed-field read. Unknown keys (including `"type"`) are ignored
/// by the serde derives.
pub(crate) fn read_exposed<T: DeserializeOwned>(json: &JsonValue) -> Result<T, DecodeError> {
    read_fields(json, short_type_name::<T>())
}

/// Like [`read_exposed`], attributing errors to `owner`.
pub(crate) fn read_fields<T: DeserializeOwned>(
    json: &JsonValue,
    owner: &str,
) -> Result<T, DecodeError> {
    T::deserialize(json).map_err(|e| DecodeError::malformed(owner, e))
}

fn write_variant<T>(body: &T, out: &mut Map<String, JsonValue>) -> Result<(), EncodeError>
where
    T: Serialize + SerializedExtras,
{
    write_exposed(body, out)?;
    body.write_extras(out);
    Ok(())
}

fn write_exposed<T: Serialize>(
    value: &T,
    out: &mut Map<String, JsonValue>,
) -> Result<(), EncodeError> {
    match serde_json::to_value(value).map_err(|e| EncodeError::Serialize(e.to_string()))? {
        JsonValue::Object(fields) => {
            out.extend(fields);
            Ok(())
        }
        other => Err(EncodeError::Serialize(format!(
            "exposed fields must form an object, got {other}"
        ))),
    }
}

fn discriminator_for<K, T>(
    registry: &Registry<K, T>,
    kind: K,
) -> Result<&'static str, EncodeError>
where
    K: Copy + PartialEq + std::fmt::Debug,
{
    registry
        .discriminator_of(kind)
        .ok_or_else(|| EncodeError::UnregisteredVariant {
            family: registry.family(),
            variant: format!("{kind:?}"),
        })
}

fn resolve<K, T>(
    registry: &Registry<K, T>,
    obj: &Map<String, JsonValue>,
) -> Result<registry::Constructor<T>, DecodeError>
where
    K: Copy + PartialEq,
{
    let unknown = |found: Option<String>| {
        log::debug!(
            "rejecting {} with discriminator {:?}; known: {:?}",
            registry.family(),
            found,
            registry.discriminators().collect::<Vec<_>>()
        );
        DecodeError::UnknownDiscriminator {
            family: registry.family(),
            found,
        }
    };

    match obj.get(TYPE_KEY) {
        Some(JsonValue::String(name)) => registry
            .lookup(name)
            .ok_or_else(|| unknown(Some(name.clone()))),
        Some(JsonValue::Null) | None => Err(unknown(None)),
        Some(other) => Err(unknown(Some(other.to_string()))),
    }
}

fn expect_object<'a>(
    json: &'a JsonValue,
    what: &str,
) -> Result<&'a Map<String, JsonValue>, DecodeError> {
    json.as_object()
        .ok_or_else(|| DecodeError::malformed(what, format!("expected object, got {json}")))
}

/// Field lookup treating an explicit `null` like a missing key.
fn non_null<'a>(obj: &'a Map<String, JsonValue>, key: &str) -> Option<&'a JsonValue> {
    obj.get(key).filter(|v| !v.is_null())
}

/// serde_json does not report the failing key for `Value` input, so exposed
/// field errors are attributed to the variant struct instead.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
