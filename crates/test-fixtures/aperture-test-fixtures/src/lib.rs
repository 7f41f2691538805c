//! Shared camera JSON samples, looked up by name through
//! `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    fixtures: HashMap<String, String>,
    invalid: HashMap<String, InvalidSample>,
    timelines: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct InvalidSample {
    path: String,
    error: ExpectedError,
}

/// Error class an invalid sample is expected to produce when decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    UnknownDiscriminator,
    MalformedField,
    InvariantViolation,
}

fn sample_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel)
}

fn entry<'a, T>(table: &'a HashMap<String, T>, family: &str, name: &str) -> Result<&'a T> {
    table
        .get(name)
        .ok_or_else(|| anyhow!("no {family} sample named '{name}'"))
}

fn read_text(rel: &str) -> Result<String> {
    let path = sample_path(rel);
    fs::read_to_string(&path).with_context(|| format!("reading sample {}", path.display()))
}

fn parse<T: DeserializeOwned>(rel: &str) -> Result<T> {
    serde_json::from_str(&read_text(rel)?).with_context(|| format!("parsing sample {rel}"))
}

/// Single camera fixtures that decode successfully.
pub mod fixtures {
    use super::*;

    pub fn text(name: &str) -> Result<String> {
        read_text(entry(&MANIFEST.fixtures, "camera", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse(entry(&MANIFEST.fixtures, "camera", name)?)
    }
}

/// Samples that must be rejected, paired with the expected error class.
pub mod invalid {
    use super::*;

    /// Sample names in sorted order.
    pub fn names() -> Vec<String> {
        let mut names: Vec<String> = MANIFEST.invalid.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse(&entry(&MANIFEST.invalid, "invalid", name)?.path)
    }

    pub fn expected_error(name: &str) -> Result<ExpectedError> {
        Ok(entry(&MANIFEST.invalid, "invalid", name)?.error)
    }
}

/// Whole timelines (JSON arrays of fixtures).
pub mod timelines {
    use super::*;

    pub fn text(name: &str) -> Result<String> {
        read_text(entry(&MANIFEST.timelines, "timeline", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse(entry(&MANIFEST.timelines, "timeline", name)?)
    }
}
