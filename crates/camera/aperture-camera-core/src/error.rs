//! Error types for the fixture codec and evaluation.

use thiserror::Error;

/// A value failed one of the data-model invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invariant violated on '{field}': {reason}")]
pub struct InvariantViolation {
    pub field: &'static str,
    pub reason: String,
}

impl InvariantViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors produced while decoding fixtures or modifiers from JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// `"type"` is missing, not a string, or not a registered discriminator.
    /// `found` carries the offending string when there was one.
    #[error("unknown {family} discriminator: {}", .found.as_deref().unwrap_or("<missing>"))]
    UnknownDiscriminator {
        family: &'static str,
        found: Option<String>,
    },
    #[error("malformed field '{field}': {message}")]
    MalformedField { field: String, message: String },
    #[error(transparent)]
    InvariantViolation(#[from] InvariantViolation),
    #[error("json syntax error: {0}")]
    Syntax(String),
    /// An element of a fixture list failed to decode.
    #[error("fixture #{index}: {source}")]
    InFixture {
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn malformed(field: impl Into<String>, message: impl ToString) -> Self {
        DecodeError::MalformedField {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Unwrap list context and return the underlying error.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::InFixture { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Errors produced while encoding fixtures or modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value's variant has no entry in the discriminator table.
    #[error("no {family} discriminator registered for variant {variant}")]
    UnregisteredVariant {
        family: &'static str,
        variant: String,
    },
    #[error("serialize: {0}")]
    Serialize(String),
}

/// Non-fatal conditions raised while evaluating a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The host resolver could not find the fixture's target; the position
    /// was left unchanged for this tick.
    #[error("target '{target}' could not be resolved")]
    TargetUnresolved { target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_discriminator_message_names_missing_type() {
        let err = DecodeError::UnknownDiscriminator {
            family: "fixture",
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "unknown fixture discriminator: <missing>"
        );
    }

    #[test]
    fn root_cause_unwraps_nested_list_errors() {
        let inner = DecodeError::from(InvariantViolation::new("duration", "must be > 0"));
        let err = DecodeError::InFixture {
            index: 2,
            source: Box::new(inner.clone()),
        };
        assert_eq!(err.root_cause(), &inner);
        assert!(err.to_string().starts_with("fixture #2:"));
    }
}
