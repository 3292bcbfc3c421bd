//! Schema Validator/Normalizer: table-driven checks over a parsed JSON value.
//!
//! Every record type describes itself with a `RecordSchema`. Validation is
//! all-or-nothing: the first missing or mistyped field fails the whole record.
//! Normalization rewrites field values in place:
//! - bounded numbers are clamped into `[min, max]`
//! - enum strings are lower-cased and checked against the allowed set
//! - list elements are stringified, order preserved

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field '{field}' has value '{value}', expected one of: {allowed}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Normalized record could not be decoded: {0}")]
    Malformed(String),
}

/// The shape and constraints of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A number clamped into the closed interval `[min, max]`.
    Score { min: f64, max: f64 },
    /// A list whose elements are coerced to strings.
    StringList,
    /// A string from a fixed lowercase vocabulary. Input is case-insensitive.
    Enum(&'static [&'static str]),
    /// Free text, passed through unchanged.
    Text,
}

impl FieldKind {
    /// Human/LLM-facing type name used in format instructions.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Score { .. } => "number",
            FieldKind::StringList => "array of strings",
            FieldKind::Enum(_) => "string",
            FieldKind::Text => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
        }
    }
}

/// Field-specification table for one record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Validates `value` against this schema and returns the normalized object.
    pub fn validate(&self, value: Value) -> Result<Map<String, Value>, ValidationError> {
        let mut object = match value {
            Value::Object(map) => map,
            other => return Err(ValidationError::NotAnObject(json_type_name(&other))),
        };

        for spec in self.fields {
            match object.get_mut(spec.name) {
                Some(slot) => {
                    let normalized = normalize_field(spec, slot.take())?;
                    *slot = normalized;
                }
                None if spec.required => return Err(ValidationError::MissingField(spec.name)),
                None => {}
            }
        }

        Ok(object)
    }
}

fn normalize_field(spec: &FieldSpec, value: Value) -> Result<Value, ValidationError> {
    let wrong_type = |expected: &'static str, found: &Value| ValidationError::WrongType {
        field: spec.name,
        expected,
        found: json_type_name(found),
    };

    match spec.kind {
        FieldKind::Score { min, max } => {
            let score = value.as_f64().ok_or_else(|| wrong_type("a number", &value))?;
            Ok(Value::from(clamp_score(score, min, max)))
        }
        FieldKind::StringList => match value {
            Value::Array(items) => Ok(Value::Array(
                items
                    .into_iter()
                    .map(|item| Value::String(stringify(item)))
                    .collect(),
            )),
            other => Err(wrong_type("an array", &other)),
        },
        FieldKind::Enum(allowed) => {
            let raw = value.as_str().ok_or_else(|| wrong_type("a string", &value))?;
            let lowered = raw.trim().to_lowercase();
            if allowed.iter().any(|candidate| *candidate == lowered) {
                Ok(Value::String(lowered))
            } else {
                Err(ValidationError::InvalidEnumValue {
                    field: spec.name,
                    value: raw.to_string(),
                    allowed: allowed.join(", "),
                })
            }
        }
        FieldKind::Text => match value {
            Value::String(_) => Ok(value),
            other => Err(wrong_type("a string", &other)),
        },
    }
}

/// `max(min, min(max, score))`. Idempotent for values already in range.
pub fn clamp_score(score: f64, min: f64, max: f64) -> f64 {
    score.min(max).max(min)
}

/// String conversion for list elements: strings verbatim, everything else in JSON form.
fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
