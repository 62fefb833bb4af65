//! Request body validation for new history records.
//!
//! Validation is a pure function from the raw JSON body to either a typed
//! [`NewCalculation`] or the first [`ValidationError`] encountered. Fields are
//! checked in order: `direction` (or its wire alias `mode`), then
//! `targetTime`.

use serde::Serialize;
use serde_json::Value;

use crate::clock;
use crate::sleep_cycle::{Direction, NewCalculation};

/// The first schema failure for a request body.
///
/// `field` is the path of the offending property, or `""` when the body
/// itself is the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub message: String,
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Validate a `POST /api/calculations` body.
pub fn validate_new_calculation(body: &Value) -> Result<NewCalculation, ValidationError> {
    let fields = body.as_object().ok_or_else(|| {
        ValidationError::new("", format!("Expected object, received {}", json_type(body)))
    })?;

    // `mode` is the storage/wire name of the same property.
    let (direction_field, direction_value) = match (fields.get("direction"), fields.get("mode")) {
        (Some(value), _) => ("direction", Some(value)),
        (None, Some(value)) => ("mode", Some(value)),
        (None, None) => ("direction", None),
    };
    let direction_text = require_string(direction_field, direction_value)?;
    let direction = direction_text.parse::<Direction>().map_err(|_| {
        ValidationError::new(
            direction_field,
            format!(
                "Invalid enum value. Expected 'wakeup' | 'bedtime', received '{direction_text}'"
            ),
        )
    })?;

    let time_text = require_string("targetTime", fields.get("targetTime"))?;
    let target_time = clock::parse_hh_mm(time_text)
        .ok_or_else(|| ValidationError::new("targetTime", "Invalid time, expected HH:mm"))?;

    Ok(NewCalculation {
        direction,
        target_time,
    })
}

fn require_string<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::new(field, "Required")),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ValidationError::new(
            field,
            format!("Expected string, received {}", json_type(other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
