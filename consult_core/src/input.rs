//! Coercion of loosely typed JSON request bodies.
//!
//! Web clients post form values as whatever JSON type the form produced:
//! numbers may arrive as strings, optional text may be missing, `null` or
//! empty. This module turns such a body into a [`ConsultationRequest`],
//! failing only where a typed request cannot be formed at all.

use crate::number::{parse_float, JsNumber};
use crate::{
    ActivityLevel, ConsultationRequest, ConsultationType, Error, Goal, NumericInput, Result,
};
use serde_json::{Map, Value};

/// Text shown for a field the client did not send
pub const MISSING_TEXT: &str = "undefined";

/// Render a JSON value as text the way a browser template would.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => JsNumber(n.as_f64().unwrap_or(f64::NAN)).to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Whether a JSON value counts as "provided" for optional sections
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn numeric_field(fields: &Map<String, Value>, key: &str) -> NumericInput {
    let raw = fields
        .get(key)
        .map(display_value)
        .unwrap_or_else(|| MISSING_TEXT.to_string());
    let value = parse_float(&raw);
    NumericInput { raw, value }
}

fn free_text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .filter(|v| is_truthy(v))
        .map(display_value)
}

fn optional_string_field(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::InvalidRequest(format!(
            "{} must be text, got {}",
            key, other
        ))),
    }
}

impl ConsultationRequest {
    /// Parse a request from raw JSON bytes.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Build a request from a parsed JSON body.
    ///
    /// Numeric fields are never rejected; unparseable input becomes NaN.
    /// Errors are limited to a non-object body, a missing or non-text
    /// `goal`, and non-text `dietaryPreferences` on a nutrition request.
    /// Fitness reports never read the preferences, so there a non-text
    /// value is dropped.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value
            .as_object()
            .ok_or_else(|| Error::InvalidRequest("request body must be a JSON object".into()))?;

        let goal = match fields.get("goal") {
            Some(Value::String(key)) => Goal::parse(key),
            Some(other) => {
                return Err(Error::InvalidRequest(format!(
                    "goal must be text, got {}",
                    other
                )))
            }
            None => return Err(Error::InvalidRequest("goal is required".into())),
        };

        // Keys are matched on display text, so `["moderate"]` still resolves
        let activity_level = match fields.get("activityLevel") {
            Some(value) => ActivityLevel::parse(&display_value(value)),
            None => ActivityLevel::Unrecognized,
        };

        let kind = ConsultationType::parse(fields.get("type").and_then(Value::as_str));

        let dietary_preferences = match kind {
            ConsultationType::Nutrition => optional_string_field(fields, "dietaryPreferences")?,
            ConsultationType::Fitness => fields
                .get("dietaryPreferences")
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        Ok(ConsultationRequest {
            age: numeric_field(fields, "age"),
            weight: numeric_field(fields, "weight"),
            height: numeric_field(fields, "height"),
            goal,
            activity_level,
            dietary_preferences,
            allergies: free_text_field(fields, "allergies"),
            health_conditions: free_text_field(fields, "healthConditions"),
            kind,
        })
    }
}
