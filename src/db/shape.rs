//! Structural checks for loosely-typed documents read from the cloud store.
//!
//! A check only looks at presence and primitive type of required fields.
//! Value ranges are business rules and live with the entities.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FieldViolation, ShapeError};

const ROOT: &str = "$";

pub struct ShapeCheck<'a> {
    obj: Option<&'a Map<String, Value>>,
    violations: Vec<FieldViolation>,
}

impl<'a> ShapeCheck<'a> {
    pub fn new(value: &'a Value) -> Self {
        let obj = value.as_object();
        let violations = match obj {
            Some(_) => Vec::new(),
            None => vec![FieldViolation {
                field: ROOT.to_string(),
                reason: "expected object".to_string(),
            }],
        };
        Self { obj, violations }
    }

    fn require(mut self, field: &str, expected: &str, ok: impl Fn(&Value) -> bool) -> Self {
        let Some(obj) = self.obj else {
            return self;
        };
        let reason = match obj.get(field) {
            None => Some("missing".to_string()),
            Some(v) if !ok(v) => Some(format!("expected {expected}")),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            self.violations.push(FieldViolation {
                field: field.to_string(),
                reason,
            });
        }
        self
    }

    pub fn string(self, field: &str) -> Self {
        self.require(field, "string", Value::is_string)
    }

    pub fn number(self, field: &str) -> Self {
        self.require(field, "number", Value::is_number)
    }

    pub fn boolean(self, field: &str) -> Self {
        self.require(field, "boolean", Value::is_boolean)
    }

    pub fn array(self, field: &str) -> Self {
        self.require(field, "array", Value::is_array)
    }

    pub fn one_of(self, field: &str, allowed: &[&str]) -> Self {
        let expected = format!("one of {allowed:?}");
        self.require(field, &expected, |v| {
            v.as_str().is_some_and(|s| allowed.contains(&s))
        })
    }

    pub fn finish(self) -> Result<(), ShapeError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ShapeError {
                violations: self.violations,
            })
        }
    }
}

/// A document-store shape with a collection name and a structural guard.
pub trait Document: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    fn required_fields(check: ShapeCheck<'_>) -> ShapeCheck<'_>;

    /// Checks required fields, then decodes. Optional fields that are present
    /// but of the wrong type surface as a violation on the whole document.
    fn validate(value: &Value) -> Result<Self, ShapeError> {
        Self::required_fields(ShapeCheck::new(value)).finish()?;
        serde_json::from_value(value.clone()).map_err(|e| ShapeError {
            violations: vec![FieldViolation {
                field: ROOT.to_string(),
                reason: e.to_string(),
            }],
        })
    }

    fn is_valid(value: &Value) -> bool {
        Self::validate(value).is_ok()
    }
}
