use std::fmt;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum WellnessError {
    #[error("validation error: {0}")]
    Validation(ValidationError),

    #[error("shape error: {0}")]
    Shape(ShapeError),

    #[error("malformed timestamp in `{field}`: {value:?}")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl WellnessError {
    pub(crate) fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        WellnessError::MalformedTimestamp {
            field,
            value: value.into(),
        }
    }
}

impl From<ValidationError> for WellnessError {
    fn from(e: ValidationError) -> Self {
        WellnessError::Validation(e)
    }
}

impl From<ShapeError> for WellnessError {
    fn from(e: ShapeError) -> Self {
        WellnessError::Shape(e)
    }
}

pub type WellnessResult<T> = Result<T, WellnessError>;

/// One score or duration outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// All range violations found in a single check-in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationError {
    pub violations: Vec<ScoreViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}={} not in [{}, {}]", v.field, v.value, v.min, v.max))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// A required field that is missing or carries the wrong primitive type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeError {
    pub violations: Vec<FieldViolation>,
}

impl ShapeError {
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                reason: reason.into(),
            }],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.reason))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
