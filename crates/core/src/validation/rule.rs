use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use url::Url;

use crate::validation::{schema::Schema, violation::SchemaViolation};

#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// `YYYY-MM-DD` or a full RFC 3339 timestamp.
    IsoDate,
    /// Absolute `http`/`https` URI.
    Uri,
    Array(Box<FieldRule>),
    Object(Box<Schema>),
    /// Any JSON object, keys are not checked.
    Map,
}

/// Constraint set for a single key of a [`Schema`].
///
/// Rules are assembled with the builder methods and are immutable once the
/// owning schema is built.
#[derive(Debug, Clone)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    allowed: Option<Vec<Value>>,
    min: Option<f64>,
    max: Option<f64>,
    length: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl FieldRule {
    fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            allowed: None,
            min: None,
            max: None,
            length: None,
            min_length: None,
            max_length: None,
        }
    }

    pub fn string() -> Self {
        Self::of(FieldKind::String)
    }

    pub fn integer() -> Self {
        Self::of(FieldKind::Integer)
    }

    pub fn number() -> Self {
        Self::of(FieldKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(FieldKind::Boolean)
    }

    pub fn iso_date() -> Self {
        Self::of(FieldKind::IsoDate)
    }

    pub fn uri() -> Self {
        Self::of(FieldKind::Uri)
    }

    pub fn array(items: FieldRule) -> Self {
        Self::of(FieldKind::Array(Box::new(items)))
    }

    pub fn object(schema: Schema) -> Self {
        Self::of(FieldKind::Object(Box::new(schema)))
    }

    pub fn map() -> Self {
        Self::of(FieldKind::Map)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restricts the value to a fixed set.
    pub fn valid<T: Into<Value> + Clone>(mut self, allowed: &[T]) -> Self {
        self.allowed = Some(allowed.iter().cloned().map(Into::into).collect());
        self
    }

    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Exact item count for arrays.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Minimum item count for arrays, minimum characters for strings.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Maximum item count for arrays, maximum characters for strings.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub(crate) fn check(&self, label: &str, value: &Value) -> Result<(), SchemaViolation> {
        match &self.kind {
            FieldKind::String => {
                self.check_string(label, value)?;
            }
            FieldKind::IsoDate => {
                let text = self.check_string(label, value)?;
                if !is_iso_date(text) {
                    return Err(SchemaViolation::new(label, "must be in ISO 8601 date format"));
                }
            }
            FieldKind::Uri => {
                let text = self.check_string(label, value)?;
                if !is_http_uri(text) {
                    return Err(SchemaViolation::new(label, "must be a valid uri"));
                }
            }
            FieldKind::Integer => {
                let number = self.check_number(label, value)?;
                if number.fract() != 0.0 {
                    return Err(SchemaViolation::new(label, "must be an integer"));
                }
            }
            FieldKind::Number => {
                self.check_number(label, value)?;
            }
            FieldKind::Boolean => {
                if !value.is_boolean() {
                    return Err(SchemaViolation::new(label, "must be a boolean"));
                }
            }
            FieldKind::Array(items) => self.check_array(label, items, value)?,
            FieldKind::Object(schema) => schema.check_object(label, value)?,
            FieldKind::Map => {
                if !value.is_object() {
                    return Err(SchemaViolation::new(label, "must be of type object"));
                }
            }
        }

        if let Some(allowed) = &self.allowed {
            if !allowed.contains(value) {
                let rendered: Vec<String> = allowed.iter().map(render_allowed).collect();
                return Err(SchemaViolation::one_of(label, &rendered));
            }
        }

        Ok(())
    }

    fn check_string<'a>(&self, label: &str, value: &'a Value) -> Result<&'a str, SchemaViolation> {
        let text =
            value.as_str().ok_or_else(|| SchemaViolation::new(label, "must be a string"))?;

        if text.trim().is_empty() {
            return Err(SchemaViolation::new(label, "is not allowed to be empty"));
        }

        let chars = text.chars().count();
        if let Some(min_length) = self.min_length {
            if chars < min_length {
                return Err(SchemaViolation::new(
                    label,
                    format!("length must be at least {} characters long", min_length),
                ));
            }
        }
        if let Some(max_length) = self.max_length {
            if chars > max_length {
                return Err(SchemaViolation::new(
                    label,
                    format!("length must be less than or equal to {} characters long", max_length),
                ));
            }
        }

        Ok(text)
    }

    fn check_number(&self, label: &str, value: &Value) -> Result<f64, SchemaViolation> {
        let number =
            value.as_f64().ok_or_else(|| SchemaViolation::new(label, "must be a number"))?;

        if let Some(min) = self.min {
            if number < min {
                return Err(SchemaViolation::new(
                    label,
                    format!("must be greater than or equal to {}", min),
                ));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return Err(SchemaViolation::new(
                    label,
                    format!("must be less than or equal to {}", max),
                ));
            }
        }

        Ok(number)
    }

    fn check_array(
        &self,
        label: &str,
        items: &FieldRule,
        value: &Value,
    ) -> Result<(), SchemaViolation> {
        let values =
            value.as_array().ok_or_else(|| SchemaViolation::new(label, "must be an array"))?;

        if let Some(length) = self.length {
            if values.len() != length {
                return Err(SchemaViolation::new(label, format!("must contain {} items", length)));
            }
        }
        if let Some(min_length) = self.min_length {
            if values.len() < min_length {
                return Err(SchemaViolation::new(
                    label,
                    format!("must contain at least {} items", min_length),
                ));
            }
        }
        if let Some(max_length) = self.max_length {
            if values.len() > max_length {
                return Err(SchemaViolation::new(
                    label,
                    format!("must contain less than or equal to {} items", max_length),
                ));
            }
        }

        for (index, item) in values.iter().enumerate() {
            items.check(&format!("{}[{}]", label, index), item)?;
        }

        Ok(())
    }
}

fn render_allowed(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_iso_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(text).is_ok()
}

fn is_http_uri(text: &str) -> bool {
    Url::parse(text)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
