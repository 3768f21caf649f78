use serde::Serialize;
use serde_json::Value;

use crate::validation::{
    rule::FieldRule,
    violation::{SchemaViolation, ROOT_LABEL},
};

/// Declarative description of one JSON object payload.
///
/// Keys are checked in declaration order, then unknown keys, then the
/// object-level "at least one of" groups. Validation stops at the first
/// violation.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldRule)>,
    at_least_one_of: Vec<Vec<String>>,
    allow_unknown: bool,
}

impl Schema {
    pub fn object() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.fields.push((name.to_string(), rule));
        self
    }

    /// Requires at least one of `keys` to be present.
    pub fn at_least_one_of(mut self, keys: &[&str]) -> Self {
        self.at_least_one_of.push(keys.iter().map(|key| key.to_string()).collect());
        self
    }

    /// Accepts keys that have no rule instead of rejecting them.
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validates a JSON value against this schema.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.check_object(ROOT_LABEL, value)
    }

    /// Serializes `payload` and validates the resulting JSON.
    pub fn validate_payload<T: Serialize + ?Sized>(
        &self,
        payload: &T,
    ) -> Result<Value, SchemaViolation> {
        let value = serde_json::to_value(payload).map_err(|e| {
            SchemaViolation::root(format!("could not be serialized to JSON: {}", e))
        })?;
        self.validate(&value)?;
        Ok(value)
    }

    pub(crate) fn check_object(&self, label: &str, value: &Value) -> Result<(), SchemaViolation> {
        let object =
            value.as_object().ok_or_else(|| SchemaViolation::new(label, "must be of type object"))?;

        for (name, rule) in &self.fields {
            let path = child_path(label, name);
            match object.get(name) {
                Some(value) => rule.check(&path, value)?,
                None if rule.is_required() => return Err(SchemaViolation::required(&path)),
                None => {}
            }
        }

        if !self.allow_unknown {
            if let Some(unknown) =
                object.keys().find(|key| !self.fields.iter().any(|(name, _)| name == *key))
            {
                return Err(SchemaViolation::not_allowed(&child_path(label, unknown)));
            }
        }

        for group in &self.at_least_one_of {
            if !group.iter().any(|key| object.contains_key(key)) {
                return Err(SchemaViolation::new(
                    label,
                    SchemaViolation::at_least_one_of(group).reason,
                ));
            }
        }

        Ok(())
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == ROOT_LABEL {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
