use std::fmt::Display;

use thiserror::Error;

/// Label used for violations that belong to the payload as a whole rather
/// than a single key.
pub const ROOT_LABEL: &str = "value";

/// The first rule a payload broke.
///
/// `field` is the dotted path to the offending key (`responses[3].answer`)
/// and `reason` the human readable constraint, so the rendered message reads
/// `"responses[3].answer" must be less than or equal to 5`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{field}\" {reason}")]
pub struct SchemaViolation {
    pub field: String,
    pub reason: String,
}

impl SchemaViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }

    pub fn root(reason: impl Into<String>) -> Self {
        Self::new(ROOT_LABEL, reason)
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "is required")
    }

    pub fn not_allowed(field: &str) -> Self {
        Self::new(field, "is not allowed")
    }

    pub fn one_of<T: Display>(field: &str, allowed: &[T]) -> Self {
        Self::new(field, format!("must be one of [{}]", join(allowed)))
    }

    pub fn at_least_one_of<T: Display>(keys: &[T]) -> Self {
        Self::root(format!("must contain at least one of [{}]", join(keys)))
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_the_field() {
        let violation = SchemaViolation::new("responses", "must contain 25 items");
        assert_eq!(violation.to_string(), "\"responses\" must contain 25 items");
    }

    #[test]
    fn test_at_least_one_of_is_reported_on_the_root() {
        let violation = SchemaViolation::at_least_one_of(&["title", "tags"]);
        assert_eq!(violation.field, ROOT_LABEL);
        assert_eq!(violation.to_string(), "\"value\" must contain at least one of [title, tags]");
    }
}
