use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, Schema};

/// Body of `search/latest-assessment-scores-for-group`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupScoresRequest {
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub org_id: Option<String>,
}

impl GroupScoresRequest {
    pub fn new(user_ids: Vec<String>) -> Self {
        Self { user_ids, org_id: None }
    }
}

/// Query filters for `search/user-assessments`. Only the fields that are set
/// end up in the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAssessmentFilters {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub limit: Option<u32>,
}

impl UserAssessmentFilters {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()), ..Default::default() }
    }

    pub fn for_org(org_id: impl Into<String>) -> Self {
        Self { org_id: Some(org_id.into()), ..Default::default() }
    }
}

pub static GROUP_SCORES_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("user_ids", FieldRule::array(FieldRule::string()).required().min_length(1))
        .field("org_id", FieldRule::string())
});

pub static USER_ASSESSMENT_FILTERS_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .field("user_id", FieldRule::string())
        .field("org_id", FieldRule::string())
        .field("start_date", FieldRule::iso_date())
        .field("end_date", FieldRule::iso_date())
        .field("limit", FieldRule::integer().min(1))
        .at_least_one_of(&["user_id", "org_id", "start_date", "end_date"])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_scores_requires_a_user() {
        let err =
            GROUP_SCORES_SCHEMA.validate_payload(&GroupScoresRequest::new(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "\"user_ids\" must contain at least 1 items");

        let err = GROUP_SCORES_SCHEMA
            .validate_payload(&GroupScoresRequest::new(vec![" ".to_string()]))
            .unwrap_err();
        assert_eq!(err.field, "user_ids[0]");
    }

    #[test]
    fn test_filters_need_at_least_one_criterion() {
        let filters = UserAssessmentFilters { limit: Some(10), ..Default::default() };

        let err = USER_ASSESSMENT_FILTERS_SCHEMA.validate_payload(&filters).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"value\" must contain at least one of [user_id, org_id, start_date, end_date]"
        );
    }

    #[test]
    fn test_filters_serialize_dates_as_iso() {
        let filters = UserAssessmentFilters {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };

        let value = USER_ASSESSMENT_FILTERS_SCHEMA.validate_payload(&filters).unwrap();
        assert_eq!(value["start_date"], "2024-01-31");
    }

    #[test]
    fn test_filters_reject_zero_limit() {
        let filters =
            UserAssessmentFilters { limit: Some(0), ..UserAssessmentFilters::for_org("org-1") };

        let err = USER_ASSESSMENT_FILTERS_SCHEMA.validate_payload(&filters).unwrap_err();
        assert_eq!(err.to_string(), "\"limit\" must be greater than or equal to 1");
    }
}
