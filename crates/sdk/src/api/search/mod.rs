use nestre_core::search::{GROUP_SCORES_SCHEMA, USER_ASSESSMENT_FILTERS_SCHEMA};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::api::{
    guard::{checked_payload, non_blank},
    http::HttpClient,
    types::{ApiResult, ApiSdkError},
};

#[derive(Debug, Clone)]
pub struct SearchApi {
    client: Arc<HttpClient>,
}

impl SearchApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Latest assessment scores for every user in a group.
    pub async fn latest_assessment_scores_for_group<B>(
        &self,
        request: &B,
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body = checked_payload(
            "SearchApi.latest_assessment_scores_for_group",
            &GROUP_SCORES_SCHEMA,
            request,
        )?;

        self.client.post("search/latest-assessment-scores-for-group", &body).await
    }

    /// Assessments together with their individual responses. The ids are sent
    /// as one comma separated `assessment_ids` parameter.
    pub async fn assessments_with_responses<S>(
        &self,
        assessment_ids: &[S],
    ) -> ApiResult<Option<Value>>
    where
        S: AsRef<str>,
    {
        const CONTEXT: &str = "SearchApi.assessments_with_responses";
        if assessment_ids.is_empty() {
            return Err(ApiSdkError::InvalidArgument {
                context: CONTEXT,
                message: "Invalid assessment_ids: must contain at least one id".to_string(),
            });
        }

        let ids = assessment_ids
            .iter()
            .map(|id| -> ApiResult<&str> {
                let id = non_blank(CONTEXT, "assessment_ids", id.as_ref())?.trim();
                if id.contains(',') {
                    debug!(context = CONTEXT, "rejected assessment id containing a comma");
                    return Err(ApiSdkError::InvalidArgument {
                        context: CONTEXT,
                        message: "Invalid assessment_ids: an id must not contain ','".to_string(),
                    });
                }
                Ok(id)
            })
            .collect::<ApiResult<Vec<_>>>()?
            .join(",");

        self.client
            .get_with_query("search/assessments-with-responses", &[("assessment_ids", ids)])
            .await
    }

    /// Search assessments by user, organization or date range. Only the
    /// filters that are set are sent.
    pub async fn user_assessments<F>(&self, filters: &F) -> ApiResult<Option<Value>>
    where
        F: Serialize + ?Sized,
    {
        let query = checked_payload(
            "SearchApi.user_assessments",
            &USER_ASSESSMENT_FILTERS_SCHEMA,
            filters,
        )?;

        self.client.get_with_query("search/user-assessments", &query).await
    }

    /// The profile of the user who took an assessment.
    pub async fn profile_for_assessment(&self, assessment_id: &str) -> ApiResult<Option<Value>> {
        let assessment_id =
            non_blank("SearchApi.profile_for_assessment", "assessment_id", assessment_id)?;

        self.client
            .get_with_query("search/profile-for-assessment", &[("assessment_id", assessment_id)])
            .await
    }
}
