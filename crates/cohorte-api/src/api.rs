use std::future::Future;

use cohorte_core::models::question::{CustomQuestion, CustomQuestionPayload, QuestionId};

use crate::error::ApiError;

/// The custom-question endpoints of the backend. Every call is
/// authenticated with the caller's bearer token; none is retried.
pub trait QuestionApi: Send + Sync {
    fn fetch_questions(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<CustomQuestion>, ApiError>> + Send;

    /// Create a question; the server answers with the stored record,
    /// including its assigned id.
    fn add_question(
        &self,
        token: &str,
        payload: &CustomQuestionPayload,
    ) -> impl Future<Output = Result<CustomQuestion, ApiError>> + Send;

    fn delete_question(
        &self,
        token: &str,
        id: QuestionId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
