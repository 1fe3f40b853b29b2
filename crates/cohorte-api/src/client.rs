use std::time::Duration;

use cohorte_core::api_paths;
use cohorte_core::models::question::{CustomQuestion, CustomQuestionPayload, QuestionId};
use tracing::{debug, info};
use ureq::Agent;

use crate::api::QuestionApi;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// [`QuestionApi`] over HTTP. Requests run on the blocking pool so callers
/// on the async runtime are never stalled by network I/O.
#[derive(Clone)]
pub struct HttpQuestionApi {
    agent: Agent,
    base_url: String,
}

impl HttpQuestionApi {
    pub fn new(config: &ApiConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl QuestionApi for HttpQuestionApi {
    async fn fetch_questions(&self, token: &str) -> Result<Vec<CustomQuestion>, ApiError> {
        let agent = self.agent.clone();
        let url = api_paths::custom_questions(&self.base_url);
        let auth = api_paths::bearer(token);

        debug!(url = %url, "fetching custom questions");
        let body = tokio::task::spawn_blocking(move || -> Result<String, ApiError> {
            let mut response = agent.get(&url).header("Authorization", &auth).call()?;
            Ok(response.body_mut().read_to_string()?)
        })
        .await??;

        let questions: Vec<CustomQuestion> = serde_json::from_str(&body)?;
        info!(count = questions.len(), "custom questions fetched");
        Ok(questions)
    }

    async fn add_question(
        &self,
        token: &str,
        payload: &CustomQuestionPayload,
    ) -> Result<CustomQuestion, ApiError> {
        let agent = self.agent.clone();
        let url = api_paths::custom_questions(&self.base_url);
        let auth = api_paths::bearer(token);
        let request_body = serde_json::to_string(payload)?;

        let body = tokio::task::spawn_blocking(move || -> Result<String, ApiError> {
            let mut response = agent
                .post(&url)
                .header("Authorization", &auth)
                .header("Content-Type", "application/json")
                .send(request_body.as_bytes())?;
            Ok(response.body_mut().read_to_string()?)
        })
        .await??;

        let created: CustomQuestion = serde_json::from_str(&body)?;
        info!(id = created.id, variable = %created.variable_name, "custom question created");
        Ok(created)
    }

    async fn delete_question(&self, token: &str, id: QuestionId) -> Result<(), ApiError> {
        let agent = self.agent.clone();
        let url = api_paths::custom_question(&self.base_url, id);
        let auth = api_paths::bearer(token);

        tokio::task::spawn_blocking(move || -> Result<(), ApiError> {
            agent.delete(&url).header("Authorization", &auth).call()?;
            Ok(())
        })
        .await??;

        info!(id, "custom question deleted");
        Ok(())
    }
}
