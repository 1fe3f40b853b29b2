use cohorte_catalog::merge::merge_catalog;
use cohorte_catalog::static_catalog;
use cohorte_core::models::question::{CustomQuestion, NewCustomQuestion, QuestionId};
use cohorte_core::models::theme::Theme;
use tracing::{error, info};

use crate::api::QuestionApi;
use crate::error::ApiError;
use crate::notify::{CatalogEvent, Notification, Notifier};

const MSG_LOAD_FAILED: &str = "Could not load custom questions";
const MSG_ADDED: &str = "Custom question added";
const MSG_ADD_FAILED: &str = "Could not add custom question";
const MSG_DELETED: &str = "Custom question deleted";
const MSG_DELETE_FAILED: &str = "Could not delete custom question";

/// Session-local view of the custom questions and the merged catalog.
///
/// The question list only changes after the backend confirms a call; on
/// failure it is left as it was, the user gets an error notification and
/// the error is returned so the calling view can keep its own state (an
/// open dialog, say). Superseded fetches are not cancelled.
pub struct QuestionStore<A, N> {
    api: A,
    notifier: N,
    static_catalog: Vec<Theme>,
    token: Option<String>,
    questions: Vec<CustomQuestion>,
    themes: Vec<Theme>,
    loading: bool,
}

impl<A: QuestionApi, N: Notifier> QuestionStore<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self::with_catalog(api, notifier, static_catalog())
    }

    pub fn with_catalog(api: A, notifier: N, catalog: Vec<Theme>) -> Self {
        Self {
            api,
            notifier,
            themes: catalog.clone(),
            static_catalog: catalog,
            token: None,
            questions: Vec::new(),
            loading: false,
        }
    }

    /// Merged catalog: built-in themes with their custom questions appended.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn custom_questions(&self) -> &[CustomQuestion] {
        &self.questions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Record the current bearer token. A new token triggers a fetch of the
    /// custom questions; clearing it drops them and restores the static
    /// catalog.
    pub async fn set_token(&mut self, token: Option<String>) -> Result<(), ApiError> {
        match token {
            Some(token) => {
                self.token = Some(token);
                self.refresh().await
            }
            None => {
                self.token = None;
                self.questions.clear();
                self.themes = self.static_catalog.clone();
                self.notifier.catalog_changed(CatalogEvent::Cleared);
                Ok(())
            }
        }
    }

    /// Re-fetch the custom questions and rebuild the catalog.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let token = self.token.clone().ok_or(ApiError::MissingToken)?;

        self.loading = true;
        let fetched = self.api.fetch_questions(&token).await;
        self.loading = false;

        let result = fetched.and_then(|questions| {
            let themes = merge_catalog(&self.static_catalog, &questions)?;
            Ok((questions, themes))
        });

        match result {
            Ok((questions, themes)) => {
                info!(count = questions.len(), "custom questions loaded");
                let question_count = questions.len();
                self.questions = questions;
                self.themes = themes;
                self.notifier
                    .catalog_changed(CatalogEvent::Loaded { question_count });
                Ok(())
            }
            Err(e) => Err(self.fail(MSG_LOAD_FAILED, e)),
        }
    }

    /// Create a custom question and append it to its theme.
    pub async fn add_question(
        &mut self,
        question: &NewCustomQuestion,
    ) -> Result<CustomQuestion, ApiError> {
        match self.try_add(question).await {
            Ok(created) => {
                self.notifier.notify(Notification::success(MSG_ADDED));
                self.notifier
                    .catalog_changed(CatalogEvent::QuestionAdded { id: created.id });
                Ok(created)
            }
            Err(e) => Err(self.fail(MSG_ADD_FAILED, e)),
        }
    }

    async fn try_add(&mut self, question: &NewCustomQuestion) -> Result<CustomQuestion, ApiError> {
        let token = self.token.clone().ok_or(ApiError::MissingToken)?;
        let payload = question.to_payload()?;
        let created = self.api.add_question(&token, &payload).await?;

        let mut questions = self.questions.clone();
        questions.push(created.clone());
        self.themes = merge_catalog(&self.static_catalog, &questions)?;
        self.questions = questions;
        Ok(created)
    }

    /// Delete a custom question and drop it from its theme.
    pub async fn delete_question(&mut self, id: QuestionId) -> Result<(), ApiError> {
        match self.try_delete(id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(MSG_DELETED));
                self.notifier
                    .catalog_changed(CatalogEvent::QuestionDeleted { id });
                Ok(())
            }
            Err(e) => Err(self.fail(MSG_DELETE_FAILED, e)),
        }
    }

    async fn try_delete(&mut self, id: QuestionId) -> Result<(), ApiError> {
        let token = self.token.clone().ok_or(ApiError::MissingToken)?;
        self.api.delete_question(&token, id).await?;

        let questions: Vec<CustomQuestion> =
            self.questions.iter().filter(|q| q.id != id).cloned().collect();
        self.themes = merge_catalog(&self.static_catalog, &questions)?;
        self.questions = questions;
        Ok(())
    }

    fn fail(&self, message: &str, e: ApiError) -> ApiError {
        error!(error = %e, "{message}");
        self.notifier.notify(Notification::error(message));
        e
    }
}
