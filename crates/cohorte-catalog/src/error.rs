use cohorte_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("custom question {question_id} could not be converted: {source}")]
    InvalidQuestion {
        question_id: i64,
        #[source]
        source: CoreError,
    },
}
