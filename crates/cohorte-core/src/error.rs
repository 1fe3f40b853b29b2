use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("options of question {question_id} are not a JSON list of strings: {source}")]
    MalformedOptions {
        question_id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate field id on form: {0}")]
    DuplicateFieldId(String),

    #[error("variable name already used on form: {0}")]
    DuplicateVariable(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
