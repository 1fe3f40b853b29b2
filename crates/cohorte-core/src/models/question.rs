use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::field::{FieldTemplate, FieldType};

/// Server-assigned identifier of a custom question.
pub type QuestionId = i64;

/// A user-authored question persisted by the backend.
///
/// The client never edits one in place: questions are only created or
/// deleted. `options` is stored server-side as a JSON-encoded list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomQuestion {
    #[ts(type = "number")]
    pub id: QuestionId,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(rename = "nomVariable")]
    pub variable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(rename = "themeNom")]
    pub theme_name: String,
}

impl CustomQuestion {
    /// Decode the serialized option list. An absent or empty payload means
    /// the question has no options.
    pub fn decode_options(&self) -> Result<Option<Vec<String>>, CoreError> {
        match self.options.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| CoreError::MalformedOptions {
                    question_id: self.id,
                    source,
                }),
        }
    }

    /// Convert into a custom field template for the form builder.
    pub fn to_template(&self) -> Result<FieldTemplate, CoreError> {
        Ok(FieldTemplate {
            field_type: self.field_type,
            label: self.label.clone(),
            variable_name: self.variable_name.clone(),
            required: false,
            options: self.decode_options()?,
            unit: None,
            source_id: Some(self.id),
            is_custom: true,
        })
    }
}

/// A question about to be created. Options are kept decoded here and
/// serialized only when building the request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCustomQuestion {
    pub theme_name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub variable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Wire body of the add-question request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomQuestionPayload {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(rename = "nomVariable")]
    pub variable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(rename = "themeNom")]
    pub theme_name: String,
}

impl NewCustomQuestion {
    pub fn to_payload(&self) -> Result<CustomQuestionPayload, CoreError> {
        if self.variable_name.trim().is_empty() {
            return Err(CoreError::MissingField("variable_name".to_string()));
        }
        if self.theme_name.trim().is_empty() {
            return Err(CoreError::MissingField("theme_name".to_string()));
        }

        let options = match &self.options {
            Some(list) if self.field_type.is_choice() => Some(serde_json::to_string(list)?),
            _ => None,
        };

        Ok(CustomQuestionPayload {
            label: self.label.clone(),
            field_type: self.field_type,
            variable_name: self.variable_name.trim().to_string(),
            options,
            theme_name: self.theme_name.clone(),
        })
    }
}
