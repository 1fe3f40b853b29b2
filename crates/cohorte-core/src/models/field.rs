use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::question::QuestionId;

/// The kind of input a field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FieldType {
    Text,
    Number,
    Date,
    SingleChoice,
    MultiChoice,
    /// Derived from other fields through a `CALCULE:` formula in the unit.
    Computed,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::SingleChoice => "single-choice",
            FieldType::MultiChoice => "multi-choice",
            FieldType::Computed => "computed",
        }
    }

    /// Whether the field picks from a fixed list of options.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::SingleChoice | FieldType::MultiChoice)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "single-choice" => Ok(FieldType::SingleChoice),
            "multi-choice" => Ok(FieldType::MultiChoice),
            "computed" => Ok(FieldType::Computed),
            other => Err(CoreError::UnknownFieldType(other.to_string())),
        }
    }
}

/// A reusable question definition, not yet bound to a form response.
///
/// Built-in templates come from the static theme catalog; custom ones are
/// converted from server-side [`CustomQuestion`](super::question::CustomQuestion)s
/// and carry their `source_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldTemplate {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    /// Symbolic name used to reference this field from formulas.
    pub variable_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Display unit ("kg") or, for computed fields, the encoded formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | null")]
    pub source_id: Option<QuestionId>,
    #[serde(default)]
    pub is_custom: bool,
}

impl FieldTemplate {
    pub fn new(field_type: FieldType, label: &str, variable_name: &str) -> Self {
        Self {
            field_type,
            label: label.to_string(),
            variable_name: variable_name.to_string(),
            required: false,
            options: None,
            unit: None,
            source_id: None,
            is_custom: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn is_computed(&self) -> bool {
        self.field_type == FieldType::Computed
    }
}
