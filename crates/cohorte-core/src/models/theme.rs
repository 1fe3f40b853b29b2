use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::field::FieldTemplate;

/// A named group of related field templates, e.g. "Cardio-Vasculaire".
///
/// Derived data: rebuilt from the static catalog whenever the custom
/// question set changes, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Theme {
    pub name: String,
    pub built_in: Vec<FieldTemplate>,
    #[serde(default)]
    pub custom: Vec<FieldTemplate>,
}

impl Theme {
    pub fn new(name: &str, built_in: Vec<FieldTemplate>) -> Self {
        Self {
            name: name.to_string(),
            built_in,
            custom: Vec::new(),
        }
    }

    /// Built-in templates followed by the merged custom ones.
    pub fn fields(&self) -> impl Iterator<Item = &FieldTemplate> {
        self.built_in.iter().chain(self.custom.iter())
    }

    pub fn field_count(&self) -> usize {
        self.built_in.len() + self.custom.len()
    }

    pub fn find_field(&self, variable_name: &str) -> Option<&FieldTemplate> {
        self.fields().find(|f| f.variable_name == variable_name)
    }
}
