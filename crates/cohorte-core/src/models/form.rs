use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::field::FieldTemplate;
use crate::models::response::FieldBindings;

/// A field template placed on a form under a form-local id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormField {
    pub id: String,
    #[serde(flatten)]
    pub template: FieldTemplate,
}

/// A form composed in the builder from theme field templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            fields: Vec::new(),
        }
    }

    /// Place a template on the form. Field ids and variable names must both
    /// be unique within one form, since formulas resolve by variable name.
    pub fn add_field(&mut self, id: &str, template: FieldTemplate) -> Result<(), CoreError> {
        if self.fields.iter().any(|f| f.id == id) {
            return Err(CoreError::DuplicateFieldId(id.to_string()));
        }
        if self
            .fields
            .iter()
            .any(|f| f.template.variable_name == template.variable_name)
        {
            return Err(CoreError::DuplicateVariable(template.variable_name));
        }
        self.fields.push(FormField {
            id: id.to_string(),
            template,
        });
        Ok(())
    }

    pub fn remove_field(&mut self, id: &str) -> Option<FormField> {
        let pos = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(pos))
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn computed_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.template.is_computed())
    }

    /// Field id to variable name, as consumed by formula resolution.
    pub fn bindings(&self) -> FieldBindings {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.template.variable_name.clone()))
            .collect()
    }
}
