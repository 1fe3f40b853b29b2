use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw input of one in-progress form fill, keyed by field id.
///
/// Entries keep their insertion order: when several fields map to the same
/// variable name, the earliest entered one wins during formula resolution.
/// Overwriting a field keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseValues {
    entries: Vec<(String, String)>,
}

impl ResponseValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field_id: &str, value: &str) {
        match self.entries.iter_mut().find(|(id, _)| id == field_id) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .entries
                .push((field_id.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, field_id: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(id, _)| id == field_id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ResponseValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ResponseValues::new();
        for (k, v) in iter {
            values.set(k.as_ref(), v.as_ref());
        }
        values
    }
}

/// Maps a form's field ids to the variable names formulas refer to.
pub type FieldBindings = HashMap<String, String>;
