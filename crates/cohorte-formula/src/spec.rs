use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ast::Formula;
use crate::error::FormulaError;

/// Literal prefix marking a unit string as a computed-field formula.
pub const SPEC_PREFIX: &str = "CALCULE:";

const SEGMENT_SEPARATOR: char = '|';
const VARIABLE_SEPARATOR: char = ',';

/// Formula metadata decoded from a computed field's unit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComputedFieldSpec {
    pub formula: String,
    pub required_fields: Vec<String>,
}

impl ComputedFieldSpec {
    /// Variables the formula actually refers to, sorted.
    pub fn referenced_variables(&self) -> Result<Vec<String>, FormulaError> {
        let formula = Formula::parse(&self.formula)?;
        Ok(formula.variables().into_iter().map(str::to_string).collect())
    }

    pub fn encode(&self) -> String {
        let required: Vec<&str> = self.required_fields.iter().map(String::as_str).collect();
        encode_spec(&self.formula, &required)
    }
}

/// Decode `CALCULE:<formula>|<var1>,<var2>,...`.
///
/// Returns `None` for anything else: a missing prefix, or a remainder that
/// does not split into exactly two `|`-separated segments. Required variable
/// names are trimmed; empty entries are dropped.
pub fn parse_spec(unit: &str) -> Option<ComputedFieldSpec> {
    let body = unit.strip_prefix(SPEC_PREFIX)?;

    let mut segments = body.split(SEGMENT_SEPARATOR);
    let (formula, variables) = match (segments.next(), segments.next(), segments.next()) {
        (Some(formula), Some(variables), None) => (formula, variables),
        _ => return None,
    };

    let required_fields = variables
        .split(VARIABLE_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    Some(ComputedFieldSpec {
        formula: formula.to_string(),
        required_fields,
    })
}

/// Encode a formula and its required variables into a unit string.
pub fn encode_spec(formula: &str, required_fields: &[&str]) -> String {
    format!(
        "{SPEC_PREFIX}{formula}{SEGMENT_SEPARATOR}{}",
        required_fields.join(&VARIABLE_SEPARATOR.to_string())
    )
}

/// Authoring-time problem with a computed field definition.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecIssue {
    /// A computed field whose unit is not a `CALCULE:` spec.
    MissingSpec,
    /// The formula does not parse.
    InvalidFormula(FormulaError),
    /// Used in the formula but missing from the required list; the field
    /// would never produce a value.
    UndeclaredVariable(String),
    /// Listed as required but never used by the formula.
    UnusedVariable(String),
    /// The computed field depends on itself.
    SelfReference(String),
}

/// Check a spec for a computed field whose own variable is `own_variable`.
/// An empty result means the field is well formed.
pub fn validate_spec(spec: &ComputedFieldSpec, own_variable: &str) -> Vec<SpecIssue> {
    let referenced = match spec.referenced_variables() {
        Ok(vars) => vars,
        Err(e) => return vec![SpecIssue::InvalidFormula(e)],
    };

    let mut issues = Vec::new();
    if referenced.iter().any(|v| v == own_variable)
        || spec.required_fields.iter().any(|v| v == own_variable)
    {
        issues.push(SpecIssue::SelfReference(own_variable.to_string()));
    }
    for var in &referenced {
        if !spec.required_fields.contains(var) {
            issues.push(SpecIssue::UndeclaredVariable(var.clone()));
        }
    }
    for var in &spec.required_fields {
        if !referenced.contains(var) {
            issues.push(SpecIssue::UnusedVariable(var.clone()));
        }
    }
    issues
}
