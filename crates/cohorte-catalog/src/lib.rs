//! cohorte-catalog
//!
//! The built-in catalog of medical question themes, and the merge that
//! appends user-authored custom questions to it. Pure data, no network.

pub mod error;
pub mod merge;
pub mod themes;

use cohorte_core::models::field::FieldTemplate;
use cohorte_core::models::theme::Theme;
use cohorte_formula::spec::{parse_spec, validate_spec, SpecIssue};

/// A theme shipped with the application.
pub trait BuiltInTheme: Send + Sync {
    /// Display name, also the key custom questions attach to
    /// (e.g. "Cardio-Vasculaire").
    fn name(&self) -> &str;

    /// Static field templates, in display order.
    fn fields(&self) -> &[FieldTemplate];

    fn to_theme(&self) -> Theme {
        Theme::new(self.name(), self.fields().to_vec())
    }

    /// Authoring problems in this theme's computed fields, keyed by the
    /// computed field's variable name.
    fn computed_field_issues(&self) -> Vec<(String, Vec<SpecIssue>)> {
        self.fields()
            .iter()
            .filter(|f| f.is_computed())
            .filter_map(|f| {
                let issues = match f.unit.as_deref().and_then(parse_spec) {
                    Some(spec) => validate_spec(&spec, &f.variable_name),
                    None => vec![SpecIssue::MissingSpec],
                };
                (!issues.is_empty()).then(|| (f.variable_name.clone(), issues))
            })
            .collect()
    }
}

/// Return all built-in themes, in display order.
pub fn all_themes() -> Vec<Box<dyn BuiltInTheme>> {
    vec![
        Box::new(themes::demographie::Demographie),
        Box::new(themes::anthropometrie::Anthropometrie),
        Box::new(themes::cardio_vasculaire::CardioVasculaire),
        Box::new(themes::respiratoire::Respiratoire),
        Box::new(themes::metabolique::Metabolique),
        Box::new(themes::habitudes_de_vie::HabitudesDeVie),
    ]
}

/// Look up a built-in theme by name.
pub fn get_theme(name: &str) -> Option<Box<dyn BuiltInTheme>> {
    all_themes().into_iter().find(|t| t.name() == name)
}

/// The static catalog as plain themes with no custom questions.
pub fn static_catalog() -> Vec<Theme> {
    all_themes().iter().map(|t| t.to_theme()).collect()
}

/// Find a field template by variable name across a catalog. Variable names
/// are only unique within a theme, so the first theme in order wins.
pub fn find_field<'a>(
    catalog: &'a [Theme],
    variable_name: &str,
) -> Option<(&'a Theme, &'a FieldTemplate)> {
    catalog
        .iter()
        .find_map(|theme| theme.find_field(variable_name).map(|f| (theme, f)))
}
