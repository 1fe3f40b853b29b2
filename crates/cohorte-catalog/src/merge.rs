use cohorte_core::models::question::CustomQuestion;
use cohorte_core::models::theme::Theme;
use tracing::debug;

use crate::error::CatalogError;

/// Append custom questions to the themes they name.
///
/// Each theme keeps its built-in templates and gets, in list order, the
/// templates converted from the questions whose `theme_name` matches. Themes
/// without custom questions come back equal to their static entry, and an
/// empty question list returns the static catalog as is.
///
/// A question whose options payload cannot be decoded fails the whole merge,
/// so the caller sees the bad record instead of a silently shorter list.
/// Questions naming a theme absent from the catalog are skipped.
pub fn merge_catalog(
    static_catalog: &[Theme],
    questions: &[CustomQuestion],
) -> Result<Vec<Theme>, CatalogError> {
    if questions.is_empty() {
        return Ok(static_catalog.to_vec());
    }

    let mut merged = static_catalog.to_vec();
    for question in questions {
        let Some(theme) = merged.iter_mut().find(|t| t.name == question.theme_name) else {
            debug!(
                question_id = question.id,
                theme = %question.theme_name,
                "custom question names an unknown theme, skipping"
            );
            continue;
        };

        let template = question
            .to_template()
            .map_err(|source| CatalogError::InvalidQuestion {
                question_id: question.id,
                source,
            })?;
        theme.custom.push(template);
    }

    Ok(merged)
}
