use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Patient identity and socio-demographic context.
pub struct Demographie;

impl BuiltInTheme for Demographie {
    fn name(&self) -> &str {
        "Données Démographiques"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::Date, "Date de naissance", "DATE_NAISSANCE")
                    .required(),
                FieldTemplate::new(FieldType::Number, "Âge", "AGE").with_unit("ans"),
                FieldTemplate::new(FieldType::SingleChoice, "Sexe", "SEXE")
                    .required()
                    .with_options(&["Homme", "Femme", "Autre"]),
                FieldTemplate::new(FieldType::SingleChoice, "Situation familiale", "SITUATION")
                    .with_options(&["Célibataire", "En couple", "Veuf(ve)", "Divorcé(e)"]),
                FieldTemplate::new(FieldType::Text, "Profession", "PROFESSION"),
                FieldTemplate::new(FieldType::Text, "Commune de résidence", "COMMUNE"),
            ]
        });
        &FIELDS
    }
}
