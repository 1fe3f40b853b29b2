use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Blood pressure, heart rate and cardiovascular history.
/// Mean arterial pressure is derived as (PAS + 2 * PAD) / 3.
pub struct CardioVasculaire;

impl BuiltInTheme for CardioVasculaire {
    fn name(&self) -> &str {
        "Cardio-Vasculaire"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::Number, "Pression artérielle systolique", "PAS")
                    .required()
                    .with_unit("mmHg"),
                FieldTemplate::new(FieldType::Number, "Pression artérielle diastolique", "PAD")
                    .required()
                    .with_unit("mmHg"),
                FieldTemplate::new(FieldType::Computed, "Pression artérielle moyenne", "PAM")
                    .with_unit("CALCULE:(PAS + 2 * PAD) / 3|PAS,PAD"),
                FieldTemplate::new(FieldType::Number, "Fréquence cardiaque", "FC")
                    .with_unit("bpm"),
                FieldTemplate::new(FieldType::SingleChoice, "Hypertension artérielle", "HTA")
                    .with_options(&["Oui", "Non", "Inconnu"]),
                FieldTemplate::new(FieldType::MultiChoice, "Antécédents cardiaques", "ATCD_CARDIO")
                    .with_options(&[
                        "Infarctus du myocarde",
                        "Insuffisance cardiaque",
                        "Fibrillation atriale",
                        "AVC",
                        "Aucun",
                    ]),
            ]
        });
        &FIELDS
    }
}
