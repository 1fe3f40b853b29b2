use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Glycaemic and lipid panel. HOMA-IR expects fasting glucose in mmol/L
/// and insulin in µU/mL.
pub struct Metabolique;

impl BuiltInTheme for Metabolique {
    fn name(&self) -> &str {
        "Métabolique"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::Number, "Glycémie à jeun", "GLYCEMIE")
                    .with_unit("mmol/L"),
                FieldTemplate::new(FieldType::Number, "Insulinémie à jeun", "INSULINE")
                    .with_unit("µU/mL"),
                FieldTemplate::new(FieldType::Computed, "HOMA-IR", "HOMA_IR")
                    .with_unit("CALCULE:GLYCEMIE * INSULINE / 22.5|GLYCEMIE,INSULINE"),
                FieldTemplate::new(FieldType::Number, "HbA1c", "HBA1C").with_unit("%"),
                FieldTemplate::new(FieldType::Number, "Cholestérol total", "CHOL_TOTAL")
                    .with_unit("g/L"),
                FieldTemplate::new(FieldType::SingleChoice, "Diabète", "DIABETE")
                    .with_options(&["Non", "Type 1", "Type 2", "Gestationnel"]),
            ]
        });
        &FIELDS
    }
}
