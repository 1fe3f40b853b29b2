use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Spirometry and respiratory symptoms. Tiffeneau index = VEMS / CVF in %.
pub struct Respiratoire;

impl BuiltInTheme for Respiratoire {
    fn name(&self) -> &str {
        "Respiratoire"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::Number, "Saturation en oxygène", "SPO2")
                    .with_unit("%"),
                FieldTemplate::new(FieldType::Number, "Fréquence respiratoire", "FR")
                    .with_unit("/min"),
                FieldTemplate::new(FieldType::Number, "VEMS", "VEMS").with_unit("L"),
                FieldTemplate::new(FieldType::Number, "Capacité vitale forcée", "CVF")
                    .with_unit("L"),
                FieldTemplate::new(FieldType::Computed, "Indice de Tiffeneau", "TIFFENEAU")
                    .with_unit("CALCULE:VEMS / CVF * 100|VEMS,CVF"),
                FieldTemplate::new(FieldType::MultiChoice, "Symptômes", "SYMPTOMES_RESP")
                    .with_options(&["Toux", "Dyspnée", "Sifflements", "Expectorations"]),
            ]
        });
        &FIELDS
    }
}
