use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Body measurements, with BMI and waist-to-hip ratio derived.
pub struct Anthropometrie;

impl BuiltInTheme for Anthropometrie {
    fn name(&self) -> &str {
        "Anthropométrie"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::Number, "Poids", "POIDS")
                    .required()
                    .with_unit("kg"),
                FieldTemplate::new(FieldType::Number, "Taille", "TAILLE")
                    .required()
                    .with_unit("cm"),
                FieldTemplate::new(FieldType::Computed, "Indice de masse corporelle", "IMC")
                    .with_unit("CALCULE:POIDS/((TAILLE/100)^2)|POIDS,TAILLE"),
                FieldTemplate::new(FieldType::Number, "Tour de taille", "TOUR_TAILLE")
                    .with_unit("cm"),
                FieldTemplate::new(FieldType::Number, "Tour de hanches", "TOUR_HANCHES")
                    .with_unit("cm"),
                FieldTemplate::new(FieldType::Computed, "Rapport taille/hanches", "RTH")
                    .with_unit("CALCULE:TOUR_TAILLE/TOUR_HANCHES|TOUR_TAILLE,TOUR_HANCHES"),
            ]
        });
        &FIELDS
    }
}
