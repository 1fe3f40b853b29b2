use cohorte_core::models::field::{FieldTemplate, FieldType};

use crate::BuiltInTheme;

/// Tobacco, alcohol and physical activity.
pub struct HabitudesDeVie;

impl BuiltInTheme for HabitudesDeVie {
    fn name(&self) -> &str {
        "Habitudes de vie"
    }

    fn fields(&self) -> &[FieldTemplate] {
        static FIELDS: std::sync::LazyLock<Vec<FieldTemplate>> = std::sync::LazyLock::new(|| {
            vec![
                FieldTemplate::new(FieldType::SingleChoice, "Statut tabagique", "TABAC")
                    .with_options(&["Non-fumeur", "Ancien fumeur", "Fumeur actif"]),
                FieldTemplate::new(FieldType::Number, "Cigarettes par jour", "CIGARETTES_JOUR"),
                FieldTemplate::new(FieldType::Number, "Années de tabagisme", "ANNEES_TABAC")
                    .with_unit("ans"),
                FieldTemplate::new(FieldType::Computed, "Paquets-années", "PAQUETS_ANNEES")
                    .with_unit("CALCULE:CIGARETTES_JOUR / 20 * ANNEES_TABAC|CIGARETTES_JOUR,ANNEES_TABAC"),
                FieldTemplate::new(FieldType::Number, "Consommation d'alcool", "ALCOOL")
                    .with_unit("verres/semaine"),
                FieldTemplate::new(FieldType::SingleChoice, "Activité physique", "ACTIVITE")
                    .with_options(&["Sédentaire", "Modérée", "Intense"]),
            ]
        });
        &FIELDS
    }
}
