use cohorte_core::api_paths;
use cohorte_core::error::CoreError;
use cohorte_core::models::field::{FieldTemplate, FieldType};
use cohorte_core::models::question::{CustomQuestion, NewCustomQuestion};
use cohorte_core::models::response::ResponseValues;
use cohorte_core::models::theme::Theme;

fn question(options: Option<&str>) -> CustomQuestion {
    CustomQuestion {
        id: 12,
        label: "Tabagisme".to_string(),
        field_type: FieldType::SingleChoice,
        variable_name: "TABAC".to_string(),
        options: options.map(str::to_string),
        theme_name: "Habitudes de vie".to_string(),
    }
}

#[test]
fn field_types_use_kebab_case_wire_names() {
    let json = serde_json::to_string(&FieldType::MultiChoice).unwrap();
    assert_eq!(json, "\"multi-choice\"");
    assert_eq!("single-choice".parse::<FieldType>().unwrap(), FieldType::SingleChoice);
    assert!(matches!(
        "checkbox".parse::<FieldType>(),
        Err(CoreError::UnknownFieldType(t)) if t == "checkbox"
    ));
}

#[test]
fn custom_question_decodes_backend_shape() {
    let raw = r#"{
        "id": 4,
        "label": "Fumeur",
        "type": "single-choice",
        "nomVariable": "FUMEUR",
        "options": "[\"Oui\",\"Non\"]",
        "themeNom": "Cardio-Vasculaire"
    }"#;

    let q: CustomQuestion = serde_json::from_str(raw).unwrap();
    assert_eq!(q.variable_name, "FUMEUR");
    assert_eq!(q.theme_name, "Cardio-Vasculaire");

    let template = q.to_template().unwrap();
    assert!(template.is_custom);
    assert_eq!(template.source_id, Some(4));
    assert_eq!(
        template.options,
        Some(vec!["Oui".to_string(), "Non".to_string()])
    );
}

#[test]
fn missing_or_empty_options_decode_to_none() {
    assert_eq!(question(None).decode_options().unwrap(), None);
    assert_eq!(question(Some("")).decode_options().unwrap(), None);
}

#[test]
fn malformed_options_are_an_error() {
    let err = question(Some("Oui,Non")).decode_options().unwrap_err();
    assert!(matches!(err, CoreError::MalformedOptions { question_id: 12, .. }));
}

#[test]
fn payload_encodes_options_as_json_string() {
    let new = NewCustomQuestion {
        theme_name: "Respiratoire".to_string(),
        label: "Toux".to_string(),
        field_type: FieldType::SingleChoice,
        variable_name: " TOUX ".to_string(),
        options: Some(vec!["Oui".to_string(), "Non".to_string()]),
    };

    let payload = new.to_payload().unwrap();
    assert_eq!(payload.variable_name, "TOUX");
    assert_eq!(payload.options.as_deref(), Some("[\"Oui\",\"Non\"]"));

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["nomVariable"], "TOUX");
    assert_eq!(json["themeNom"], "Respiratoire");
}

#[test]
fn payload_drops_options_for_non_choice_fields() {
    let new = NewCustomQuestion {
        theme_name: "Respiratoire".to_string(),
        label: "DEP".to_string(),
        field_type: FieldType::Number,
        variable_name: "DEP".to_string(),
        options: Some(vec!["ignored".to_string()]),
    };
    assert_eq!(new.to_payload().unwrap().options, None);
}

#[test]
fn payload_requires_a_variable_name() {
    let new = NewCustomQuestion {
        theme_name: "Respiratoire".to_string(),
        label: "DEP".to_string(),
        field_type: FieldType::Number,
        variable_name: "  ".to_string(),
        options: None,
    };
    assert!(matches!(new.to_payload(), Err(CoreError::MissingField(_))));
}

#[test]
fn theme_lists_built_in_then_custom_fields() {
    let mut theme = Theme::new(
        "Anthropométrie",
        vec![FieldTemplate::new(FieldType::Number, "Poids", "POIDS")],
    );
    theme
        .custom
        .push(FieldTemplate::new(FieldType::Number, "Tour de cou", "COU"));

    let names: Vec<_> = theme.fields().map(|f| f.variable_name.as_str()).collect();
    assert_eq!(names, ["POIDS", "COU"]);
    assert_eq!(theme.field_count(), 2);
    assert!(theme.find_field("COU").is_some());
}

#[test]
fn response_values_keep_insertion_order_on_overwrite() {
    let mut values = ResponseValues::new();
    values.set("f1", "70");
    values.set("f2", "175");
    values.set("f1", "72");

    let entries: Vec<_> = values.iter().collect();
    assert_eq!(entries, [("f1", "72"), ("f2", "175")]);
    assert_eq!(values.remove("f1").as_deref(), Some("72"));
    assert_eq!(values.len(), 1);
}

#[test]
fn api_paths_join_base_url() {
    assert_eq!(
        api_paths::custom_questions("https://api.example.org/"),
        "https://api.example.org/custom-questions"
    );
    assert_eq!(
        api_paths::custom_question("https://api.example.org", 7),
        "https://api.example.org/custom-questions/7"
    );
}
