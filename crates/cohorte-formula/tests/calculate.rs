use cohorte_core::models::field::{FieldTemplate, FieldType};
use cohorte_core::models::form::Form;
use cohorte_core::models::response::{FieldBindings, ResponseValues};
use cohorte_formula::calculate::parse_leading_float;
use cohorte_formula::{
    calculate_field_value, format_calculated_value, format_default, recompute_computed_fields,
};

const BMI_UNIT: &str = "CALCULE:POIDS/((TAILLE/100)^2)|POIDS,TAILLE";

fn bindings(pairs: &[(&str, &str)]) -> FieldBindings {
    pairs
        .iter()
        .map(|(id, var)| (id.to_string(), var.to_string()))
        .collect()
}

#[test]
fn calculates_from_bound_responses() {
    let responses: ResponseValues = [("f1", "70"), ("f2", "175")].into_iter().collect();
    let map = bindings(&[("f1", "POIDS"), ("f2", "TAILLE")]);

    let value = calculate_field_value(BMI_UNIT, &responses, &map);
    assert_eq!(format_default(value), "22.86");
}

#[test]
fn missing_required_variable_leaves_field_blank() {
    let responses: ResponseValues = [("f1", "70")].into_iter().collect();
    let map = bindings(&[("f1", "POIDS"), ("f2", "TAILLE")]);

    assert_eq!(calculate_field_value(BMI_UNIT, &responses, &map), None);
}

#[test]
fn unbound_response_is_ignored() {
    let responses: ResponseValues = [("f1", "70"), ("orphan", "175")].into_iter().collect();
    let map = bindings(&[("f1", "POIDS")]);

    assert_eq!(calculate_field_value(BMI_UNIT, &responses, &map), None);
}

#[test]
fn unparsable_value_leaves_field_blank() {
    let responses: ResponseValues = [("f1", "soixante-dix"), ("f2", "175")].into_iter().collect();
    let map = bindings(&[("f1", "POIDS"), ("f2", "TAILLE")]);

    assert_eq!(calculate_field_value(BMI_UNIT, &responses, &map), None);
}

#[test]
fn first_entered_response_wins_for_shared_variable() {
    let responses: ResponseValues = [("a", "2"), ("b", "3")].into_iter().collect();
    let map = bindings(&[("a", "X"), ("b", "X")]);

    assert_eq!(calculate_field_value("CALCULE:X*10|X", &responses, &map), Some(20.0));
}

#[test]
fn non_spec_unit_is_not_computed() {
    let responses: ResponseValues = [("f1", "70")].into_iter().collect();
    let map = bindings(&[("f1", "POIDS")]);

    assert_eq!(calculate_field_value("kg", &responses, &map), None);
}

#[test]
fn leading_float_parse_matches_lenient_input() {
    assert_eq!(parse_leading_float("70"), Some(70.0));
    assert_eq!(parse_leading_float("  70 kg"), Some(70.0));
    assert_eq!(parse_leading_float("1,75"), Some(1.0));
    assert_eq!(parse_leading_float("-.5"), Some(-0.5));
    assert_eq!(parse_leading_float("1.5e2cm"), Some(150.0));
    assert_eq!(parse_leading_float("2e"), Some(2.0));
    assert_eq!(parse_leading_float("abc"), None);
    assert_eq!(parse_leading_float(""), None);
    assert_eq!(parse_leading_float("-"), None);
    assert_eq!(parse_leading_float("."), None);
}

#[test]
fn formatting() {
    assert_eq!(format_calculated_value(None, 2), "");
    assert_eq!(format_calculated_value(Some(3.0), 0), "3");
    assert_eq!(format_calculated_value(Some(1.23456), 3), "1.235");
    assert_eq!(format_default(Some(22.857142857142858)), "22.86");
    assert_eq!(format_calculated_value(Some(-0.0), 1), "0.0");
}

#[test]
fn exact_halves_round_away_from_zero() {
    assert_eq!(format_default(Some(22.625)), "22.63");
    assert_eq!(format_default(Some(0.125)), "0.13");
    assert_eq!(format_default(Some(-0.125)), "-0.13");
    assert_eq!(format_calculated_value(Some(2.5), 0), "3");
    assert_eq!(format_calculated_value(Some(99.5), 0), "100");
    assert_eq!(format_calculated_value(Some(9.995), 2), "9.99");
    // 1.005 is stored just below the halfway point.
    assert_eq!(format_default(Some(1.005)), "1.00");
}

#[test]
fn waist_to_hip_ratio_on_a_tie_rounds_up() {
    let unit = "CALCULE:TOUR_TAILLE/TOUR_HANCHES|TOUR_TAILLE,TOUR_HANCHES";
    let responses: ResponseValues = [("f1", "90"), ("f2", "80")].into_iter().collect();
    let map = bindings(&[("f1", "TOUR_TAILLE"), ("f2", "TOUR_HANCHES")]);

    let value = calculate_field_value(unit, &responses, &map);
    assert_eq!(value, Some(1.125));
    assert_eq!(format_default(value), "1.13");
}

#[test]
fn recompute_reports_every_computed_field() {
    let mut form = Form::new("Suivi");
    form.add_field("poids", FieldTemplate::new(FieldType::Number, "Poids", "POIDS"))
        .unwrap();
    form.add_field("taille", FieldTemplate::new(FieldType::Number, "Taille", "TAILLE"))
        .unwrap();
    form.add_field(
        "imc",
        FieldTemplate::new(FieldType::Computed, "IMC", "IMC").with_unit(BMI_UNIT),
    )
    .unwrap();
    form.add_field(
        "sans_formule",
        FieldTemplate::new(FieldType::Computed, "Score", "SCORE"),
    )
    .unwrap();

    let mut responses = ResponseValues::new();
    responses.set("poids", "70");

    let before = recompute_computed_fields(&form, &responses);
    assert_eq!(before.len(), 2);
    assert!(before.iter().all(|c| c.value.is_none() && c.display.is_empty()));

    responses.set("taille", "175");
    let after = recompute_computed_fields(&form, &responses);
    assert_eq!(after[0].field_id, "imc");
    assert_eq!(after[0].display, "22.86");
    assert_eq!(after[1].value, None);
}
