use cohorte_formula::error::FormulaError;
use cohorte_formula::spec::SpecIssue;
use cohorte_formula::{encode_spec, parse_spec, validate_spec, ComputedFieldSpec};

#[test]
fn parses_bmi_spec() {
    let spec = parse_spec("CALCULE:POIDS/(TAILLE^2)|POIDS,TAILLE").unwrap();
    assert_eq!(spec.formula, "POIDS/(TAILLE^2)");
    assert_eq!(spec.required_fields, ["POIDS", "TAILLE"]);
}

#[test]
fn required_names_are_trimmed() {
    let spec = parse_spec("CALCULE:A+B| A ,  B ").unwrap();
    assert_eq!(spec.required_fields, ["A", "B"]);
}

#[test]
fn rejects_strings_without_prefix() {
    assert_eq!(parse_spec("plain text"), None);
    assert_eq!(parse_spec(""), None);
    assert_eq!(parse_spec("kg"), None);
    assert_eq!(parse_spec("calcule:A|A"), None);
}

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(parse_spec("CALCULE:A|B|C"), None);
    assert_eq!(parse_spec("CALCULE:A+B"), None);
}

#[test]
fn encode_produces_the_wire_format() {
    let unit = encode_spec("POIDS/((TAILLE/100)^2)", &["POIDS", "TAILLE"]);
    assert_eq!(unit, "CALCULE:POIDS/((TAILLE/100)^2)|POIDS,TAILLE");
    assert_eq!(parse_spec(&unit).unwrap().encode(), unit);
}

#[test]
fn referenced_variables_are_whole_identifiers() {
    let spec = ComputedFieldSpec {
        formula: "POIDS2 - POIDS".to_string(),
        required_fields: vec!["POIDS".to_string(), "POIDS2".to_string()],
    };
    assert_eq!(spec.referenced_variables().unwrap(), ["POIDS", "POIDS2"]);
}

#[test]
fn validation_accepts_a_well_formed_field() {
    let spec = parse_spec("CALCULE:POIDS/((TAILLE/100)^2)|POIDS,TAILLE").unwrap();
    assert!(validate_spec(&spec, "IMC").is_empty());
}

#[test]
fn validation_reports_undeclared_unused_and_self_references() {
    let spec = parse_spec("CALCULE:POIDS/TAILLE + IMC|POIDS,AGE").unwrap();
    let issues = validate_spec(&spec, "IMC");

    assert!(issues.contains(&SpecIssue::SelfReference("IMC".to_string())));
    assert!(issues.contains(&SpecIssue::UndeclaredVariable("TAILLE".to_string())));
    assert!(issues.contains(&SpecIssue::UnusedVariable("AGE".to_string())));
}

#[test]
fn validation_reports_unparsable_formulas() {
    let spec = parse_spec("CALCULE:POIDS/|POIDS").unwrap();
    assert_eq!(
        validate_spec(&spec, "X"),
        [SpecIssue::InvalidFormula(FormulaError::UnexpectedEnd)]
    );
}

#[test]
fn spec_serializes_for_the_frontend() {
    let spec = parse_spec("CALCULE:A*2|A").unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["formula"], "A*2");
    assert_eq!(json["requiredFields"][0], "A");
}
