use std::collections::HashMap;

use cohorte_core::models::form::Form;
use cohorte_core::models::response::{FieldBindings, ResponseValues};
use tracing::debug;

use crate::ast::Formula;
use crate::error::FormulaError;
use crate::spec::parse_spec;

/// Decimal places shown for computed values unless a caller asks otherwise.
pub const DEFAULT_DECIMALS: usize = 2;

/// Evaluate `formula` with variables bound to `values`.
///
/// Returns `None` when any supplied value is NaN, when the formula does not
/// parse or refers to a variable absent from `values`, and when the result
/// is not finite. Variables are matched as whole identifiers.
pub fn evaluate(formula: &str, values: &HashMap<String, f64>) -> Option<f64> {
    if let Some((name, _)) = values.iter().find(|(_, v)| v.is_nan()) {
        debug!(formula, variable = %name, "computation withheld: value is not a number");
        return None;
    }

    match Formula::parse(formula).and_then(|f| f.eval(values)) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(formula, error = %e, "formula evaluation failed");
            None
        }
    }
}

/// Compute the value of a computed field from the current responses.
///
/// `unit` is the field's encoded spec. Each required variable is looked up
/// by scanning `responses` in entry order for the first field bound to that
/// variable name. A required variable with no response, or with a value
/// that does not start with a number, leaves the field blank.
pub fn calculate_field_value(
    unit: &str,
    responses: &ResponseValues,
    bindings: &FieldBindings,
) -> Option<f64> {
    let spec = parse_spec(unit)?;

    let mut values = HashMap::with_capacity(spec.required_fields.len());
    for variable in &spec.required_fields {
        match resolve_variable(variable, responses, bindings) {
            Ok(value) => {
                values.insert(variable.clone(), value);
            }
            Err(e) => {
                debug!(variable = %variable, error = %e, "computed field left blank");
                return None;
            }
        }
    }

    evaluate(&spec.formula, &values)
}

fn resolve_variable(
    variable: &str,
    responses: &ResponseValues,
    bindings: &FieldBindings,
) -> Result<f64, FormulaError> {
    let raw = responses
        .iter()
        .find(|(field_id, _)| bindings.get(*field_id).is_some_and(|v| v == variable))
        .map(|(_, raw)| raw)
        .ok_or_else(|| FormulaError::UnknownVariable(variable.to_string()))?;

    parse_leading_float(raw).ok_or_else(|| FormulaError::NotANumber(variable.to_string()))
}

/// Parse the longest decimal number at the start of `raw`, ignoring leading
/// whitespace and any trailing text: `"70 kg"` is 70, `"1,75"` is 1.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Fractional digits needed to write any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Fixed-point rendering of a computed value; blank when there is none.
///
/// Values exactly halfway between two renderings round away from zero
/// (`1.125` shows as `1.13`). Values that only look like ties in decimal,
/// such as `1.005`, round by their exact binary value.
pub fn format_calculated_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => to_fixed(v, decimals),
        None => String::new(),
    }
}

fn to_fixed(value: f64, decimals: usize) -> String {
    // -0.0 renders without a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    let rounded = format!("{value:.decimals$}");
    if !value.is_finite() || decimals >= EXACT_DIGITS {
        return rounded;
    }

    // `format!` is exact at this precision, so the digits past `decimals`
    // tell whether the value sits on a tie.
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some(point) = exact.find('.') else {
        return rounded;
    };
    let cut = point + 1 + decimals;
    let tail = &exact.as_bytes()[cut..];
    if tail.first() != Some(&b'5') || tail[1..].iter().any(|&b| b != b'0') {
        return rounded;
    }

    let mut digits: Vec<u8> = exact.as_bytes()[..cut]
        .iter()
        .copied()
        .filter(|&b| b != b'.')
        .collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, &digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(digit));
    }
    out
}

pub fn format_default(value: Option<f64>) -> String {
    format_calculated_value(value, DEFAULT_DECIMALS)
}

/// Current value of one computed field on a form.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedValue {
    pub field_id: String,
    pub value: Option<f64>,
    pub display: String,
}

/// Recompute every computed field of `form` from the current responses.
///
/// Pure and cheap enough to run on every keystroke. Computed values are not
/// fed back into `responses`, so a formula that references another computed
/// field only sees what was entered for it.
pub fn recompute_computed_fields(form: &Form, responses: &ResponseValues) -> Vec<ComputedValue> {
    let bindings = form.bindings();
    form.computed_fields()
        .map(|field| {
            let value = field
                .template
                .unit
                .as_deref()
                .and_then(|unit| calculate_field_value(unit, responses, &bindings));
            ComputedValue {
                field_id: field.id.clone(),
                value,
                display: format_default(value),
            }
        })
        .collect()
}
