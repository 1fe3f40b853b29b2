use std::collections::HashMap;

use cohorte_api::client::HttpQuestionApi;
use cohorte_api::config::{self, ApiConfig};
use cohorte_api::notify::LogNotifier;
use cohorte_api::store::QuestionStore;
use cohorte_catalog::all_themes;
use cohorte_core::models::field::FieldType;
use cohorte_core::models::question::{NewCustomQuestion, QuestionId};
use cohorte_core::models::response::{FieldBindings, ResponseValues};
use cohorte_formula::calculate::parse_leading_float;
use cohorte_formula::{calculate_field_value, evaluate, format_calculated_value};
use eyre::{eyre, Result};

/// Parse a `NAME=VALUE` command-line argument.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

async fn open_store(token: Option<String>) -> Result<QuestionStore<HttpQuestionApi, LogNotifier>> {
    let config = config::load_config()?;
    tracing::debug!(base_url = %config.base_url, "using backend");

    let mut store = QuestionStore::new(HttpQuestionApi::new(&config), LogNotifier);
    if token.is_some() {
        store.set_token(token).await?;
    }
    Ok(store)
}

pub async fn catalog(token: Option<String>, theme: Option<&str>) -> Result<()> {
    let store = open_store(token).await?;

    let themes: Vec<_> = match theme {
        Some(name) => store.themes().iter().filter(|t| t.name == name).collect(),
        None => store.themes().iter().collect(),
    };
    if let (Some(name), true) = (theme, themes.is_empty()) {
        return Err(eyre!("no theme named '{name}'"));
    }

    println!("{}", serde_json::to_string_pretty(&themes)?);
    Ok(())
}

pub fn check() -> Result<()> {
    let mut problems = 0;
    for theme in all_themes() {
        for (variable, issues) in theme.computed_field_issues() {
            problems += issues.len();
            for issue in issues {
                println!("{} / {variable}: {issue:?}", theme.name());
            }
        }
    }

    if problems > 0 {
        return Err(eyre!("{problems} problem(s) in computed fields"));
    }
    println!("all computed fields are well formed");
    Ok(())
}

pub fn eval(formula: &str, values: &[(String, String)], decimals: usize) -> Result<()> {
    let values: HashMap<String, f64> = values
        .iter()
        .map(|(name, raw)| (name.clone(), parse_leading_float(raw).unwrap_or(f64::NAN)))
        .collect();

    print_value(evaluate(formula, &values), decimals);
    Ok(())
}

pub fn calc(unit: &str, values: &[(String, String)], decimals: usize) -> Result<()> {
    // Each variable is its own field id on this ad-hoc form.
    let responses: ResponseValues = values.iter().map(|(n, v)| (n, v)).collect();
    let bindings: FieldBindings = values
        .iter()
        .map(|(name, _)| (name.clone(), name.clone()))
        .collect();

    print_value(calculate_field_value(unit, &responses, &bindings), decimals);
    Ok(())
}

fn print_value(value: Option<f64>, decimals: usize) {
    match value {
        Some(_) => println!("{}", format_calculated_value(value, decimals)),
        None => println!("(no value)"),
    }
}

pub async fn add(
    token: String,
    theme: String,
    label: String,
    field_type: &str,
    variable: String,
    options: Vec<String>,
) -> Result<()> {
    let field_type: FieldType = field_type.parse()?;
    let question = NewCustomQuestion {
        theme_name: theme,
        label,
        field_type,
        variable_name: variable,
        options: (!options.is_empty()).then_some(options),
    };

    let mut store = open_store(Some(token)).await?;
    let created = store.add_question(&question).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}

pub async fn delete(token: String, id: QuestionId) -> Result<()> {
    let mut store = open_store(Some(token)).await?;
    store.delete_question(id).await?;
    println!("deleted custom question {id}");
    Ok(())
}

pub fn show_config() -> Result<()> {
    let config = config::load_config()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn save_config(base_url: String, timeout_secs: Option<u64>) -> Result<()> {
    let mut config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }
    let path = config::save_config(&config)?;
    println!("config written to {}", path.display());
    Ok(())
}
