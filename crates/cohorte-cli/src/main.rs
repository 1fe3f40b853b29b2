use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cohorte", about = "Form engine tooling: theme catalog and computed fields")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the theme catalog, merged with the server's custom questions.
    Catalog {
        /// Bearer token; without one only the built-in catalog is printed.
        #[arg(long, env = "COHORTE_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Only print this theme.
        #[arg(long)]
        theme: Option<String>,
    },
    /// Check the computed fields of the built-in catalog.
    Check,
    /// Evaluate a formula, e.g. `eval "POIDS/((TAILLE/100)^2)" POIDS=70 TAILLE=175`.
    Eval {
        formula: String,
        #[arg(value_parser = commands::parse_assignment)]
        values: Vec<(String, String)>,
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
    /// Compute a field from its encoded unit, e.g. `calc "CALCULE:A*2|A" A=3`.
    Calc {
        unit: String,
        #[arg(value_parser = commands::parse_assignment)]
        values: Vec<(String, String)>,
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
    /// Create a custom question.
    Add {
        #[arg(long, env = "COHORTE_TOKEN", hide_env_values = true)]
        token: String,
        #[arg(long)]
        theme: String,
        #[arg(long)]
        label: String,
        /// text, number, date, single-choice, multi-choice or computed.
        #[arg(long = "type")]
        field_type: String,
        #[arg(long)]
        variable: String,
        /// Repeat for each option of a choice question.
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Delete a custom question by id.
    Delete {
        #[arg(long, env = "COHORTE_TOKEN", hide_env_values = true)]
        token: String,
        id: i64,
    },
    /// Show or write the backend configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Save {
        #[arg(long)]
        base_url: String,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json);

    match cli.command {
        Command::Catalog { token, theme } => commands::catalog(token, theme.as_deref()).await,
        Command::Check => commands::check(),
        Command::Eval {
            formula,
            values,
            decimals,
        } => commands::eval(&formula, &values, decimals),
        Command::Calc {
            unit,
            values,
            decimals,
        } => commands::calc(&unit, &values, decimals),
        Command::Add {
            token,
            theme,
            label,
            field_type,
            variable,
            options,
        } => commands::add(token, theme, label, &field_type, variable, options).await,
        Command::Delete { token, id } => commands::delete(token, id).await,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_config(),
            ConfigAction::Save {
                base_url,
                timeout_secs,
            } => commands::save_config(base_url, timeout_secs),
        },
    }
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
