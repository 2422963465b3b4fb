use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::error::FactError;
pub use domain::models::*;
pub use services::fact_file::{digest, read_fact_file, render};
pub use services::metadata::{
    document_keys, into_metadata, params_from_args, render_document, validate,
};
pub use services::output::{print_json, print_one};
pub use services::platform::{facts_from_args, resolve, target_path};
pub use services::storage::{audit, load_config};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    commands::handle_fact_commands(cli, &config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(err) = run(&cli) {
        let fact_err = err.downcast_ref::<FactError>();
        let code = fact_err.map(FactError::exit_code).unwrap_or(EXIT_FAILURE);
        if cli.json {
            let out = JsonErr {
                ok: false,
                error: ErrorBody {
                    kind: fact_err.map(FactError::kind).unwrap_or("error").to_string(),
                    message: format!("{:#}", err),
                },
            };
            if print_json(&out).is_err() {
                eprintln!("error: {:#}", err);
            }
        } else {
            eprintln!("error: {:#}", err);
        }
        std::process::exit(code);
    }
}
