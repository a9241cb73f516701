use clap::Parser;
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vaultenv_core::{export_secrets, parse_secret_references};

mod cli_args;
mod modules;

use crate::cli_args::Cli;
use crate::modules::config::{resolve_inputs, ActionInputs};
use crate::modules::host::ActionsHost;
use crate::modules::vault::{build_client, VaultClient};

const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let runner_debug = std::env::var(RUNNER_DEBUG_ENV).is_ok_and(|value| value.trim() == "1");
    init_logging(cli.verbose, runner_debug)?;

    let mut host = ActionsHost::new(std::io::stdout(), cli.env_file.clone());
    if let Err(err) = run(&cli, &mut host).await {
        if let Err(report_err) = host.fail(&format!("{err:#}")) {
            warn!("failed to report error to the runner: {report_err}");
        }
        return Err(err);
    }
    Ok(())
}

/// Resolves inputs and parses every reference before the first request, then
/// exports the secrets in order.
pub(crate) async fn run<W: Write>(cli: &Cli, host: &mut ActionsHost<W>) -> anyhow::Result<()> {
    let ActionInputs { settings, secrets } = resolve_inputs(cli)?;
    let references = parse_secret_references(&secrets)?;
    info!(count = references.len(), url = %settings.url, "parsed secret references");

    let client = build_client(&settings)?;
    let source = VaultClient::new(client, &settings)?;
    let summary = export_secrets(&source, host, &references, settings.mode).await?;
    info!(
        exported = summary.exported,
        missing = summary.missing,
        "secrets exported"
    );
    Ok(())
}

fn init_logging(verbosity: u8, runner_debug: bool) -> anyhow::Result<()> {
    let filter = match (verbosity, runner_debug) {
        (_, true) => "debug",
        (0, false) => "warn",
        (1, false) => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
