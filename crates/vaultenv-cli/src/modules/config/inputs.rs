use thiserror::Error;
use vaultenv_core::LookupMode;

use super::types::{ActionInputs, ExportSettings};
use crate::cli_args::Cli;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean { name: &'static str, value: String },
}

pub(crate) fn resolve_inputs(cli: &Cli) -> Result<ActionInputs, ConfigError> {
    let url = required_input("url", cli.url.as_deref())?;
    let token = required_input("token", cli.token.as_deref())?;
    let secrets = required_input("secrets", cli.secrets.as_deref())?;
    let namespace = optional_input(cli.namespace.as_deref());
    let skip_tls_verification =
        parse_bool_input("skip_tls_verification", cli.skip_tls_verification.as_deref())?;
    let mode = if parse_bool_input("strict", cli.strict.as_deref())? {
        LookupMode::Strict
    } else {
        LookupMode::Lenient
    };

    Ok(ActionInputs {
        settings: ExportSettings {
            url,
            token,
            namespace,
            skip_tls_verification,
            mode,
        },
        secrets,
    })
}

fn required_input(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    optional_input(value).ok_or(ConfigError::MissingInput(name))
}

fn optional_input(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Blank or absent inputs read as `false`.
pub(crate) fn parse_bool_input(
    name: &'static str,
    value: Option<&str>,
) -> Result<bool, ConfigError> {
    match value.map(str::trim).unwrap_or_default() {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        other => Err(ConfigError::InvalidBoolean {
            name,
            value: other.to_string(),
        }),
    }
}
