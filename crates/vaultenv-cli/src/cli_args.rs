use std::path::PathBuf;

use clap::{ArgAction, Parser};

// Each option falls back to the `INPUT_*` variable the Actions runner sets
// for the matching action input.
#[derive(Parser)]
#[command(name = "vaultenv")]
#[command(about = "Export secrets from a Vault KV store as job environment variables")]
pub struct Cli {
    #[arg(long, env = "INPUT_URL", help = "Secret server base URL")]
    pub url: Option<String>,
    #[arg(
        long,
        env = "INPUT_TOKEN",
        hide_env_values = true,
        help = "Access token sent as X-Vault-Token"
    )]
    pub token: Option<String>,
    #[arg(long, env = "INPUT_NAMESPACE", help = "Value for X-Vault-Namespace")]
    pub namespace: Option<String>,
    #[arg(
        long,
        env = "INPUT_SKIP_TLS_VERIFICATION",
        help = "Accept invalid TLS certificates (true/false)"
    )]
    pub skip_tls_verification: Option<String>,
    #[arg(
        long,
        env = "INPUT_SECRETS",
        help = "Secrets to export: '<path> <key> [| NAME]' entries separated by ';'"
    )]
    pub secrets: Option<String>,
    #[arg(
        long,
        env = "INPUT_STRICT",
        help = "Fail when a key is missing instead of exporting 'undefined' (true/false)"
    )]
    pub strict: Option<String>,
    #[arg(long, env = "GITHUB_ENV", help = "File that receives exported variables")]
    pub env_file: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
