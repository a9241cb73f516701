use async_trait::async_trait;

use crate::{FetchError, HostError, KvReadResponse};

/// Reads a secret from the secret server.
#[async_trait]
pub trait SecretSource: Send + Sync {
    async fn read_secret(&self, secret_path: &str) -> Result<KvReadResponse, FetchError>;
}

/// Registers a value with the host's log redaction.
pub trait Redactor {
    fn mask(&mut self, value: &str) -> Result<(), HostError>;
}

/// Makes a variable available to later steps of the host environment.
pub trait EnvWriter {
    fn set(&mut self, name: &str, value: &str) -> Result<(), HostError>;
}
