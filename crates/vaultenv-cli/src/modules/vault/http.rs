use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};
use vaultenv_core::{
    FetchError, KvReadResponse, SecretSource, KV_DATA_PREFIX, NAMESPACE_HEADER, TOKEN_HEADER,
};

use crate::modules::config::ExportSettings;

pub(crate) fn build_client(settings: &ExportSettings) -> anyhow::Result<reqwest::Client> {
    if settings.skip_tls_verification {
        warn!("TLS certificate verification is disabled for the secret server");
    }
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(settings.skip_tls_verification)
        .build()?;
    Ok(client)
}

pub(crate) fn vault_headers(token: &str, namespace: Option<&str>) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut token_value = HeaderValue::from_str(token)?;
    token_value.set_sensitive(true);
    headers.insert(HeaderName::from_bytes(TOKEN_HEADER.as_bytes())?, token_value);
    if let Some(namespace) = namespace.filter(|value| !value.trim().is_empty()) {
        headers.insert(
            HeaderName::from_bytes(NAMESPACE_HEADER.as_bytes())?,
            HeaderValue::from_str(namespace)?,
        );
    }
    Ok(headers)
}

pub(crate) fn secret_url(addr: &str, secret_path: &str) -> String {
    format!("{}{}{}", addr.trim_end_matches('/'), KV_DATA_PREFIX, secret_path)
}

/// Reads KV v2 secrets with a fixed token and namespace.
pub(crate) struct VaultClient {
    client: reqwest::Client,
    addr: String,
    headers: HeaderMap,
}

impl VaultClient {
    pub(crate) fn new(client: reqwest::Client, settings: &ExportSettings) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            addr: settings.url.clone(),
            headers: vault_headers(&settings.token, settings.namespace.as_deref())?,
        })
    }
}

#[async_trait]
impl SecretSource for VaultClient {
    async fn read_secret(&self, secret_path: &str) -> Result<KvReadResponse, FetchError> {
        let url = secret_url(&self.addr, secret_path);
        debug!(method = "GET", url = %url, "http request");
        let start = std::time::Instant::now();
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        debug!(
            method = "GET",
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<KvReadResponse>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}
