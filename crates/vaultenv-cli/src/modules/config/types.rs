use vaultenv_core::LookupMode;

/// Connection parameters shared by every secret read.
#[derive(Clone)]
pub struct ExportSettings {
    pub url: String,
    pub token: String,
    pub namespace: Option<String>,
    pub skip_tls_verification: bool,
    pub mode: LookupMode,
}

impl std::fmt::Debug for ExportSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportSettings")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("namespace", &self.namespace)
            .field("skip_tls_verification", &self.skip_tls_verification)
            .field("mode", &self.mode)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ActionInputs {
    pub settings: ExportSettings,
    pub secrets: String,
}
