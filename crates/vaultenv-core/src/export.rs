use tracing::{debug, warn};

use crate::{EnvWriter, ExportError, LookupMode, Redactor, SecretReference, SecretSource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub missing: usize,
}

/// Fetches and exports every reference, strictly one after another.
///
/// The first failure stops the run. Variables exported before it stay
/// exported. A value is always masked before it is exported.
pub async fn export_secrets<S, H>(
    source: &S,
    host: &mut H,
    references: &[SecretReference],
    mode: LookupMode,
) -> Result<ExportSummary, ExportError>
where
    S: SecretSource + ?Sized,
    H: Redactor + EnvWriter,
{
    let mut summary = ExportSummary::default();
    for reference in references {
        let fetch_error = |err| ExportError::Fetch {
            path: reference.secret_path.clone(),
            source: err,
        };
        let response = source
            .read_secret(&reference.secret_path)
            .await
            .map_err(fetch_error)?;
        let value = response
            .lookup(&reference.secret_key, mode)
            .map_err(fetch_error)?;
        let rendered = value.render();

        if value.is_missing() {
            warn!(
                path = %reference.secret_path,
                key = %reference.secret_key,
                "key not found in secret; exporting {} as \"{}\"",
                reference.output_name,
                rendered.as_str()
            );
            summary.missing += 1;
        }
        if value.is_maskable() {
            host.mask(&rendered)?;
        }
        host.set(&reference.output_name, &rendered)?;
        summary.exported += 1;

        debug!(
            version = ?response.version(),
            "✔ {} => {}",
            reference.secret_path,
            reference.output_name
        );
    }
    Ok(summary)
}
