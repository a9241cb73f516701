use serde::Deserialize;
use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::{FetchError, MISSING_VALUE};

/// Body of a KV v2 read (`GET /v1/secret/data/<path>`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KvReadResponse {
    #[serde(default)]
    pub data: Option<KvSecretData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KvSecretData {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub metadata: Option<KvMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KvMetadata {
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// How a key that is absent from the secret data is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Export the literal `undefined` and keep going.
    #[default]
    Lenient,
    /// Fail the export with [`FetchError::MissingKey`].
    Strict,
}

/// A leaf borrowed from the response body; only the rendered form is copied.
#[derive(Clone, Copy, PartialEq)]
pub enum SecretValue<'a> {
    Present(&'a Value),
    Missing,
}

impl std::fmt::Debug for SecretValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present(_) => f.write_str("SecretValue(<redacted>)"),
            Self::Missing => f.write_str("SecretValue(<missing>)"),
        }
    }
}

impl SecretValue<'_> {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Missing and `null` leaves render as placeholder words, which are not
    /// registered as masks.
    #[must_use]
    pub fn is_maskable(&self) -> bool {
        !matches!(self, Self::Missing | Self::Present(Value::Null))
    }

    /// String form of the value as it is exported.
    ///
    /// Non-string JSON values are coerced the way the action always has:
    /// arrays are joined with `,`, objects become `[object Object]`.
    #[must_use]
    pub fn render(&self) -> Zeroizing<String> {
        match self {
            Self::Present(value) => Zeroizing::new(coerce_to_string(value)),
            Self::Missing => Zeroizing::new(MISSING_VALUE.to_string()),
        }
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(value), _, _) => value.to_string(),
            (_, Some(value), _) => value.to_string(),
            (_, _, Some(value)) => value.to_string(),
            _ => number.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<String>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl KvReadResponse {
    /// Resolves `data.data.<key>`.
    ///
    /// Missing `data` or `data.data` objects are always an error; a missing
    /// leaf is only an error in [`LookupMode::Strict`].
    pub fn lookup(&self, key: &str, mode: LookupMode) -> Result<SecretValue<'_>, FetchError> {
        let secret = self
            .data
            .as_ref()
            .ok_or(FetchError::MalformedResponse { field: "data" })?;
        let fields = secret
            .data
            .as_ref()
            .ok_or(FetchError::MalformedResponse { field: "data.data" })?;
        match (fields.get(key), mode) {
            (Some(value), _) => Ok(SecretValue::Present(value)),
            (None, LookupMode::Lenient) => Ok(SecretValue::Missing),
            (None, LookupMode::Strict) => Err(FetchError::MissingKey {
                key: key.to_string(),
            }),
        }
    }

    pub fn version(&self) -> Option<u64> {
        self.data
            .as_ref()
            .and_then(|secret| secret.metadata.as_ref())
            .and_then(|metadata| metadata.version)
    }
}
