/// Header carrying the caller-supplied access token.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Header carrying the optional namespace.
pub const NAMESPACE_HEADER: &str = "X-Vault-Namespace";

/// Path prefix of the KV v2 read endpoint; the secret path is appended as-is.
pub const KV_DATA_PREFIX: &str = "/v1/secret/data/";

pub const REFERENCE_SEPARATOR: char = ';';
pub const RENAME_SIGIL: char = '|';

/// Export rendering of a key that is absent from the secret's data.
pub const MISSING_VALUE: &str = "undefined";
