use thiserror::Error;

/// A malformed entry in the secrets string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("You must provide a value when mapping a secret to a name. Input: \"{input}\"")]
    EmptyOutputName { input: String },

    #[error("You must provide a valid path and key. Input: \"{input}\"")]
    InvalidPathAndKey { input: String },

    #[error("Key does not produce a usable variable name; map it with '|'. Input: \"{input}\"")]
    EmptyDerivedName { input: String },
}

impl ParseError {
    /// The trimmed entry that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::EmptyOutputName { input }
            | Self::InvalidPathAndKey { input }
            | Self::EmptyDerivedName { input } => input,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request failed: {status} {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("response is missing `{field}`")]
    MalformedResponse { field: &'static str },

    #[error("key `{key}` not found in secret data")]
    MissingKey { key: String },
}

/// Failure of one of the host capabilities (masking or variable export).
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to write host command: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid variable name: \"{0}\"")]
    InvalidName(String),

    #[error("unexpected input: {what} should not contain the delimiter \"{delimiter}\"")]
    DelimiterCollision {
        what: &'static str,
        delimiter: String,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read secret '{path}'")]
    Fetch {
        path: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Host(#[from] HostError),
}
