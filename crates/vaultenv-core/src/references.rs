//! Secret-reference grammar.
//!
//! The secrets string is a `;`-separated list of entries of the form
//! `<path> <key>` or `<path> <key> | <NAME>`. Each entry becomes one
//! [`SecretReference`]; order is preserved because exports happen in the
//! same order the references were written.

use crate::{ParseError, REFERENCE_SEPARATOR, RENAME_SIGIL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    pub secret_path: String,
    pub secret_key: String,
    pub output_name: String,
}

/// Parses every entry of `input`, failing on the first malformed one.
pub fn parse_secret_references(input: &str) -> Result<Vec<SecretReference>, ParseError> {
    input
        .split(REFERENCE_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Result<SecretReference, ParseError> {
    let (path_expr, explicit_name) = match entry.rfind(RENAME_SIGIL) {
        Some(index) => {
            let name = entry[index + RENAME_SIGIL.len_utf8()..].trim();
            if name.is_empty() {
                return Err(ParseError::EmptyOutputName {
                    input: entry.to_string(),
                });
            }
            (&entry[..index], Some(name))
        }
        None => (entry, None),
    };

    let parts: Vec<&str> = path_expr
        .split_whitespace()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let [secret_path, secret_key] = parts.as_slice() else {
        return Err(ParseError::InvalidPathAndKey {
            input: entry.to_string(),
        });
    };

    let output_name = match explicit_name {
        Some(name) => name.to_string(),
        None => {
            let derived = normalize_output_name(secret_key);
            if derived.is_empty() {
                return Err(ParseError::EmptyDerivedName {
                    input: entry.to_string(),
                });
            }
            derived
        }
    };

    Ok(SecretReference {
        secret_path: (*secret_path).to_string(),
        secret_key: (*secret_key).to_string(),
        output_name,
    })
}

/// Derives a variable name from a secret key.
///
/// Only the first `/` becomes `__` and only the first character outside
/// `[A-Za-z0-9_-]` is dropped. Existing workflows rely on the names this
/// produces, so later slashes and symbols are left in place.
#[must_use]
pub fn normalize_output_name(key: &str) -> String {
    let mut name = key.replacen('/', "__", 1);
    if let Some((index, _)) = name
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
    {
        name.remove(index);
    }
    name.to_uppercase()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
