//! Conversion of fetched secret values into environment variables.
//!
//! A value that parses as a JSON object becomes one variable per top-level
//! key. Anything else (plain text, arrays, scalars, broken JSON) becomes a
//! single variable named after the secret.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::{Map, Value};
use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::VAR_PREFIX;
use crate::core::types::{SecretValue, VariableMap};
use crate::error::{DecodeError, Result};

/// Standard alphabet, padding optional.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Derive the variables of one secret.
///
/// # Errors
///
/// Returns `DecodeError` if a binary value is not base64 or does not
/// decode to ASCII text.
pub fn normalize(secret_name: &str, raw: &SecretValue) -> Result<VariableMap> {
    let decoded = decode(secret_name, raw)?;

    let mut vars = VariableMap::new();
    match parse_object(&decoded) {
        Some(object) => {
            trace!(secret = %secret_name, keys = object.len(), "value is a JSON object");
            for (key, value) in object {
                vars.insert(variable_name(&key), render(value));
            }
        }
        None => {
            trace!(secret = %secret_name, "value is opaque text");
            vars.insert(variable_name(secret_name), decoded.as_str().to_string());
        }
    }

    Ok(vars)
}

/// Prefixed variable name for a secret name or JSON key.
pub fn variable_name(name: &str) -> String {
    format!("{}{}", VAR_PREFIX, name)
}

/// Whether the text is a JSON object (not an array or scalar).
pub fn is_json_object(text: &str) -> bool {
    parse_object(text).is_some()
}

/// Text form of a secret value.
///
/// Binary values hold base64 text; they are decoded and must be ASCII.
pub fn decode(secret_name: &str, raw: &SecretValue) -> Result<Zeroizing<String>> {
    let bytes = match raw {
        SecretValue::Text(text) => return Ok(Zeroizing::new(text.clone())),
        SecretValue::Binary(bytes) => bytes,
    };

    let encoded: Zeroizing<Vec<u8>> = Zeroizing::new(
        bytes
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect(),
    );
    let plain = Zeroizing::new(BASE64.decode(encoded.as_slice()).map_err(|e| {
        DecodeError::InvalidBase64 {
            name: secret_name.to_string(),
            reason: e.to_string(),
        }
    })?);

    if let Some(position) = plain.iter().position(|b| !b.is_ascii()) {
        return Err(DecodeError::NotAscii {
            name: secret_name.to_string(),
            position,
        }
        .into());
    }

    // All bytes are ASCII, so this is a plain copy.
    Ok(Zeroizing::new(plain.iter().map(|&b| b as char).collect()))
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(text) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Strings are taken verbatim, every other JSON value as compact JSON.
fn render(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
