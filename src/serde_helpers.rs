//! Envelope deserialization helpers.
//!
//! With the `tracing` feature enabled, unknown response fields are logged as
//! warnings (useful for detecting API additions) and deserialization
//! failures are reported with the JSON path at which they occurred.

use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(feature = "tracing")]
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    let original = value.clone();

    let result: Result<T, serde_json::Error> = serde_ignored::deserialize(value, |path| {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            "unknown field in API response"
        );
    });

    match result {
        Ok(parsed) => Ok(parsed),
        Err(_) => {
            // Re-run through serde_path_to_error so the log names the exact
            // path that failed, not just the error message.
            let text = original.to_string();
            let mut deserializer = serde_json::Deserializer::from_str(&text);
            match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
                Ok(parsed) => Ok(parsed),
                Err(err) => {
                    tracing::error!(
                        type_name = %type_name::<T>(),
                        path = %err.path(),
                        error = %err.inner(),
                        "deserialization failed"
                    );
                    Err(err.into_inner().into())
                }
            }
        }
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}
