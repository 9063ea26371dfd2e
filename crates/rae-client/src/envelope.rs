use rae_types::wire::null_as_default;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Uniform wrapper around every response payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Required: a body without it is not an envelope
    pub ok: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

/// Business-level result carried by an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    Missing {
        error: String,
        suggestions: Vec<String>,
    },
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl<T> Envelope<T> {
    /// Split into found/missing. `ok` with no data is malformed, not a miss.
    pub fn into_outcome(self) -> Result<Outcome<T>, DecodeError> {
        if !self.ok {
            return Ok(Outcome::Missing {
                error: self.error,
                suggestions: self.suggestions,
            });
        }

        self.data.map(Outcome::Found).ok_or(DecodeError::MissingData)
    }
}

impl<T: Default> Envelope<T> {
    /// Flat view: `(ok, data, error, suggestions)`, absent data as `T::default()`
    pub fn into_parts(self) -> (bool, T, String, Vec<String>) {
        (
            self.ok,
            self.data.unwrap_or_default(),
            self.error,
            self.suggestions,
        )
    }
}

/// Payload of `/random` and `/daily`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPayload {
    pub word: String,
}
