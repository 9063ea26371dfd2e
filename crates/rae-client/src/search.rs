use rae_types::WordEntry;
use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, Outcome};
use crate::error::DecodeError;

/// One match from free-text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc: SearchDoc,
    /// Relevance score, informational only
    #[serde(default)]
    pub hits: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDoc {
    /// Matched headword
    pub id: String,
    /// Serialized `WordEntry`
    #[serde(default)]
    pub raw: String,
}

impl SearchHit {
    /// Decode the embedded document. The hit id wins over the word stored
    /// inside it.
    pub fn into_entry(self) -> Result<WordEntry, serde_json::Error> {
        let mut entry: WordEntry = serde_json::from_str(&self.doc.raw)?;
        entry.word = self.doc.id;
        Ok(entry)
    }
}

/// A hit whose embedded document failed to decode
#[derive(Debug, thiserror::Error)]
#[error("hit {index} ({id:?}): {source}")]
pub struct HitDecodeError {
    pub index: usize,
    pub id: String,
    #[source]
    pub source: serde_json::Error,
}

/// Convert hits to entries, keeping order. One bad hit fails the batch.
pub fn hits_to_entries(hits: Vec<SearchHit>) -> Result<Vec<WordEntry>, HitDecodeError> {
    hits.into_iter()
        .enumerate()
        .map(|(index, hit)| {
            let id = hit.doc.id.clone();
            hit.into_entry()
                .map_err(|source| HitDecodeError { index, id, source })
        })
        .collect()
}

/// Decode a search body. Accepts the usual envelope around the hit list as
/// well as a bare list. An envelope with `ok=false` is a service failure, not
/// an empty result.
pub fn decode_hits(body: &[u8]) -> Result<Vec<SearchHit>, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: Envelope<Vec<SearchHit>> = serde_json::from_value(value)?;
    match envelope.into_outcome()? {
        Outcome::Found(hits) => Ok(hits),
        Outcome::Missing { error, .. } => Err(DecodeError::Rejected(error)),
    }
}
