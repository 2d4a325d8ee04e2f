//! Annotation-service HTTP client
//!
//! Posts one file-group of attribute elements (ids stripped) to the
//! configured endpoint and normalizes the two response shapes the service
//! is known to produce: a mapping from column name to candidate records,
//! or an already-flat record list.

use annot_common::models::{AnnotationQuery, RawRecommendation};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// At most this many candidates are taken per column when the service
/// responds in mapping shape.
const MAX_CANDIDATES_PER_COLUMN: usize = 5;

/// Annotation client errors
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Connection, timeout, or other transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the annotation service
    #[error("Annotation service returned status {0}")]
    Status(u16),

    /// Response body was not decodable JSON
    #[error("Failed to decode annotation response: {0}")]
    Decode(String),
}

/// HTTP client for the external annotation service
#[derive(Clone)]
pub struct AnnotationClient {
    http: reqwest::Client,
    api_url: String,
}

impl AnnotationClient {
    /// Build a client with a bounded per-request timeout.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, AnnotationError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnnotationError::Network(e.to_string()))?;
        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// Request candidate annotations for one group of elements.
    ///
    /// Timeouts and connection failures surface as
    /// [`AnnotationError::Network`]; the caller treats every variant as a
    /// whole-group failure.
    pub async fn annotate(
        &self,
        items: &[AnnotationQuery],
    ) -> Result<Vec<RawRecommendation>, AnnotationError> {
        debug!("Posting {} elements to {}", items.len(), self.api_url);
        let response = self
            .http
            .post(&self.api_url)
            .json(items)
            .send()
            .await
            .map_err(|e| AnnotationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnnotationError::Status(status.as_u16()));
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| AnnotationError::Decode(e.to_string()))?;
        Ok(normalize_response(raw))
    }
}

/// Normalize an annotation-service response to a flat record list.
///
/// Mapping shape: per column, at most [`MAX_CANDIDATES_PER_COLUMN`]
/// candidates are kept and each is stamped with the column name if the
/// record lacks one. List shape: used as-is. Individual undecodable
/// candidates are skipped, not fatal.
pub fn normalize_response(raw: Value) -> Vec<RawRecommendation> {
    let mut records = Vec::new();
    match raw {
        Value::Object(columns) => {
            for (column_name, candidates) in columns {
                let Value::Array(candidates) = candidates else {
                    warn!("Ignoring non-list candidates for column {}", column_name);
                    continue;
                };
                for mut candidate in candidates.into_iter().take(MAX_CANDIDATES_PER_COLUMN) {
                    if let Value::Object(ref mut fields) = candidate {
                        fields
                            .entry("column_name".to_string())
                            .or_insert_with(|| Value::String(column_name.clone()));
                    }
                    push_record(&mut records, candidate);
                }
            }
        }
        Value::Array(candidates) => {
            for candidate in candidates {
                push_record(&mut records, candidate);
            }
        }
        other => {
            warn!("Unexpected annotation response shape: {}", other);
        }
    }
    records
}

fn push_record(records: &mut Vec<RawRecommendation>, candidate: Value) {
    match serde_json::from_value::<RawRecommendation>(candidate) {
        Ok(record) => records.push(record),
        Err(e) => warn!("Skipping undecodable annotation record: {}", e),
    }
}
