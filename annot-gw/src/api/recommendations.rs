//! Recommendation aggregation endpoint
//!
//! Gateway aggregation: the inbound payload may carry several recognized
//! element types; each present type fans out to its recommender and the
//! per-type results are flattened into one list. A fresh correlation id is
//! generated per request and stamped on every produced annotation.

use annot_common::models::{
    AttributeElement, GeographicCoverageElement, RecommendationEntry,
};
use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;

/// Inbound payload: element lists keyed by type. Unrecognized types
/// (DATATABLE, OTHERENTITY, ...) are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, rename = "ATTRIBUTE")]
    pub attributes: Option<Vec<AttributeElement>>,
    #[serde(default, rename = "GEOGRAPHICCOVERAGE")]
    pub geographic_coverage: Option<Vec<GeographicCoverageElement>>,
}

/// POST /api/recommendations
pub async fn recommend_annotations(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationRequest>,
) -> Json<Vec<RecommendationEntry>> {
    let request_id = Uuid::new_v4().to_string();
    let mut results: Vec<RecommendationEntry> = Vec::new();

    if let Some(attributes) = &payload.attributes {
        info!(
            request_id = %request_id,
            "Recommending for {} attribute elements",
            attributes.len()
        );
        results.extend(
            state
                .attribute_recommender
                .recommend(attributes, Some(&request_id))
                .await,
        );
    }
    if let Some(geos) = &payload.geographic_coverage {
        info!(
            request_id = %request_id,
            "Recommending for {} geographic-coverage elements",
            geos.len()
        );
        results.extend(
            state
                .geographic_recommender
                .recommend(geos, Some(&request_id)),
        );
    }

    if payload.attributes.is_none() && payload.geographic_coverage.is_none() {
        warn!(request_id = %request_id, "No recognized element types in payload");
    } else {
        info!(
            request_id = %request_id,
            "Returning {} recommendation entries",
            results.len()
        );
    }
    Json(results)
}
