//! Geographic-coverage recommender
//!
//! The simplest component in the pipeline: no grouping and no per-element
//! join. Mock mode returns the fixed table (with the request id stamped
//! on); live mode is not yet implemented and returns nothing.

use annot_common::models::{GeographicCoverageElement, RecommendationEntry};
use tracing::debug;

use crate::recommend::mock::MOCK_GEOGRAPHICCOVERAGE_RECOMMENDATIONS;
use crate::recommend::AnnotationSource;

/// Recommender for geographic-coverage metadata elements
pub struct GeographicCoverageRecommender {
    source: AnnotationSource,
}

impl GeographicCoverageRecommender {
    pub fn new(source: AnnotationSource) -> Self {
        Self { source }
    }

    /// Produce recommendation entries for geographic-coverage elements.
    ///
    /// Element content is currently ignored beyond validation upstream.
    pub fn recommend(
        &self,
        geos: &[GeographicCoverageElement],
        request_id: Option<&str>,
    ) -> Vec<RecommendationEntry> {
        match &self.source {
            AnnotationSource::Mock => {
                let mut results = MOCK_GEOGRAPHICCOVERAGE_RECOMMENDATIONS.clone();
                if let Some(request_id) = request_id {
                    for entry in &mut results {
                        for annotation in &mut entry.recommendations {
                            annotation.request_id = Some(request_id.to_string());
                        }
                    }
                }
                results
            }
            AnnotationSource::Live(_) => {
                // TODO: wire up once the annotation service grows a
                // geographic-coverage endpoint
                debug!(
                    "Geographic-coverage live mode not implemented; {} elements ignored",
                    geos.len()
                );
                Vec::new()
            }
        }
    }
}
