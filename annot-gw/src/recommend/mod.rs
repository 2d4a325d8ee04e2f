//! Recommendation pipeline: grouping, dispatch, and per-type recommenders

pub mod attribute;
pub mod client;
pub mod geographic;
pub mod mock;

pub use attribute::AttributeRecommender;
pub use client::{AnnotationClient, AnnotationError};
pub use geographic::GeographicCoverageRecommender;

use annot_common::config::Settings;
use std::time::Duration;

/// Where a recommender obtains candidate annotations.
///
/// Injected at construction so recommenders stay reentrant and testable;
/// there is no process-wide mode switch.
#[derive(Clone)]
pub enum AnnotationSource {
    /// Static in-memory tables
    Mock,
    /// External annotation service
    Live(AnnotationClient),
}

impl AnnotationSource {
    /// Build the source selected by configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self, AnnotationError> {
        if settings.use_mock_recommendations {
            Ok(Self::Mock)
        } else {
            let client = AnnotationClient::new(
                settings.annotation_api_url.clone(),
                Duration::from_secs(settings.annotation_timeout_secs),
            )?;
            Ok(Self::Live(client))
        }
    }
}
