//! annot-gw library - Annotation Gateway service
//!
//! Accepts metadata elements describing ecological datasets and returns
//! ontology-term annotation recommendations, with side channels for emailed
//! term proposals and selection-event logging.

use annot_common::config::Settings;
use annot_common::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod email;
pub mod merge;
pub mod ontology;
pub mod recommend;

use email::ProposalMailer;
use recommend::{AnnotationSource, AttributeRecommender, GeographicCoverageRecommender};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub attribute_recommender: Arc<AttributeRecommender>,
    pub geographic_recommender: Arc<GeographicCoverageRecommender>,
    pub mailer: Arc<ProposalMailer>,
}

impl AppState {
    /// Build state with the annotation source selected by configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let source = AnnotationSource::from_settings(settings)
            .map_err(|e| annot_common::Error::Http(e.to_string()))?;
        Ok(Self {
            attribute_recommender: Arc::new(AttributeRecommender::new(source.clone())),
            geographic_recommender: Arc::new(GeographicCoverageRecommender::new(source)),
            mailer: Arc::new(ProposalMailer::new(settings.smtp.clone())),
        })
    }
}

/// Build application router.
///
/// CORS is permissive: the gateway serves browser frontends on arbitrary
/// origins and carries no credentials of its own.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route(
            "/api/recommendations",
            post(api::recommendations::recommend_annotations),
        )
        .route("/api/proposals", post(api::proposals::submit_proposal))
        .route("/api/log-selection", post(api::log_selection::log_selection))
        .merge(api::health::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
