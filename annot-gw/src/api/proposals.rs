//! Term-proposal endpoint
//!
//! Email dispatch is deliberately fire-and-forget: the notification runs
//! in a spawned task so the submitting request returns as soon as the task
//! is queued, and transport failures are logged rather than surfaced.

use annot_common::models::ProposalRequest;
use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::AppState;

/// Status response for proposal submissions
#[derive(Debug, Serialize)]
pub struct ProposalResponse {
    pub status: String,
    pub message: String,
}

/// POST /api/proposals
pub async fn submit_proposal(
    State(state): State<AppState>,
    Json(proposal): Json<ProposalRequest>,
) -> Json<ProposalResponse> {
    info!(
        "Proposal received for term {:?}; queueing email notification",
        proposal.term_details.label
    );
    let mailer = state.mailer.clone();
    tokio::spawn(async move {
        if let Err(e) = mailer.send(&proposal).await {
            error!("Failed to send proposal email: {}", e);
        }
    });
    Json(ProposalResponse {
        status: "success".to_string(),
        message: "Proposal received and processing.".to_string(),
    })
}
