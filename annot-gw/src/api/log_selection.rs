//! Selection-event logging endpoint
//!
//! The frontend reports which recommendation a user accepted (and which
//! alternatives were shown). Events are logged structurally; there is no
//! persistence layer behind this.

use annot_common::models::LogSelection;
use axum::Json;
use serde::Serialize;
use tracing::info;

/// Receipt response for selection-log events
#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub status: String,
}

/// POST /api/log-selection
pub async fn log_selection(Json(event): Json<LogSelection>) -> Json<ReceiptResponse> {
    info!(
        request_id = %event.request_id,
        event_id = %event.event_id,
        element_id = %event.element_id,
        element_type = %event.element_type,
        selected_uri = %event.selected.uri,
        rejected = event.not_selected.len(),
        "Selection event at {} for element {:?}",
        event.timestamp.to_rfc3339(),
        event.element_name
    );
    Json(ReceiptResponse {
        status: "received".to_string(),
    })
}
