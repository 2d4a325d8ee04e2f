//! Live-mode dispatch tests against a local stub annotation service
//!
//! Tests cover:
//! - End-to-end group dispatch and merge over HTTP
//! - Mapping-shape response normalization (candidate cap, column stamping)
//! - Per-group fault isolation: one file's failure must not suppress
//!   results from the other files in the same request
//! - Connection failure handling (service unreachable)

use annot_common::models::AttributeElement;
use annot_gw::recommend::{AnnotationClient, AnnotationSource, AttributeRecommender};
use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;

/// Spawn a stub annotation service, returning its endpoint URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{}/api/annotate", addr)
}

fn live_recommender(api_url: &str) -> AttributeRecommender {
    let client =
        AnnotationClient::new(api_url, Duration::from_secs(5)).expect("build annotation client");
    AttributeRecommender::new(AnnotationSource::Live(client))
}

fn element(id: &str, name: &str, object_name: &str) -> AttributeElement {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "objectName": object_name,
    }))
    .unwrap()
}

fn latitude_record() -> Value {
    json!({
        "column_name": "Latitude",
        "concept_name": "Latitude",
        "concept_id": "http://purl.obolibrary.org/obo/GEO_00000016",
        "concept_definition": "Angular distance north or south of the equator.",
        "confidence": 0.99
    })
}

/// Stub handler: serves SurveyResults.csv, fails EggMasses.csv with a 500.
async fn annotate_flaky(Json(items): Json<Value>) -> impl IntoResponse {
    let failing_group = items
        .as_array()
        .map(|items| {
            items
                .iter()
                .any(|item| item["objectName"] == "EggMasses.csv")
        })
        .unwrap_or(false);
    if failing_group {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})))
    } else {
        (StatusCode::OK, Json(json!([latitude_record()])))
    }
}

#[tokio::test]
async fn test_one_failing_group_does_not_suppress_others() {
    let api_url = spawn_stub(Router::new().route("/api/annotate", post(annotate_flaky))).await;
    let recommender = live_recommender(&api_url);

    let attributes = vec![
        element("a-lat", "Latitude", "SurveyResults.csv"),
        element("a-sub", "EggMassSubstrate", "EggMasses.csv"),
    ];

    let results = recommender.recommend(&attributes, Some("req-1")).await;

    // EggMasses group failed and was skipped; SurveyResults still merged
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a-lat");
    assert_eq!(results[0].recommendations[0].ontology, "GEO");
    assert_eq!(
        results[0].recommendations[0].request_id.as_deref(),
        Some("req-1")
    );
}

#[tokio::test]
async fn test_outbound_payload_strips_element_ids() {
    async fn annotate_checking(Json(items): Json<Value>) -> impl IntoResponse {
        let any_id = items
            .as_array()
            .map(|items| items.iter().any(|item| item.get("id").is_some()))
            .unwrap_or(true);
        if any_id {
            (StatusCode::BAD_REQUEST, Json(json!({"error": "id leaked"})))
        } else {
            (StatusCode::OK, Json(json!([latitude_record()])))
        }
    }

    let api_url = spawn_stub(Router::new().route("/api/annotate", post(annotate_checking))).await;
    let recommender = live_recommender(&api_url);

    let attributes = vec![element("a-lat", "Latitude", "SurveyResults.csv")];
    let results = recommender.recommend(&attributes, None).await;

    // A 400 from the stub would have skipped the group
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a-lat");
}

#[tokio::test]
async fn test_mapping_shape_response_is_normalized_and_capped() {
    async fn annotate_mapping(Json(_items): Json<Value>) -> impl IntoResponse {
        let candidates: Vec<_> = (0..7)
            .map(|i| {
                json!({
                    "concept_name": format!("Concept {}", i),
                    "concept_id": format!("http://purl.obolibrary.org/obo/ENVO_0000100{}", i),
                    "concept_definition": "A concept.",
                    "confidence": 0.5
                })
            })
            .collect();
        Json(json!({ "Latitude": candidates }))
    }

    let api_url = spawn_stub(Router::new().route("/api/annotate", post(annotate_mapping))).await;
    let recommender = live_recommender(&api_url);

    let attributes = vec![element("a-lat", "Latitude", "SurveyResults.csv")];
    let results = recommender.recommend(&attributes, None).await;

    assert_eq!(results.len(), 1);
    // Mapping shape stamps column_name and caps candidates at 5
    assert_eq!(results[0].recommendations.len(), 5);
    assert_eq!(results[0].recommendations[0].label, "Concept 0");
    assert_eq!(
        results[0].recommendations[0].attribute_name.as_deref(),
        Some("Latitude")
    );
}

#[tokio::test]
async fn test_unreachable_service_yields_empty_results() {
    // Bind then drop to obtain a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let recommender = live_recommender(&format!("http://{}/api/annotate", addr));
    let attributes = vec![element("a-lat", "Latitude", "SurveyResults.csv")];

    let results = recommender.recommend(&attributes, Some("req-1")).await;
    assert!(results.is_empty());
}
