//! Attribute grouping and dispatch
//!
//! Attributes arrive as one flat list per request. They are grouped by
//! owning file (`objectName`), each group is sent to the annotation source
//! as an independent batch, and each group's response is merged back onto
//! its elements. A failed lookup skips that file's group only; the other
//! groups in the request still produce results.

use annot_common::models::{AttributeElement, RecommendationEntry};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::merge::merge_recommender_results;
use crate::recommend::mock::MOCK_ATTRIBUTE_RECOMMENDATIONS_BY_FILE;
use crate::recommend::AnnotationSource;

/// Grouping key for attributes that carry no `objectName`
const UNKNOWN_OBJECT_NAME: &str = "unknown";

/// Recommender for attribute metadata elements
pub struct AttributeRecommender {
    source: AnnotationSource,
}

impl AttributeRecommender {
    pub fn new(source: AnnotationSource) -> Self {
        Self { source }
    }

    /// Produce merged recommendation entries for a flat attribute list.
    ///
    /// Groups are processed in sorted `objectName` order; elements keep
    /// their input order within a group, and output entries follow group
    /// processing order. When a `request_id` is supplied it is stamped on
    /// every produced annotation.
    pub async fn recommend(
        &self,
        attributes: &[AttributeElement],
        request_id: Option<&str>,
    ) -> Vec<RecommendationEntry> {
        // Explicit stable grouping: key -> insertion-ordered bucket,
        // iterated in sorted key order
        let mut groups: BTreeMap<String, Vec<AttributeElement>> = BTreeMap::new();
        for attribute in attributes {
            let key = attribute
                .object_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_OBJECT_NAME.to_string());
            groups.entry(key).or_default().push(attribute.clone());
        }

        let mut final_output = Vec::new();
        for (object_name, group) in &groups {
            let records = match &self.source {
                AnnotationSource::Mock => MOCK_ATTRIBUTE_RECOMMENDATIONS_BY_FILE
                    .get(object_name.as_str())
                    .cloned()
                    .unwrap_or_default(),
                AnnotationSource::Live(client) => {
                    let queries: Vec<_> = group.iter().map(|a| a.to_query()).collect();
                    match client.annotate(&queries).await {
                        Ok(records) => records,
                        Err(e) => {
                            warn!(
                                "Annotation lookup failed for {}: {} (skipping group)",
                                object_name, e
                            );
                            continue;
                        }
                    }
                }
            };

            let mut file_results = merge_recommender_results(group, &records, "ATTRIBUTE");
            if let Some(request_id) = request_id {
                for entry in &mut file_results {
                    for annotation in &mut entry.recommendations {
                        annotation.request_id = Some(request_id.to_string());
                    }
                }
            }
            final_output.extend(file_results);
        }
        debug!(
            "Produced {} attribute entries across {} file groups",
            final_output.len(),
            groups.len()
        );
        final_output
    }
}
