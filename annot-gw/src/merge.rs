//! Result merging: joins annotation-source records back onto the source
//! elements they were produced for.
//!
//! The join key is the element `name` against the record `column_name`.
//! Multiple records may share a key (multiple candidate concepts per
//! field); they are preserved in input order. Elements with no matching
//! record produce no output entry at all.

use annot_common::models::{
    Annotation, AttributeElement, RawRecommendation, RecommendationEntry,
};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::ontology::extract_ontology;

/// Fixed annotation-property configuration for one element type
#[derive(Debug, Clone, Copy)]
pub struct MergeRule {
    pub property_label: &'static str,
    pub property_uri: &'static str,
}

/// Look up the merge rule for an element type.
///
/// Only `ATTRIBUTE` is configured today; the geographic recommender builds
/// its entries without a merge pass.
pub fn merge_rule(element_type: &str) -> Option<MergeRule> {
    match element_type {
        "ATTRIBUTE" => Some(MergeRule {
            property_label: "contains measurements of type",
            property_uri:
                "http://ecoinformatics.org/oboe/oboe.1.2/oboe-core.owl#containsMeasurementsOfType",
        }),
        _ => None,
    }
}

/// Join annotation-source records onto source elements by `name` /
/// `column_name` equality.
///
/// An unconfigured element type yields an empty result (logged, not an
/// error). A record missing any field needed to build an [`Annotation`] is
/// skipped on its own; sibling records and sibling elements are unaffected.
pub fn merge_recommender_results(
    source_items: &[AttributeElement],
    recommender_items: &[RawRecommendation],
    element_type: &str,
) -> Vec<RecommendationEntry> {
    let Some(rule) = merge_rule(element_type) else {
        warn!("No merge rule configured for element type: {}", element_type);
        return Vec::new();
    };

    // Index records by column name, preserving input order per key
    let mut lookup: HashMap<&str, Vec<&RawRecommendation>> = HashMap::new();
    for record in recommender_items {
        if let Some(key) = record.column_name.as_deref() {
            lookup.entry(key).or_default().push(record);
        }
    }

    let mut merged = Vec::new();
    for item in source_items {
        let Some(name) = item.name.as_deref() else {
            continue;
        };
        let Some(candidates) = lookup.get(name) else {
            continue;
        };
        let mut recommendations = Vec::new();
        for record in candidates {
            match build_annotation(record, item, rule) {
                Some(annotation) => recommendations.push(annotation),
                None => {
                    warn!(
                        "Skipping malformed annotation record for element {} (column {})",
                        item.id, name
                    );
                }
            }
        }
        merged.push(RecommendationEntry {
            id: item.id.clone(),
            recommendations,
        });
    }
    debug!(
        "Merged {} of {} source elements with annotation records",
        merged.len(),
        source_items.len()
    );
    merged
}

/// Build one annotation from a raw record; `None` if any required field is
/// missing.
fn build_annotation(
    record: &RawRecommendation,
    item: &AttributeElement,
    rule: MergeRule,
) -> Option<Annotation> {
    let label = record.concept_name.clone()?;
    let uri = record.concept_id.clone()?;
    let confidence = record.confidence?;
    let description = record.concept_definition.clone()?;
    Some(Annotation {
        ontology: extract_ontology(Some(&uri)),
        label,
        uri,
        confidence,
        description,
        property_label: rule.property_label.to_string(),
        property_uri: rule.property_uri.to_string(),
        attribute_name: item.name.clone(),
        object_name: item.object_name.clone(),
        request_id: None,
    })
}
