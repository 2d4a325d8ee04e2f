//! Shared API request/response types
//!
//! Wire types exchanged between the frontend, the gateway, and the external
//! annotation service. Field names follow the established JSON contract,
//! which mixes camelCase (metadata elements, annotations) and snake_case
//! (annotation-service records, log-selection events).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========================================
// Metadata elements (inbound)
// ========================================

/// One metadata attribute to be annotated.
///
/// `name` is the join key back to annotation-service records; `objectName`
/// is the owning data file and drives grouping. Both are caller-supplied
/// and may be absent, in which case the element simply never matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeElement {
    /// Opaque stable identifier, echoed on the matching output entry
    pub id: String,
    /// Column/field name; the join key
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    /// Owning file/table name; the grouping key
    #[serde(default, rename = "objectName")]
    pub object_name: Option<String>,
    /// Description of the owning entity, carried through for context
    #[serde(default, rename = "entityDescription")]
    pub entity_description: Option<String>,
}

impl AttributeElement {
    /// Outbound form for the annotation service: everything but `id`.
    pub fn to_query(&self) -> AnnotationQuery {
        AnnotationQuery {
            name: self.name.clone(),
            description: self.description.clone(),
            context: self.context.clone(),
            object_name: self.object_name.clone(),
            entity_description: self.entity_description.clone(),
        }
    }
}

/// Attribute element as posted to the annotation service (no `id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, rename = "objectName", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(
        default,
        rename = "entityDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub entity_description: Option<String>,
}

/// One geographic-coverage element.
///
/// The geographic recommender currently ignores element content beyond
/// deserializing it, so every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographicCoverageElement {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, rename = "objectName")]
    pub object_name: Option<String>,
}

// ========================================
// Annotation-service records
// ========================================

/// One candidate concept match returned by an annotation source.
///
/// Records are not validated upstream; any field may be missing. A record
/// missing the fields needed to build an [`Annotation`] is skipped during
/// the merge, not treated as a request failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecommendation {
    /// Join key back to [`AttributeElement::name`]
    #[serde(default)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub concept_name: Option<String>,
    /// Concept URI; also the source of the ontology code
    #[serde(default)]
    pub concept_id: Option<String>,
    #[serde(default)]
    pub concept_definition: Option<String>,
    /// Match confidence, 0.0 to 1.0
    #[serde(default)]
    pub confidence: Option<f64>,
}

// ========================================
// Merged output
// ========================================

/// One fully-built annotation recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub label: String,
    pub uri: String,
    /// Short vocabulary code parsed from `uri` (e.g. ENVO, DWC)
    pub ontology: String,
    pub confidence: f64,
    pub description: String,
    #[serde(rename = "propertyLabel")]
    pub property_label: String,
    #[serde(rename = "propertyUri")]
    pub property_uri: String,
    /// Echo of the source element's `name`
    #[serde(
        default,
        rename = "attributeName",
        skip_serializing_if = "Option::is_none"
    )]
    pub attribute_name: Option<String>,
    /// Echo of the source element's `objectName`
    #[serde(default, rename = "objectName", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    /// Per-request correlation id, present only when one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Output unit: one source element id with its ordered recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub id: String,
    pub recommendations: Vec<Annotation>,
}

// ========================================
// Term proposals
// ========================================

/// Details of the ontology term being proposed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDetails {
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub evidence_source: Option<String>,
}

/// Who is proposing the term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitterInfo {
    pub email: String,
    #[serde(default)]
    pub orcid_id: Option<String>,
    pub attribution_consent: bool,
}

/// A vocabulary term-proposal submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalRequest {
    pub target_vocabulary: String,
    pub term_details: TermDetails,
    pub submitter_info: SubmitterInfo,
}

// ========================================
// Selection logging
// ========================================

/// A selectable item in a selection-log event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionItem {
    pub label: String,
    pub uri: String,
    pub property_label: String,
    pub property_uri: String,
    pub confidence: f64,
}

/// A selection-log event: one chosen recommendation plus the alternatives
/// that were shown but not chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSelection {
    pub request_id: String,
    pub event_id: String,
    /// Event time (ISO 8601 on the wire)
    pub timestamp: DateTime<Utc>,
    pub element_id: String,
    pub element_name: String,
    pub element_type: String,
    pub selected: SelectionItem,
    pub not_selected: Vec<SelectionItem>,
}
