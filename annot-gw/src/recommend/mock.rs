//! Static mock annotation tables
//!
//! Stand-in for the external annotation service during development and
//! testing. Keyed by owning file name; files not present here yield no
//! recommendations, which is not an error.

use annot_common::models::{Annotation, RawRecommendation, RecommendationEntry};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

fn record(
    column_name: &str,
    concept_name: &str,
    concept_id: &str,
    concept_definition: &str,
    confidence: f64,
) -> RawRecommendation {
    RawRecommendation {
        column_name: Some(column_name.to_string()),
        concept_name: Some(concept_name.to_string()),
        concept_id: Some(concept_id.to_string()),
        concept_definition: Some(concept_definition.to_string()),
        confidence: Some(confidence),
    }
}

/// Raw attribute recommendations by owning file name
pub static MOCK_ATTRIBUTE_RECOMMENDATIONS_BY_FILE: Lazy<
    BTreeMap<&'static str, Vec<RawRecommendation>>,
> = Lazy::new(|| {
    BTreeMap::from([
        (
            "SurveyResults.csv",
            vec![
                record(
                    "SurveyID",
                    "Identifier",
                    "http://purl.obolibrary.org/obo/IAO_0000578",
                    "An information content entity that identifies something.",
                    0.95,
                ),
                record(
                    "Latitude",
                    "Latitude",
                    "http://purl.obolibrary.org/obo/GEO_00000016",
                    "The angular distance of a place north or south of the earth's equator.",
                    0.99,
                ),
                record(
                    "AirTemperature_F",
                    "Air Temperature",
                    "http://purl.obolibrary.org/obo/ENVO_00002006",
                    "The temperature of the air.",
                    0.9,
                ),
                record(
                    "AirTemperature_F",
                    "Temperature",
                    "http://purl.obolibrary.org/obo/PATO_0000146",
                    "A physical quality of the thermal energy of a system.",
                    0.85,
                ),
                record(
                    "WaterTemperature_F",
                    "Water Temperature",
                    "http://purl.obolibrary.org/obo/ENVO_00002010",
                    "The temperature of water.",
                    0.95,
                ),
                record(
                    "Lake",
                    "Lake",
                    "http://purl.obolibrary.org/obo/ENVO_00000020",
                    "A large body of water surrounded by land.",
                    0.92,
                ),
                record(
                    "SpeciesCode",
                    "Taxon",
                    "http://rs.tdwg.org/dwc/terms/Taxon",
                    "A group of one or more populations of an organism.",
                    0.88,
                ),
                record(
                    "SpeciesCode",
                    "Scientific Name",
                    "http://rs.tdwg.org/dwc/terms/scientificName",
                    "The full scientific name.",
                    0.8,
                ),
            ],
        ),
        (
            "EggMasses.csv",
            vec![record(
                "EggMassSubstrate",
                "Surface Layer",
                "http://purl.obolibrary.org/obo/ENVO_00002005",
                "The layer of a material that is in contact with the surrounding medium.",
                0.7,
            )],
        ),
    ])
});

/// Pre-built geographic-coverage recommendations (no merge pass)
pub static MOCK_GEOGRAPHICCOVERAGE_RECOMMENDATIONS: Lazy<Vec<RecommendationEntry>> =
    Lazy::new(|| {
        vec![RecommendationEntry {
            id: "geo-1".to_string(),
            recommendations: vec![
                Annotation {
                    label: "Freshwater Lake Ecosystem".to_string(),
                    uri: "http://purl.obolibrary.org/obo/ENVO_01000021".to_string(),
                    ontology: "ENVO".to_string(),
                    confidence: 0.75,
                    description: "An aquatic ecosystem that is part of a lake.".to_string(),
                    property_label: "contains".to_string(),
                    property_uri: "http://www.w3.org/ns/oa#hasBody".to_string(),
                    attribute_name: None,
                    object_name: None,
                    request_id: None,
                },
                Annotation {
                    label: "Temperate Climate".to_string(),
                    uri: "http://purl.obolibrary.org/obo/ENVO_01000000".to_string(),
                    ontology: "ENVO".to_string(),
                    confidence: 0.80,
                    description: "A climate with moderate conditions".to_string(),
                    property_label: "contains".to_string(),
                    property_uri: "http://www.w3.org/ns/oa#hasBody".to_string(),
                    attribute_name: None,
                    object_name: None,
                    request_id: None,
                },
            ],
        }]
    });
