//! Ontology-code extraction from concept URIs
//!
//! Recognizes OBO-style URIs (`.../obo/ENVO_00002006`), the DataONE ECSO
//! namespace, and Darwin Core term URIs. Anything else is `UNKNOWN`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static OBO_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/obo/([A-Z]+)_").expect("valid obo pattern"));
static ODO_ECSO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/odo/(ECSO)_").expect("valid odo pattern"));

/// Parse the ontology code (ENVO, PATO, IAO, ECSO, DWC, ...) from a URI.
///
/// Total over arbitrary input: empty, absent, and unrecognized URIs all
/// yield `"UNKNOWN"`.
pub fn extract_ontology(uri: Option<&str>) -> String {
    let uri = match uri {
        Some(uri) if !uri.is_empty() => uri,
        _ => {
            warn!("extract_ontology called with empty or absent uri");
            return "UNKNOWN".to_string();
        }
    };
    if let Some(captures) = OBO_CODE.captures(uri) {
        return captures[1].to_string();
    }
    if let Some(captures) = ODO_ECSO.captures(uri) {
        return captures[1].to_string();
    }
    if uri.contains("dwc/terms") {
        return "DWC".to_string();
    }
    warn!("extract_ontology could not parse ontology from uri: {}", uri);
    "UNKNOWN".to_string()
}
