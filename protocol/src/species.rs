//! Species detail records from the `/pokemon-species/{id}` endpoint

use serde::Deserialize;

use crate::ParseError;
use crate::creature::NamedResource;

#[derive(Debug, Deserialize)]
struct SpeciesPayload {
    color: Option<NamedResource>,
    #[serde(default)]
    shape: Option<NamedResource>,
    #[serde(default)]
    egg_groups: Vec<NamedResource>,
}

/// Supplementary data shown in the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesDetail {
    pub color: String,
    /// Some species have no shape on record
    pub shape: Option<String>,
    pub egg_groups: Vec<String>,
}

/// Parse a `/pokemon-species/{id}` response body
pub fn parse_species(json: &str) -> Result<SpeciesDetail, ParseError> {
    let payload: SpeciesPayload = serde_json::from_str(json)?;

    let color = payload
        .color
        .map(|c| c.name)
        .ok_or_else(|| ParseError::MissingField("color".to_string()))?;

    Ok(SpeciesDetail {
        color,
        shape: payload.shape.map(|s| s.name),
        egg_groups: payload.egg_groups.into_iter().map(|g| g.name).collect(),
    })
}
