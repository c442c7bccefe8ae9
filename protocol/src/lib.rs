use thiserror::Error;

pub mod creature;
pub mod endpoint;
pub mod species;


pub use creature::{CreatureRecord, StatEntry, Stats, parse_creature};
pub use endpoint::{
    DEFAULT_CRY_BASE, DEFAULT_POKEMON_BASE, DEFAULT_SPECIES_BASE, cry_url, pokemon_url,
    species_url,
};
pub use species::{SpeciesDetail, parse_species};

/// Stat names the battle rules depend on
pub const ATTACK: &str = "attack";
pub const DEFENSE: &str = "defense";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("{creature} has no '{stat}' stat")]
    MissingStat { creature: String, stat: String },

    #[error("{creature} lists stat '{stat}' more than once")]
    DuplicateStat { creature: String, stat: String },
}
