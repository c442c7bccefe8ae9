use std::time::Duration;

use pokedex_protocol::{DEFAULT_CRY_BASE, DEFAULT_POKEMON_BASE, DEFAULT_SPECIES_BASE};

/// Creatures shown in the gallery, in display order
pub const DEFAULT_ROSTER: [&str; 15] = [
    "charizard",
    "bulbasaur",
    "squirtle",
    "jigglypuff",
    "gengar",
    "eevee",
    "mewtwo",
    "lucario",
    "snorlax",
    "dragonite",
    "gyarados",
    "blaziken",
    "greninja",
    "machamp",
    "pikachu",
];

/// Where the gallery fetches from and what it fetches
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub pokemon_base: String,
    pub species_base: String,
    pub cry_base: String,
    pub roster: Vec<String>,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            pokemon_base: DEFAULT_POKEMON_BASE.to_string(),
            species_base: DEFAULT_SPECIES_BASE.to_string(),
            cry_base: DEFAULT_CRY_BASE.to_string(),
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ApiConfig {
    /// Replace the roster
    pub fn with_roster<I, S>(mut self, roster: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster = roster.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
