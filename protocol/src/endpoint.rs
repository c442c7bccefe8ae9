//! Endpoint URL construction

pub const DEFAULT_POKEMON_BASE: &str = "https://pokeapi.co/api/v2/pokemon/";
pub const DEFAULT_SPECIES_BASE: &str = "https://pokeapi.co/api/v2/pokemon-species/";
pub const DEFAULT_CRY_BASE: &str = "https://play.pokemonshowdown.com/audio/cries/";

fn join(base: &str, segment: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// URL of the creature record for `name`
pub fn pokemon_url(base: &str, name: &str) -> String {
    join(base, &normalize(name))
}

/// URL of the species detail for creature `id`
pub fn species_url(base: &str, id: u32) -> String {
    join(base, &id.to_string())
}

/// URL of the cry audio for `name`. Existence is never checked.
pub fn cry_url(base: &str, name: &str) -> String {
    join(base, &format!("{}.mp3", normalize(name)))
}
