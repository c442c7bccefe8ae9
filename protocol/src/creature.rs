//! Creature records
//!
//! These types mirror the JSON shape of the `/pokemon/{name}` endpoint and
//! the validated record the rest of the workspace works with.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{ATTACK, DEFENSE, ParseError};

/// Named reference used throughout the provider's payloads
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct MoveSlot {
    #[serde(rename = "move")]
    name: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

/// Raw `/pokemon/{name}` payload, restricted to the fields we read
#[derive(Debug, Deserialize)]
struct CreaturePayload {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    moves: Vec<MoveSlot>,
    #[serde(default)]
    stats: Vec<StatSlot>,
    #[serde(default)]
    sprites: Sprites,
}

/// A single named base stat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub base: u32,
}

impl StatEntry {
    pub fn new(name: impl Into<String>, base: u32) -> Self {
        Self {
            name: name.into(),
            base,
        }
    }
}

/// Base stats in provider order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats(Vec<StatEntry>);

impl Stats {
    pub fn new(entries: Vec<StatEntry>) -> Self {
        Self(entries)
    }

    /// Base value of the named stat
    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.iter().find(|s| s.name == name).map(|s| s.base)
    }

    /// Sum of every base value, widened so any set of `u32` stats fits
    pub fn total(&self) -> u64 {
        self.0.iter().map(|s| u64::from(s.base)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, u32)> for Stats {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, base)| StatEntry::new(name, base))
                .collect(),
        )
    }
}

/// A creature as fetched from the catalog endpoint. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    /// Provider units (decimetres)
    pub height: u32,
    /// Provider units (hectograms)
    pub weight: u32,
    pub abilities: Vec<String>,
    /// Move names in provider order
    pub moves: Vec<String>,
    pub stats: Stats,
    pub sprite_url: Option<String>,
}

impl CreatureRecord {
    /// Check the invariants the battle rules rely on
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.trim().is_empty() {
            return Err(ParseError::MissingField("name".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in self.stats.iter() {
            if !seen.insert(entry.name.as_str()) {
                return Err(ParseError::DuplicateStat {
                    creature: self.name.clone(),
                    stat: entry.name.clone(),
                });
            }
        }

        for required in [ATTACK, DEFENSE] {
            if !seen.contains(required) {
                return Err(ParseError::MissingStat {
                    creature: self.name.clone(),
                    stat: required.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl From<CreaturePayload> for CreatureRecord {
    fn from(payload: CreaturePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            abilities: payload
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            moves: payload.moves.into_iter().map(|m| m.name.name).collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            sprite_url: payload.sprites.front_default,
        }
    }
}

/// Parse and validate a `/pokemon/{name}` response body
pub fn parse_creature(json: &str) -> Result<CreatureRecord, ParseError> {
    let payload: CreaturePayload = serde_json::from_str(json)?;
    let record = CreatureRecord::from(payload);
    record.validate()?;
    Ok(record)
}
