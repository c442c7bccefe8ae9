//! Renderable content built from catalog records and battle results

use pokedex_battle::{BattleResult, CreatureRecord, SpeciesDetail, Winner};

/// Number of moves listed in the detail view
pub const DETAIL_MOVE_LIMIT: usize = 5;

pub const DRAW_TEXT: &str = "It's a draw!";

/// A gallery card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub name: String,
    pub sprite_url: Option<String>,
}

impl CardView {
    pub fn new(index: usize, record: &CreatureRecord) -> Self {
        Self {
            index,
            name: record.name.clone(),
            sprite_url: record.sprite_url.clone(),
        }
    }
}

/// Content of the detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub sprite_url: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub abilities: String,
    pub moves: String,
    pub base_stats: String,
    pub color: String,
    pub shape: String,
    pub egg_groups: String,
}

impl DetailView {
    pub fn new(record: &CreatureRecord, species: &SpeciesDetail) -> Self {
        let base_stats = record
            .stats
            .iter()
            .map(|s| format!("{}: {}", s.name, s.base))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: record.name.to_uppercase(),
            sprite_url: record.sprite_url.clone(),
            height: record.height,
            weight: record.weight,
            abilities: record.abilities.join(", "),
            moves: record
                .moves
                .iter()
                .take(DETAIL_MOVE_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            base_stats,
            color: species.color.clone(),
            shape: species.shape.clone().unwrap_or_else(|| "unknown".to_string()),
            egg_groups: species.egg_groups.join(", "),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Height", self.height.to_string()),
            ("Weight", self.weight.to_string()),
            ("Abilities", self.abilities.clone()),
            ("Moves", self.moves.clone()),
            ("Base Stats", self.base_stats.clone()),
            ("Color", self.color.clone()),
            ("Shape", self.shape.clone()),
            ("Egg Groups", self.egg_groups.clone()),
        ]
    }
}

/// Content of the battle results panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleView {
    pub winner: String,
    /// "move-a, move-b (by name)", first pick first
    pub moves_used: [String; 2],
    /// "name dealt N damage.", first pick first
    pub damage_caused: [String; 2],
}

impl BattleView {
    pub fn new(result: &BattleResult) -> Self {
        let winner = match &result.winner {
            Winner::Creature(name) => name.clone(),
            Winner::Draw => DRAW_TEXT.to_string(),
        };

        Self {
            winner,
            moves_used: result
                .combatants()
                .map(|c| format!("{} (by {})", c.moves_used.join(", "), c.name)),
            damage_caused: result
                .combatants()
                .map(|c| format!("{} dealt {} damage.", c.name, c.damage_caused)),
        }
    }
}

/// Blocking, user-recoverable notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A third creature was clicked while two are selected
    SelectionFull,
    /// Battle was requested without two creatures selected
    BattleIncomplete,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SelectionFull => "You can only select two Pokémon for battle.",
            Notice::BattleIncomplete => "Select two Pokémon for battle!",
        }
    }
}
