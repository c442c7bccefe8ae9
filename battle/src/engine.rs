//! Stat-total battle rules
//!
//! A battle is a single comparison, not a simulation: the creature with the
//! higher sum of base stats wins, and each side's damage figure is computed
//! independently from its attack against the other's defense. The moves
//! reported are the first two the provider lists and never affect the
//! outcome.

use pokedex_protocol::{ATTACK, CreatureRecord, DEFENSE};
use thiserror::Error;

/// Number of moves reported per creature
pub const MOVES_USED: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("{creature} is missing the '{stat}' stat")]
    MissingStat { creature: String, stat: String },
}

/// Who won the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Winner {
    Creature(String),
    Draw,
}

impl Winner {
    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }

    /// Name of the winning creature, `None` on a draw
    pub fn name(&self) -> Option<&str> {
        match self {
            Winner::Creature(name) => Some(name),
            Winner::Draw => None,
        }
    }
}

/// One side of a battle result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combatant {
    pub name: String,
    pub total_stats: u64,
    pub moves_used: Vec<String>,
    /// Damage this creature deals to the other one
    pub damage_caused: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BattleResult {
    pub winner: Winner,
    pub first: Combatant,
    pub second: Combatant,
}

impl BattleResult {
    pub fn combatants(&self) -> [&Combatant; 2] {
        [&self.first, &self.second]
    }
}

/// Sum of every base stat
pub fn total_stats(creature: &CreatureRecord) -> u64 {
    creature.stats.total()
}

/// The first moves a creature would use, at most [`MOVES_USED`]
pub fn moves_used(creature: &CreatureRecord) -> Vec<String> {
    creature.moves.iter().take(MOVES_USED).cloned().collect()
}

fn required_stat(creature: &CreatureRecord, stat: &str) -> Result<u32, BattleError> {
    creature
        .stats
        .get(stat)
        .ok_or_else(|| BattleError::MissingStat {
            creature: creature.name.clone(),
            stat: stat.to_string(),
        })
}

/// Damage `attacker` deals to `defender`, floored at zero
pub fn damage(attacker: &CreatureRecord, defender: &CreatureRecord) -> Result<u32, BattleError> {
    let attack = required_stat(attacker, ATTACK)?;
    let defense = required_stat(defender, DEFENSE)?;
    Ok(attack.saturating_sub(defense))
}

/// Compare two creatures. Deterministic and side-effect free.
pub fn compute_battle(a: &CreatureRecord, b: &CreatureRecord) -> Result<BattleResult, BattleError> {
    let first = Combatant {
        name: a.name.clone(),
        total_stats: total_stats(a),
        moves_used: moves_used(a),
        damage_caused: damage(a, b)?,
    };
    let second = Combatant {
        name: b.name.clone(),
        total_stats: total_stats(b),
        moves_used: moves_used(b),
        damage_caused: damage(b, a)?,
    };

    let winner = match first.total_stats.cmp(&second.total_stats) {
        std::cmp::Ordering::Greater => Winner::Creature(first.name.clone()),
        std::cmp::Ordering::Less => Winner::Creature(second.name.clone()),
        std::cmp::Ordering::Equal => Winner::Draw,
    };

    Ok(BattleResult {
        winner,
        first,
        second,
    })
}
