//! Catalog, selection and battle rules for the creature gallery.
//!
//! This crate holds all state and logic behind the gallery; it does no I/O.
//!
//! ```text
//! pokedex-protocol (payloads + validation)
//!        │
//!        ▼
//! pokedex-battle (catalog, selection, battle rules) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-client (HTTP data access + presentation)
//! ```
//!
//! # Main Types
//!
//! - [`Catalog`] - load-once, index-stable list of creatures
//! - [`Selection`] - up to two selected catalog indices
//! - [`compute_battle`] / [`BattleResult`] - stat-total comparison
//! - [`Session`] - owns the above plus the load phase
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_battle::Session;
//!
//! let mut session = Session::new();
//! session.begin_loading()?;
//! session.finish_loading(records)?;
//!
//! session.toggle(0)?;
//! if session.toggle(3)?.battle_ready {
//!     let result = session.battle()?;
//!     println!("winner: {:?}", result.winner);
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use engine::{
    BattleError, BattleResult, Combatant, MOVES_USED, Winner, compute_battle, damage, moves_used,
    total_stats,
};
pub use selection::{SELECTION_CAPACITY, Selection, SelectionChange, SelectionError, Toggle};
pub use session::{Session, SessionError, SessionPhase};

// Re-export the record types the API is expressed in
pub use pokedex_protocol::{CreatureRecord, SpeciesDetail, StatEntry, Stats};
