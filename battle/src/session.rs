//! Session context: catalog, selection and load phase

use pokedex_protocol::CreatureRecord;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::engine::{BattleError, BattleResult, compute_battle};
use crate::selection::{Selection, SelectionChange, SelectionError};

/// Load phase of a session.
///
/// `Empty → Loading → Ready`, or `Loading → Failed` when the startup batch
/// could not be fetched. There is no way back to `Empty` or `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot {action} while session is {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("Battle needs two selected creatures, {selected} selected")]
    BattleIncomplete { selected: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

/// All mutable state for one viewing session
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    catalog: Catalog,
    selection: Selection,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Empty,
            catalog: Catalog::new(),
            selection: Selection::new(),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Empty → Loading
    pub fn begin_loading(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Empty, "begin loading")?;
        self.phase = SessionPhase::Loading;
        Ok(())
    }

    /// Loading → Ready, populating the catalog
    pub fn finish_loading(&mut self, records: Vec<CreatureRecord>) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Loading, "finish loading")?;
        self.catalog.load(records)?;
        self.phase = SessionPhase::Ready;
        Ok(())
    }

    /// Loading → Failed
    pub fn fail_loading(&mut self, reason: impl Into<String>) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Loading, "fail loading")?;
        self.phase = SessionPhase::Failed(reason.into());
        Ok(())
    }

    fn expect_phase(
        &self,
        expected: SessionPhase,
        action: &'static str,
    ) -> Result<(), SessionError> {
        if self.phase != expected {
            return Err(SessionError::InvalidTransition {
                action,
                phase: self.phase.clone(),
            });
        }
        Ok(())
    }

    /// Toggle a catalog index in the selection.
    ///
    /// Out-of-range indices fail with [`CatalogError::IndexOutOfRange`]
    /// before the selection is touched.
    pub fn toggle(&mut self, index: usize) -> Result<SelectionChange, SessionError> {
        self.catalog.get(index)?;
        Ok(self.selection.toggle(index)?)
    }

    /// Run a battle between the selected pair, first pick first.
    /// The selection is left as it was whatever the outcome.
    pub fn battle(&self) -> Result<BattleResult, SessionError> {
        let (first, second) = self.selection.pair().ok_or(SessionError::BattleIncomplete {
            selected: self.selection.len(),
        })?;

        let a = self.catalog.get(first)?;
        let b = self.catalog.get(second)?;
        Ok(compute_battle(a, b)?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
