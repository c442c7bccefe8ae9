//! Two-slot selection of catalog indices

use thiserror::Error;

/// Maximum number of creatures that can be selected at once
pub const SELECTION_CAPACITY: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Selection is full; nothing was changed and it is still battle-ready
    #[error("Only two creatures can be selected at once")]
    CapacityExceeded,
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

/// Outcome of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub toggle: Toggle,
    /// Whether exactly two creatures are now selected
    pub battle_ready: bool,
}

/// Set of at most two distinct catalog indices, kept in insertion order
/// so results can label the "first" and "second" pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` if absent, remove it if present.
    ///
    /// Adding to a full selection is rejected without mutation. Index
    /// validity against the catalog is the caller's responsibility.
    pub fn toggle(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        let toggle = if let Some(pos) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(pos);
            Toggle::Deselected
        } else {
            if self.indices.len() >= SELECTION_CAPACITY {
                return Err(SelectionError::CapacityExceeded);
            }
            self.indices.push(index);
            Toggle::Selected
        };

        Ok(SelectionChange {
            toggle,
            battle_ready: self.is_battle_ready(),
        })
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected indices in insertion order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_battle_ready(&self) -> bool {
        self.indices.len() == SELECTION_CAPACITY
    }

    /// The (first, second) pair when battle-ready
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.indices[..] {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }
}
