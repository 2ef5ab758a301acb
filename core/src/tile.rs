use serde::{Deserialize, Serialize};

/// What a cell can show while the round is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// The aza-obake, clicking it scores.
    Ghost,
    /// The azaika, clicking it counts as a miss.
    Decoy,
}

/// Per-cell one-shot latch, reset whenever the board is resampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Unrevealed(ItemKind),
    Resolved(ItemKind),
}

impl CellState {
    pub const fn is_clickable(self) -> bool {
        matches!(self, Self::Unrevealed(_))
    }

    pub const fn item(self) -> Option<ItemKind> {
        match self {
            Self::Empty => None,
            Self::Unrevealed(kind) | Self::Resolved(kind) => Some(kind),
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}
