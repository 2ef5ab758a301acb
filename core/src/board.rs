use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells, stored row-major as `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<CellState>,
}

impl Board {
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_items(size: Coord2, items: &[(CellIndex, ItemKind)]) -> Result<Self> {
        let mut board = Self::empty(size);
        for &(index, kind) in items {
            board.place(index, kind)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols.try_into().unwrap_or(Coord::MAX), rows.try_into().unwrap_or(Coord::MAX))
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn len(&self) -> CellCount {
        self.cells.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == CellState::Empty)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        if index < self.len() {
            Ok(index_to_coords(index, self.width()))
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<CellState> {
        let coords = self.validate_index(index).ok()?;
        Some(self[coords])
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self[coords]
    }

    /// Cells in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }

    pub fn item_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.item().is_some())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn count_unrevealed(&self, kind: ItemKind) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Unrevealed(kind))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Puts an unrevealed item at `index`, replacing whatever was there.
    pub fn place(&mut self, index: CellIndex, kind: ItemKind) -> Result<()> {
        let coords = self.validate_index(index)?;
        self.cells[coords.to_nd_index()] = CellState::Unrevealed(kind);
        Ok(())
    }

    /// Latches an unrevealed item, returning its kind the first time only.
    pub(crate) fn resolve(&mut self, index: CellIndex) -> Option<ItemKind> {
        let coords = self.validate_index(index).ok()?;
        let cell = &mut self.cells[coords.to_nd_index()];
        match *cell {
            CellState::Unrevealed(kind) => {
                *cell = CellState::Resolved(kind);
                Some(kind)
            }
            CellState::Empty | CellState::Resolved(_) => None,
        }
    }
}

impl Index<Coord2> for Board {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
