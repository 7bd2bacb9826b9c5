//
// This file is part of tic_tac_toe.
//
// tic_tac_toe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_toe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_toe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! The 3x3 board and its marks.

use crate::error::{GameError, Result};

/// Either X or O.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark that moves on the given ply.  X always moves first.
    pub fn for_ply(ply: usize) -> Mark {
        if ply % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// A single space on the board.  `None` is empty.
pub type Cell = Option<Mark>;

/// The number of cells on a board.
pub const CELLS: usize = 9;

/// A snapshot of the 3x3 board, indexed 0 through 8 in row-major order.
///
/// Snapshots are plain values.  Placing a mark produces a new board and leaves
/// the original untouched, so earlier snapshots in a game's history can always
/// be shown again.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Board(pub [Cell; CELLS]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([None; CELLS])
    }

    /// Returns the contents of the cell at `index`, or `None` if `index` is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.0.get(index).cloned()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Some(None)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board> {
        match self.get(index) {
            None => Err(GameError::CellOutOfRange(index)),
            Some(Some(_)) => Err(GameError::CellOccupied(index)),
            Some(None) => {
                let mut next = *self;
                next.0[index] = Some(mark);
                Ok(next)
            },
        }
    }

    /// Zero-based `(row, column)` of a cell index.
    pub fn coordinates(index: usize) -> (usize, usize) {
        (index / 3, index % 3)
    }

    /// Returns the first index at which the two boards differ.
    pub fn changed_cell(previous: &Board, next: &Board) -> Option<usize> {
        previous.0.iter()
            .zip(next.0.iter())
            .position(|(a, b)| a != b)
    }
}
