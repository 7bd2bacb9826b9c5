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

//! What the player sees.

use crate::board::{Cell, CELLS};
use crate::game::{Game, MoveEntry, Status};

/// How a cell is marked out on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Highlight {
    None,
    /// Part of the winning line.
    Winner,
    /// The cell played to reach the shown board.
    Current,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellView {
    pub value: Cell,
    pub highlight: Highlight,
}

/// Everything needed to draw one frame of the game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct View {
    pub cells: [CellView; CELLS],
    pub status: Status,
    /// The move list, already in display order.
    pub moves: Vec<MoveEntry>,
    pub order_label: &'static str,
}

impl Game {
    /// Builds the view of the board currently shown.
    pub fn view(&self) -> View {
        let board = self.current_board();
        let win = self.winner();
        let last = self.last_changed_cell(self.current_ply());

        let mut cells = [CellView { value: None, highlight: Highlight::None }; CELLS];
        for (index, cell) in cells.iter_mut().enumerate() {
            cell.value = board.0[index];
            cell.highlight = if win.map_or(false, |win| win.contains(index)) {
                Highlight::Winner
            } else if last == Some(index) {
                Highlight::Current
            } else {
                Highlight::None
            };
        }

        View {
            cells: cells,
            status: self.status(),
            moves: self.moves(),
            order_label: self.order_label(),
        }
    }
}
