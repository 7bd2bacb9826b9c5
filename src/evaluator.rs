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

//! Win detection.

use crate::board::{Board, Mark};

/// Every winning line: rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the mark that completed it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Win {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl Win {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first line in `LINES` order whose three cells hold the same mark.
///
/// A full board without a winner is not reported here; whether that is a draw
/// depends on the game's position, not on the board alone.
pub fn evaluate(board: &Board) -> Option<Win> {
    let b = &board.0;

    LINES.iter()
        .filter_map(|&line| match b[line[0]] {
            Some(mark) if b[line[1]] == Some(mark) && b[line[2]] == Some(mark) => Some(Win {
                mark: mark,
                line: line,
            }),
            _ => None,
        })
        .next()
}
