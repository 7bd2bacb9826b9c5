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

use thiserror::Error;

/// Errors raised by the game and its input parsing.
///
/// Clicking an occupied cell, or any cell after the game is decided, is not an
/// error; `Game::play` ignores those.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    #[error("Cell index out of bounds: {0}")]
    CellOutOfRange(usize),

    #[error("Cell already occupied: {0}")]
    CellOccupied(usize),

    #[error("Move #{ply} does not exist (history has {len} entries)")]
    PlyOutOfRange { ply: usize, len: usize },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
