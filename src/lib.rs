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

//! A game of tic-tac-toe with a browsable move history.
//!
//! A `Game` keeps every board of the current game.  Any earlier board can be
//! shown again with `Game::jump_to`, and playing from an earlier board discards
//! the moves that followed it.
//!
//! # Example
//!
//! ```rust
//! use tic_tac_toe::{Game, Mark, Status};
//!
//! let mut game = Game::new();
//! for &cell in [0, 3, 1, 4, 2].iter() {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status(), Status::NextPlayer(Mark::X));
//! assert_eq!(game.describe(1).unwrap(), "Go to move #1 (row: 1, col: 1)");
//! ```

pub use self::board::{Board, Cell, Mark, CELLS};
pub use self::command::Command;
pub use self::error::{GameError, Result};
pub use self::evaluator::{evaluate, Win, LINES};
pub use self::game::{Event, Game, MoveEntry, Status};
pub use self::view::{CellView, Highlight, View};

pub mod command;

mod board;
mod display;
mod error;
mod evaluator;
mod game;
mod view;
