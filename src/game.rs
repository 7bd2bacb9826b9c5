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

//! The game controller.
//!
//! A `Game` owns the move history, the position currently shown, and the order
//! in which the move list is displayed.  Everything else (whose turn it is, the
//! winner, the status line, move descriptions) is derived from those on every
//! read.

use tracing::{debug, instrument, trace};

use crate::board::{Board, Mark, CELLS};
use crate::error::{GameError, Result};
use crate::evaluator::{self, Win};

/// The line shown above the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Draw,
    Winner(Mark),
    NextPlayer(Mark),
}

/// One entry of the move list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveEntry {
    /// The number of moves made to reach this entry's board.
    pub ply: usize,
    /// Zero-based `(row, column)` of the cell played on this ply.  `None` for the game start.
    pub coordinates: Option<(usize, usize)>,
    /// The entry for the board being shown.  It is a label, not a control.
    pub is_current: bool,
}

/// A user interaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    CellClicked(usize),
    HistoryClicked(usize),
    ToggleOrder,
    Reset,
}

#[derive(Clone, Debug)]
pub struct Game {
    history: Vec<Board>,
    current: usize,
    ascending: bool,
}

impl Game {
    /// Creates a game at the start, with the move list in ascending order.
    pub fn new() -> Game {
        Game {
            history: vec![Board::new()],
            current: 0,
            ascending: true,
        }
    }

    /// Creates a game at the start with the given move list order.
    pub fn with_order(ascending: bool) -> Game {
        Game {
            ascending: ascending,
            ..Game::new()
        }
    }

    /// Places the next player's mark at `index`.
    ///
    /// Returns `Ok(false)` without changing anything if the cell is occupied or
    /// the shown board already has a winner.  Any moves after the shown one are
    /// discarded before the new board is appended.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, index: usize) -> Result<bool> {
        if index >= CELLS {
            return Err(GameError::CellOutOfRange(index));
        }

        let board = self.current_board();
        if evaluator::evaluate(&board).is_some() || !board.is_empty(index) {
            trace!("ignoring play on cell {}", index);
            return Ok(false);
        }

        let mark = self.next_mark();
        let next = board.with_mark(index, mark)?;

        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        debug!(%mark, index, ply = self.current, "placed mark");
        Ok(true)
    }

    /// Shows the board as it was after `ply` moves.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, ply: usize) -> Result<()> {
        if ply >= self.history.len() {
            return Err(GameError::PlyOutOfRange {
                ply: ply,
                len: self.history.len(),
            });
        }

        self.current = ply;
        debug!(ply, "jumped");
        Ok(())
    }

    /// Flips the order of the move list.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        trace!(ascending = self.ascending, "toggled order");
    }

    /// Discards the history and starts over.  The move list order is kept.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.current = 0;
        debug!("reset");
    }

    /// Routes a user interaction to the matching operation.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        match event {
            Event::CellClicked(index) => self.play(index).map(|_| ()),
            Event::HistoryClicked(ply) => self.jump_to(ply),
            Event::ToggleOrder => {
                self.toggle_order();
                Ok(())
            },
            Event::Reset => {
                self.reset();
                Ok(())
            },
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The ply of the board being shown.
    pub fn current_ply(&self) -> usize {
        self.current
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current]
    }

    /// Returns the mark that will make the next move.
    pub fn next_mark(&self) -> Mark {
        Mark::for_ply(self.current)
    }

    pub fn winner(&self) -> Option<Win> {
        evaluator::evaluate(&self.current_board())
    }

    /// True when every ply has been used and nobody won.
    pub fn is_draw(&self) -> bool {
        self.current == CELLS && self.winner().is_none()
    }

    pub fn status(&self) -> Status {
        if self.is_draw() {
            Status::Draw
        } else if let Some(win) = self.winner() {
            Status::Winner(win.mark)
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }

    /// Returns the cell that was played to reach `ply`.  `None` for the game
    /// start and for plies outside the history.
    pub fn last_changed_cell(&self, ply: usize) -> Option<usize> {
        if ply == 0 || ply >= self.history.len() {
            return None;
        }

        Board::changed_cell(&self.history[ply - 1], &self.history[ply])
    }

    /// Returns the move list entry for `ply`.
    pub fn entry(&self, ply: usize) -> Result<MoveEntry> {
        if ply >= self.history.len() {
            return Err(GameError::PlyOutOfRange {
                ply: ply,
                len: self.history.len(),
            });
        }

        Ok(MoveEntry {
            ply: ply,
            coordinates: self.last_changed_cell(ply).map(Board::coordinates),
            is_current: ply == self.current,
        })
    }

    /// Returns the text of the move list entry for `ply`.
    pub fn describe(&self, ply: usize) -> Result<String> {
        self.entry(ply).map(|entry| entry.to_string())
    }

    /// Returns the move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut moves = (0..self.history.len())
            .filter_map(|ply| self.entry(ply).ok())
            .collect::<Vec<_>>();

        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    /// The label of the order control, naming the order it switches to.
    pub fn order_label(&self) -> &'static str {
        if self.ascending {
            "Descending Order"
        } else {
            "Ascending Order"
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn play_all(game: &mut Game, cells: &[usize]) {
        for &index in cells {
            assert_eq!(game.play(index), Ok(true), "play {}", index);
        }
    }

    #[test]
    fn test_new() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_ply(), 0);
        assert_eq!(game.current_board(), Board::new());
        assert_eq!(game.status(), Status::NextPlayer(Mark::X));
        assert!(game.is_ascending());
    }

    #[test]
    fn test_alternation() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 0]);

        assert_eq!(game.current_board().get(4), Some(Some(Mark::X)));
        assert_eq!(game.current_board().get(0), Some(Some(Mark::O)));
        assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    }

    #[test]
    fn test_play_occupied() {
        let mut game = Game::new();
        play_all(&mut game, &[4]);

        assert_eq!(game.play(4), Ok(false));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_ply(), 1);
    }

    #[test]
    fn test_play_out_of_range() {
        let mut game = Game::new();
        assert_eq!(game.play(9), Err(GameError::CellOutOfRange(9)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_after_win() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(game.status(), Status::Winner(Mark::X));
        assert_eq!(game.winner().map(|win| win.line), Some([0, 1, 2]));
        assert_eq!(game.play(8), Ok(false));
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.current_ply(), 5);
    }

    #[test]
    fn test_branching() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 2, 3]);

        game.jump_to(1).unwrap();
        assert_eq!(game.status(), Status::NextPlayer(Mark::O));
        play_all(&mut game, &[8]);

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_ply(), 2);
        assert_eq!(game.current_board().get(8), Some(Some(Mark::O)));
        assert_eq!(game.current_board().get(1), Some(None));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = Game::new();
        play_all(&mut game, &[0]);

        assert_eq!(game.jump_to(2), Err(GameError::PlyOutOfRange { ply: 2, len: 2 }));
        assert_eq!(game.current_ply(), 1);
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new();
        // X O X
        // X O O
        // O X X
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert!(game.is_draw());
        assert_eq!(game.status(), Status::Draw);
        for index in 0..CELLS {
            assert_eq!(game.play(index), Ok(false));
        }

        game.jump_to(8).unwrap();
        assert!(!game.is_draw());
        assert_eq!(game.status(), Status::NextPlayer(Mark::X));
    }

    #[test]
    fn test_win_on_last_move() {
        let mut game = Game::new();
        // X O X
        // O X O
        // O X X
        play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

        assert_eq!(game.current_ply(), 9);
        assert!(!game.is_draw());
        assert_eq!(game.status(), Status::Winner(Mark::X));
        assert_eq!(game.winner().map(|win| win.line), Some([0, 4, 8]));
    }

    #[test]
    fn test_last_changed_cell() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 2, 6]);

        assert_eq!(game.last_changed_cell(0), None);
        assert_eq!(game.last_changed_cell(1), Some(4));
        assert_eq!(game.last_changed_cell(2), Some(2));
        assert_eq!(game.last_changed_cell(3), Some(6));
        assert_eq!(game.last_changed_cell(4), None);
    }

    #[test]
    fn test_moves_order() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 2]);

        let plies = |game: &Game| game.moves().iter().map(|entry| entry.ply).collect::<Vec<_>>();
        assert_eq!(plies(&game), vec![0, 1, 2]);
        assert_eq!(game.order_label(), "Descending Order");

        game.toggle_order();
        assert_eq!(plies(&game), vec![2, 1, 0]);
        assert_eq!(game.order_label(), "Ascending Order");
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_ply(), 2);

        game.jump_to(1).unwrap();
        assert_eq!(game.current_board().get(2), Some(None));
        assert!(game.moves()[1].is_current);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 2]);
        game.toggle_order();
        game.reset();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_ply(), 0);
        assert!(!game.is_ascending());
    }

    #[test]
    fn test_dispatch() {
        let mut game = Game::new();
        game.dispatch(Event::CellClicked(0)).unwrap();
        game.dispatch(Event::CellClicked(0)).unwrap();
        game.dispatch(Event::CellClicked(1)).unwrap();
        assert_eq!(game.history().len(), 3);

        game.dispatch(Event::HistoryClicked(0)).unwrap();
        assert_eq!(game.current_ply(), 0);
        assert!(game.dispatch(Event::HistoryClicked(3)).is_err());

        game.dispatch(Event::ToggleOrder).unwrap();
        assert!(!game.is_ascending());

        game.dispatch(Event::Reset).unwrap();
        assert_eq!(game.history().len(), 1);
    }
}
