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

use std::fmt;

use crate::board::{Board, Mark};
use crate::game::{MoveEntry, Status};
use crate::view::{Highlight, View};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Status::Draw => write!(f, "Draw"),
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coordinates {
            Some((row, col)) if self.ply > 0 => if self.is_current {
                write!(f, "You are at move #{} (row: {}, col: {})", self.ply, row + 1, col + 1)
            } else {
                write!(f, "Go to move #{} (row: {}, col: {})", self.ply, row + 1, col + 1)
            },
            _ => write!(f, "Go to game start"),
        }
    }
}

fn write_grid<F>(f: &mut fmt::Formatter, cell: F) -> fmt::Result where F: Fn(usize) -> (char, String, char) {
    write!(f, "\n   1  2  3")?;
    for y in 0..3 {
        write!(f, "\n{} ", y + 1)?;
        for x in 0..3 {
            let (open, content, close) = cell(x + 3 * y);
            write!(f, "{}{}{}", open, content, close)?;
        }
    }
    Ok(())
}

fn content(value: Option<Mark>) -> String {
    match value {
        Some(mark) => mark.to_string(),
        None => String::from(" "),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, |index| ('[', content(self.0[index]), ']'))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        write_grid(f, |index| {
            let cell = self.cells[index];
            let (open, close) = match cell.highlight {
                Highlight::None => ('[', ']'),
                Highlight::Winner => ('<', '>'),
                Highlight::Current => ('(', ')'),
            };
            (open, content(cell.value), close)
        })?;

        write!(f, "\n\n[{}]", self.order_label)?;
        for entry in &self.moves {
            if entry.is_current {
                write!(f, "\n  -> {}", entry)?;
            } else {
                write!(f, "\n{:>4}. {}", entry.ply, entry)?;
            }
        }
        Ok(())
    }
}
